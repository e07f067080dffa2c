use crate::core::error::IntentError;
use crate::core::portal::Portal;
use crate::models::event::PortalEvent;
use crate::models::navigation::{MenuEntry, NavigationState, PageId, TabId};
use tracing::debug;

impl Portal {
    /// Show `page`. Switching to the current page is harmless.
    pub fn switch_page(&mut self, page: PageId) -> Result<(), IntentError> {
        self.begin("switch_page");
        self.set_page(page);
        self.accepted();
        Ok(())
    }

    /// Show `tab` and highlight the menu entry declaring it
    pub fn switch_tab(&mut self, tab: TabId) -> Result<(), IntentError> {
        self.begin("switch_tab");

        self.state.navigation.active_tab = tab;
        debug!(
            tab = ?tab,
            menu_entry = ?MenuEntry::for_tab(tab).map(|entry| entry.label),
            "Switched tab"
        );
        self.emit(PortalEvent::NavigationChanged(self.state.navigation));

        self.accepted();
        Ok(())
    }

    pub fn navigation(&self) -> NavigationState {
        self.state.navigation
    }

    /// Menu entry highlighted for the active tab
    pub fn selected_menu_entry(&self) -> Option<&'static MenuEntry> {
        MenuEntry::for_tab(self.state.navigation.active_tab)
    }

    pub(crate) fn set_page(&mut self, page: PageId) {
        self.state.navigation.active_page = page;
        debug!(page = ?page, "Switched page");
        self.emit(PortalEvent::NavigationChanged(self.state.navigation));
    }
}
