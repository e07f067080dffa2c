use serde::{Deserialize, Serialize};

/// Top-level pages; exactly one is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Login,
    Dashboard,
}

/// Sub-tabs of the dashboard page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    #[default]
    Dashboard,
    Attendance,
    Leave,
    Materials,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_page: PageId,
    pub active_tab: TabId,
}

/// One entry of the sidebar menu and the tab it opens
#[derive(Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub tab: TabId,
}

/// Sidebar menu, in display order
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Dashboard",
        tab: TabId::Dashboard,
    },
    MenuEntry {
        label: "Mark Attendance",
        tab: TabId::Attendance,
    },
    MenuEntry {
        label: "Leave Request",
        tab: TabId::Leave,
    },
    MenuEntry {
        label: "Course Materials",
        tab: TabId::Materials,
    },
];

impl MenuEntry {
    /// The menu entry declaring `tab`, if any
    pub fn for_tab(tab: TabId) -> Option<&'static MenuEntry> {
        MENU.iter().find(|entry| entry.tab == tab)
    }
}

impl NavigationState {
    /// Index into `MENU` of the entry highlighted for the active tab
    pub fn selected_menu_index(&self) -> Option<usize> {
        MENU.iter().position(|entry| entry.tab == self.active_tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_navigation() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_page, PageId::Login);
        assert_eq!(nav.active_tab, TabId::Dashboard);
    }

    #[test]
    fn test_every_tab_has_a_menu_entry() {
        for tab in [TabId::Dashboard, TabId::Attendance, TabId::Leave, TabId::Materials] {
            let entry = MenuEntry::for_tab(tab).expect("menu entry");
            assert_eq!(entry.tab, tab);
        }
    }

    #[test]
    fn test_selected_menu_index() {
        let nav = NavigationState {
            active_page: PageId::Dashboard,
            active_tab: TabId::Leave,
        };
        assert_eq!(nav.selected_menu_index(), Some(2));
        assert_eq!(MENU[2].label, "Leave Request");
    }

    #[test]
    fn test_tab_ids_deserialize_snake_case() {
        let tab: TabId = serde_json::from_str("\"materials\"").unwrap();
        assert_eq!(tab, TabId::Materials);
        assert!(serde_json::from_str::<TabId>("\"grades\"").is_err());
    }
}
