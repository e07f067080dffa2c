use crate::core::error::IntentError;
use crate::core::portal::{Confirm, Portal};
use crate::models::event::PortalEvent;
use crate::models::navigation::{NavigationState, PageId};
use crate::models::session::{Session, UserIdentity};
use crate::utils::text::display_name_from_email;
use crate::validation::forms::LoginForm;
use tracing::info;

pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

impl Portal {
    /// Sign in. Any well-formed email and non-empty password is accepted;
    /// real credential checks belong to an external auth service.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserIdentity, IntentError> {
        self.begin("login");

        let email = LoginForm::new(email, password)
            .validate()
            .or_else(|e| self.reject("login", e))?;

        let user = UserIdentity {
            id: self.state.config.portal.faculty_id.clone(),
            display_name: display_name_from_email(&email),
            email,
        };

        if let Some(previous) = self.state.session.user() {
            info!(previous = %previous.email, "Replacing active session");
        }

        self.state.session = Session::active(user.clone());
        info!(
            user_id = %user.id,
            display_name = %user.display_name,
            "Faculty signed in"
        );
        self.emit(PortalEvent::SessionChanged(self.state.session.clone()));

        self.set_page(PageId::Dashboard);
        self.accept("Login successful!");

        Ok(user)
    }

    /// Sign out after the user confirms. Declining leaves everything as is.
    pub fn logout(&mut self, confirm: &mut dyn Confirm) -> Result<(), IntentError> {
        self.begin("logout");

        if !confirm.confirm(LOGOUT_PROMPT) {
            self.declined("logout");
            return Ok(());
        }

        if let Some(user) = self.state.session.user() {
            info!(user_id = %user.id, "Faculty signed out");
        }

        self.state.session = Session::default();
        self.emit(PortalEvent::SessionChanged(self.state.session.clone()));

        self.state.navigation = NavigationState::default();
        self.emit(PortalEvent::NavigationChanged(self.state.navigation));

        self.accept("Logged out successfully");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.state.session
    }
}
