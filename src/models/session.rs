use serde::{Deserialize, Serialize};

/// The signed-in faculty member
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// Login state of the single local user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_logged_in: bool,
    pub current_user: Option<UserIdentity>,
}

impl Session {
    pub fn active(user: UserIdentity) -> Self {
        Self {
            is_logged_in: true,
            current_user: Some(user),
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.current_user.as_ref()
    }
}
