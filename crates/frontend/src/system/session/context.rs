use leptos::prelude::*;

use super::storage;

/// Cached identity of the current user. Owned by the login flow; pages get
/// a copy and never write it back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionIdentity {
    pub username: String,
    pub id_user: String,
}

impl SessionIdentity {
    pub fn from_storage() -> Self {
        Self {
            username: storage::get_username().unwrap_or_default(),
            id_user: storage::get_user_id().unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        !self.id_user.trim().is_empty()
    }
}

/// Reads the identity once and puts it into context
pub fn provide_session() {
    let identity = SessionIdentity::from_storage();
    if !identity.is_known() {
        log::warn!("No id_user in localStorage, purchases cannot be saved");
    }
    provide_context(identity);
}

/// Hook to access the session identity
pub fn use_session() -> SessionIdentity {
    use_context::<SessionIdentity>().unwrap_or_else(SessionIdentity::from_storage)
}
