//! Manually entered identity.

use std::sync::RwLock;

use shopwire_core::UserId;

use super::{Identity, IdentityProvider, Remediation};

/// Identity supplied directly by the user, e.g. typed into a settings
/// surface. Not persisted; cleared on restart.
#[derive(Debug, Default)]
pub struct ManualIdentity {
    user_id: RwLock<Option<UserId>>,
}

impl ManualIdentity {
    /// Create an empty (unauthenticated) manual identity cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current user id.
    ///
    /// An empty or whitespace-only value clears the identity instead of
    /// storing a blank id.
    pub fn set_user_id(&self, id: &str) {
        let trimmed = id.trim();
        let value = if trimmed.is_empty() {
            None
        } else {
            Some(UserId::new(trimmed))
        };
        if let Ok(mut cell) = self.user_id.write() {
            *cell = value;
        }
    }
}

impl IdentityProvider for ManualIdentity {
    fn current(&self) -> Option<Identity> {
        self.user_id
            .read()
            .ok()
            .and_then(|cell| cell.clone())
            .map(|user_id| Identity::new(user_id, None))
    }

    fn clear(&self) {
        if let Ok(mut cell) = self.user_id.write() {
            *cell = None;
        }
    }

    fn remediation(&self) -> Remediation {
        Remediation::EnterUserId
    }
}
