//! The process-wide identity context.
//!
//! Exactly one identity implementation is active per deployment, selected
//! through [`crate::config::ClientConfig::identity_mode`]:
//!
//! - [`ManualIdentity`] - an opaque user id entered by hand
//! - [`SessionIdentity`] - sessions managed by an external auth provider
//!
//! Both sit behind [`IdentityProvider`], the single seam every consumer
//! reads identity through. There is no ambient global: screens and API
//! callers receive the provider explicitly, and the only writers are the
//! provider's own mutation entry points.

mod manual;
mod session;

pub use manual::ManualIdentity;
pub use session::{AuthBackend, AuthError, Session, SessionIdentity};

use shopwire_core::{Email, UserId};

/// The current acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque user id, asserted to the backend via the identity header.
    pub user_id: UserId,
    /// Email, known only in provider-backed deployments.
    pub email: Option<Email>,
}

impl Identity {
    /// Create an identity.
    #[must_use]
    pub const fn new(user_id: UserId, email: Option<Email>) -> Self {
        Self { user_id, email }
    }
}

/// How a blocked screen lets the user supply a missing identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    /// Prompt the user to enter a user id directly (manual deployments).
    EnterUserId,
    /// Offer navigation to the sign-in screen (provider deployments).
    SignIn,
}

/// Read/mutate interface for the single process-wide identity value.
///
/// Absence of identity is a valid state; at most one identity is current
/// at a time.
pub trait IdentityProvider {
    /// Snapshot of the current identity, if any.
    fn current(&self) -> Option<Identity>;

    /// Clear the current identity. Subsequent `current()` calls observe
    /// `None` immediately.
    fn clear(&self);

    /// Whether an identity is currently present.
    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// The remediation a blocking screen should offer when identity is
    /// absent.
    fn remediation(&self) -> Remediation;
}
