//! Provider-backed identity.
//!
//! Wraps an external auth provider behind the [`AuthBackend`] seam. Session
//! persistence and token refresh are entirely the provider's concern; this
//! layer only calls `sign_in`/`sign_up`/`sign_out` and mirrors the resulting
//! session into the local cell.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::instrument;

use shopwire_core::{Email, EmailError, UserId};

use super::{Identity, IdentityProvider, Remediation};

/// Minimum password length accepted at sign-up.
const MIN_PASSWORD_LENGTH: usize = 8;

/// An authenticated session issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Provider-issued user id.
    pub user_id: UserId,
    /// Email the session was established with.
    pub email: Email,
}

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password combination rejected by the provider.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Sign-up attempted with an already-registered email.
    #[error("an account with this email already exists")]
    EmailAlreadyRegistered,

    /// Email failed structural validation.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// Password does not meet the minimum requirements.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    /// The provider failed for another reason.
    #[error("auth provider error: {0}")]
    Provider(String),
}

/// The external auth provider seam.
///
/// Implementations talk to the real provider; tests substitute an in-memory
/// double. All session storage beyond the current process lives behind this
/// trait.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Authenticate with email and password, returning the new session.
    async fn sign_in(&self, email: &Email, password: &str) -> Result<Session, AuthError>;

    /// Register a new account, returning its initial session.
    async fn sign_up(&self, email: &Email, password: &str) -> Result<Session, AuthError>;

    /// Invalidate the provider-side session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Restore a persisted session, if the provider has one.
    async fn restore_session(&self) -> Option<Session>;
}

/// Identity context backed by an external auth provider.
pub struct SessionIdentity<B> {
    backend: B,
    session: RwLock<Option<Session>>,
    loading: AtomicBool,
}

impl<B: AuthBackend> SessionIdentity<B> {
    /// Create an unauthenticated context over the given backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RwLock::new(None),
            loading: AtomicBool::new(false),
        }
    }

    /// Whether session restoration is still in flight.
    ///
    /// Screens show neither content nor the blocking state while this is
    /// true.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// The current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session.read().ok().and_then(|cell| cell.clone())
    }

    /// Restore a persisted session from the provider, e.g. on startup.
    #[instrument(skip(self))]
    pub async fn restore(&self) {
        self.loading.store(true, Ordering::Release);
        let restored = self.backend.restore_session().await;
        if let Ok(mut cell) = self.session.write() {
            *cell = restored;
        }
        self.loading.store(false, Ordering::Release);
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email, or the
    /// provider's rejection otherwise.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        let session = self.backend.sign_in(&email, password).await?;
        self.store(Some(session));
        Ok(())
    }

    /// Register a new account and sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email,
    /// `AuthError::WeakPassword` for a password under the minimum length,
    /// or the provider's rejection otherwise.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }
        let session = self.backend.sign_up(&email, password).await?;
        self.store(Some(session));
        Ok(())
    }

    /// Sign out.
    ///
    /// The local session cell is cleared before the provider round-trip is
    /// awaited, so any dependent read observes `None` immediately even if
    /// the provider is slow.
    ///
    /// # Errors
    ///
    /// Returns the provider's error; the local session is cleared
    /// regardless.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.store(None);
        self.backend.sign_out().await
    }

    fn store(&self, session: Option<Session>) {
        if let Ok(mut cell) = self.session.write() {
            *cell = session;
        }
    }
}

impl<B: AuthBackend> IdentityProvider for SessionIdentity<B> {
    fn current(&self) -> Option<Identity> {
        self.session()
            .map(|s| Identity::new(s.user_id, Some(s.email)))
    }

    fn clear(&self) {
        self.store(None);
    }

    fn remediation(&self) -> Remediation {
        Remediation::SignIn
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in for the external auth provider.
    #[derive(Default)]
    struct FakeBackend {
        users: Mutex<HashMap<String, String>>,
        persisted: Option<Session>,
    }

    impl FakeBackend {
        fn with_user(email: &str, password: &str) -> Self {
            let backend = Self::default();
            backend
                .users
                .lock()
                .unwrap()
                .insert(email.to_owned(), password.to_owned());
            backend
        }
    }

    impl AuthBackend for FakeBackend {
        async fn sign_in(&self, email: &Email, password: &str) -> Result<Session, AuthError> {
            let users = self.users.lock().unwrap();
            match users.get(email.as_str()) {
                Some(stored) if stored == password => Ok(Session {
                    user_id: UserId::new(format!("uid-{}", email.as_str())),
                    email: email.clone(),
                }),
                _ => Err(AuthError::InvalidCredentials),
            }
        }

        async fn sign_up(&self, email: &Email, password: &str) -> Result<Session, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email.as_str()) {
                return Err(AuthError::EmailAlreadyRegistered);
            }
            users.insert(email.as_str().to_owned(), password.to_owned());
            Ok(Session {
                user_id: UserId::new(format!("uid-{}", email.as_str())),
                email: email.clone(),
            })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn restore_session(&self) -> Option<Session> {
            self.persisted.clone()
        }
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let identity = SessionIdentity::new(FakeBackend::with_user("a@b.com", "hunter22"));
        identity.sign_in("a@b.com", "hunter22").await.unwrap();

        let current = identity.current().unwrap();
        assert_eq!(current.user_id.as_str(), "uid-a@b.com");
        assert_eq!(current.email.unwrap().as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let identity = SessionIdentity::new(FakeBackend::with_user("a@b.com", "hunter22"));
        let err = identity.sign_in("a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!identity.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_rejects_malformed_email() {
        let identity = SessionIdentity::new(FakeBackend::default());
        let err = identity.sign_in("not-an-email", "hunter22").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_sign_up_weak_password_never_reaches_backend() {
        let identity = SessionIdentity::new(FakeBackend::default());
        let err = identity.sign_up("a@b.com", "short").await.unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
        assert!(identity.backend.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email() {
        let identity = SessionIdentity::new(FakeBackend::with_user("a@b.com", "hunter22"));
        let err = identity.sign_up("a@b.com", "password1").await.unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyRegistered));
    }

    #[tokio::test]
    async fn test_sign_out_clears_before_backend_completes() {
        let identity = SessionIdentity::new(FakeBackend::with_user("a@b.com", "hunter22"));
        identity.sign_in("a@b.com", "hunter22").await.unwrap();
        assert!(identity.is_authenticated());

        identity.sign_out().await.unwrap();
        assert!(identity.current().is_none());
        assert!(!identity.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_persisted_session() {
        let mut backend = FakeBackend::default();
        backend.persisted = Some(Session {
            user_id: UserId::new("uid-9"),
            email: Email::parse("saved@b.com").unwrap(),
        });
        let identity = SessionIdentity::new(backend);

        assert!(!identity.loading());
        identity.restore().await;
        assert!(!identity.loading());
        assert_eq!(identity.current().unwrap().user_id.as_str(), "uid-9");
    }

    #[tokio::test]
    async fn test_remediation() {
        let identity = SessionIdentity::new(FakeBackend::default());
        assert_eq!(identity.remediation(), Remediation::SignIn);
    }
}
