//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPWIRE_API_URL` - Storefront API base URL (default: `http://localhost:3000`)
//! - `SHOPWIRE_PLATFORM` - `host` (default) or `android-emulator`
//! - `SHOPWIRE_AUTH_URL` - Auth provider endpoint (enables provider-backed identity)
//! - `SHOPWIRE_AUTH_ANON_KEY` - Auth provider anonymous key (paired with the URL)
//!
//! The two auth variables come as a pair: setting only one of them is a
//! configuration error. With neither set, the deployment runs in manual
//! identity mode.

use secrecy::SecretString;
use thiserror::Error;

/// Default API endpoint for local development.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Host-loopback alias visible from inside the Android emulator, where
/// `localhost` resolves to the emulator itself rather than the dev machine.
const ANDROID_HOST_LOOPBACK: &str = "10.0.2.2";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Platform the client is running on.
///
/// Only affects how loopback addresses in the base URL are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Base URL used as configured.
    #[default]
    Host,
    /// Loopback addresses rewritten to the emulator's host alias.
    AndroidEmulator,
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(Self::Host),
            "android-emulator" => Ok(Self::AndroidEmulator),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}

/// Which identity implementation the deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// Opaque user-id entered manually (e.g. in a settings surface).
    Manual,
    /// Sessions managed by an external auth provider.
    Provider,
}

/// Auth provider connection settings.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct AuthConfig {
    /// Auth provider endpoint.
    pub url: String,
    /// Anonymous API key for the provider.
    pub anon_key: SecretString,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    /// Platform quirk handling for the base URL.
    pub platform: Platform,
    /// Auth provider settings; `None` means manual identity mode.
    pub auth: Option<AuthConfig>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or if
    /// the auth pair is only half-configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("SHOPWIRE_API_URL", DEFAULT_API_URL);
        let platform = match get_optional_env("SHOPWIRE_PLATFORM") {
            Some(raw) => raw.parse::<Platform>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPWIRE_PLATFORM".to_string(), e)
            })?,
            None => Platform::default(),
        };

        let auth_url = get_optional_env("SHOPWIRE_AUTH_URL");
        let auth_key = get_optional_env("SHOPWIRE_AUTH_ANON_KEY");
        let auth = match (auth_url, auth_key) {
            (Some(url), Some(key)) => Some(AuthConfig {
                url,
                anon_key: SecretString::from(key),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar(
                    "SHOPWIRE_AUTH_ANON_KEY".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("SHOPWIRE_AUTH_URL".to_string()));
            }
        };

        Ok(Self::new(base_url, platform, auth))
    }

    /// Build a configuration directly, normalizing the base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, platform: Platform, auth: Option<AuthConfig>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            platform,
            auth,
        }
    }

    /// The base URL after platform adjustments.
    ///
    /// On the Android emulator, `localhost` is the emulator itself; every
    /// `localhost`/`127.0.0.1` occurrence is rewritten to the host-loopback
    /// alias so the client reaches the dev machine. Non-loopback URLs pass
    /// through unchanged on every platform.
    #[must_use]
    pub fn base_url(&self) -> String {
        match self.platform {
            Platform::Host => self.base_url.clone(),
            Platform::AndroidEmulator => self
                .base_url
                .replace("localhost", ANDROID_HOST_LOOPBACK)
                .replace("127.0.0.1", ANDROID_HOST_LOOPBACK),
        }
    }

    /// Which identity implementation this deployment should construct.
    #[must_use]
    pub const fn identity_mode(&self) -> IdentityMode {
        if self.auth.is_some() {
            IdentityMode::Provider
        } else {
            IdentityMode::Manual
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
