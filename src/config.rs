//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so deploy-specific
//! values are baked in from the build environment via `option_env!`. Every
//! value has a default that matches the stock backend deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_AUTH_SNAPSHOT_KEY: &str = "auth-storage";
pub const DEFAULT_BANNER_DISMISS_MS: u32 = 3000;

/// Storage keys used by the auth store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key holding the raw bearer token.
    pub token: String,
    /// Key holding the persisted `{state: {token, user}}` snapshot.
    pub auth_snapshot: String,
}

/// Typed client configuration provided to the app as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub storage_keys: StorageKeys,
    pub banner_dismiss_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl ClientConfig {
    /// Build config from the build environment.
    ///
    /// Optional:
    /// - `STUDYHALL_API_BASE`: default `/api`
    /// - `STUDYHALL_TOKEN_KEY`: default `token`
    /// - `STUDYHALL_AUTH_KEY`: default `auth-storage`
    /// - `STUDYHALL_BANNER_DISMISS_MS`: default 3000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("STUDYHALL_API_BASE"),
            option_env!("STUDYHALL_TOKEN_KEY"),
            option_env!("STUDYHALL_AUTH_KEY"),
            option_env!("STUDYHALL_BANNER_DISMISS_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        token_key: Option<&str>,
        auth_key: Option<&str>,
        banner_dismiss_ms: Option<&str>,
    ) -> Self {
        Self {
            api_base: normalize_base(non_empty(api_base).unwrap_or(DEFAULT_API_BASE)),
            storage_keys: StorageKeys {
                token: non_empty(token_key).unwrap_or(DEFAULT_TOKEN_KEY).to_owned(),
                auth_snapshot: non_empty(auth_key).unwrap_or(DEFAULT_AUTH_SNAPSHOT_KEY).to_owned(),
            },
            banner_dismiss_ms: non_empty(banner_dismiss_ms)
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(DEFAULT_BANNER_DISMISS_MS),
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}
