//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and cached user are the only client state that survives
//! reloads. Every write goes through this module, and storage is written
//! before memory so the two never disagree. Storage holds the raw token under
//! `StorageKeys::token` (read by the HTTP client on each request) and a
//! `{state: {token, user}}` snapshot under `StorageKeys::auth_snapshot`
//! (read on startup).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::config::StorageKeys;
use crate::net::types::User;
use crate::state::cell::StateCell;
use crate::util::storage::{KeyValueStorage, StorageError, load_json, save_json};

/// Authentication state tracking the token, cached user, and whether the
/// user is still being fetched after a partial rehydrate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_teacher)
    }
}

/// Redirect to `/login` once auth has settled without a session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

#[derive(Debug, Serialize, Deserialize)]
struct AuthSnapshot {
    state: SnapshotState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotState {
    token: Option<String>,
    user: Option<User>,
}

/// Persist a new session, then publish it to memory.
///
/// # Errors
///
/// Returns the storage failure; memory is left untouched and any partial
/// token write is rolled back.
pub fn set_auth(
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    token: String,
    user: User,
) -> Result<(), StorageError> {
    persist(storage, keys, &token, &user)?;
    cell.modify(|state| {
        state.token = Some(token);
        state.user = Some(user);
        state.loading = false;
    });
    Ok(())
}

/// Replace the cached user (profile refresh), keeping the current token.
/// Without a session there is nothing to refresh and this is a no-op.
///
/// # Errors
///
/// Returns the storage failure; memory is left untouched.
pub fn update_user(
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    user: User,
) -> Result<(), StorageError> {
    let Some(token) = cell.inspect(|state| state.token.clone()).flatten() else {
        leptos::logging::log!("ignoring profile update without a session");
        return Ok(());
    };
    persist(storage, keys, &token, &user)?;
    cell.modify(|state| {
        state.user = Some(user);
        state.loading = false;
    });
    Ok(())
}

/// Clear the session from storage, then from memory.
///
/// When the token key cannot be removed it is blanked instead, which
/// `rehydrate` reads as signed out. A leftover snapshot is harmless since
/// it is only trusted alongside a matching token.
///
/// # Errors
///
/// Returns the storage failure when the token can be neither removed nor
/// blanked; memory keeps the session in that case.
pub fn logout(
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
) -> Result<(), StorageError> {
    if let Err(err) = storage.remove(&keys.token) {
        leptos::logging::warn!("token removal failed, blanking instead: {err}");
        storage.set(&keys.token, "")?;
    }
    if let Err(err) = storage.remove(&keys.auth_snapshot) {
        leptos::logging::warn!("stale session snapshot left in storage: {err}");
    }
    cell.modify(|state| *state = AuthState::default());
    Ok(())
}

/// Restore the session from storage before first render.
///
/// A token without a matching snapshot user comes back with `loading = true`
/// so the app refetches the current user before deciding to redirect.
pub fn rehydrate(storage: &impl KeyValueStorage, keys: &StorageKeys) -> AuthState {
    let Some(token) = storage.get(&keys.token).filter(|token| !token.is_empty()) else {
        return AuthState::default();
    };

    let snapshot = load_json::<AuthSnapshot>(storage, &keys.auth_snapshot);
    let user = snapshot
        .filter(|snapshot| snapshot.state.token.as_deref() == Some(token.as_str()))
        .and_then(|snapshot| snapshot.state.user);
    let loading = user.is_none();

    AuthState { token: Some(token), user, loading }
}

fn persist(storage: &impl KeyValueStorage, keys: &StorageKeys, token: &str, user: &User) -> Result<(), StorageError> {
    let previous = storage.get(&keys.token);
    storage.set(&keys.token, token)?;
    let snapshot = AuthSnapshot {
        state: SnapshotState { token: Some(token.to_owned()), user: Some(user.clone()) },
        version: 0,
    };
    if let Err(err) = save_json(storage, &keys.auth_snapshot, &snapshot) {
        let restored = match previous {
            Some(previous) => storage.set(&keys.token, &previous),
            None => storage.remove(&keys.token),
        };
        if let Err(restore_err) = restored {
            leptos::logging::warn!("token rollback failed: {restore_err}");
        }
        return Err(err);
    }
    Ok(())
}
