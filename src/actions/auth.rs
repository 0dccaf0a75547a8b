//! Login, registration, session refresh, and email verification flows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{GENERIC_RETRY_MESSAGE, show_error, show_success};
use crate::config::StorageKeys;
use crate::net::api::EduApi;
use crate::net::types::AuthResponse;
use crate::state::auth::{self, AuthState};
use crate::state::cell::StateCell;
use crate::state::drafts::{LoginForm, RegisterForm};
use crate::state::modal::ModalState;
use crate::util::storage::KeyValueStorage;

/// Outcome shown inline on the verify-email page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified(String),
    Failed(String),
}

const SESSION_NOT_SAVED: &str = "Your browser blocked saving the session. Allow site storage and try again.";

/// Returns `true` once the session is stored; otherwise opens an error.
fn store_session(
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    modal: &impl StateCell<ModalState>,
    response: AuthResponse,
) -> bool {
    match auth::set_auth(cell, storage, keys, response.access_token, response.user) {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("session not persisted: {err}");
            show_error(modal, "Couldn't sign in", SESSION_NOT_SAVED);
            false
        }
    }
}

/// Returns `true` once the session is stored.
pub async fn login(
    api: &impl EduApi,
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    modal: &impl StateCell<ModalState>,
    form: &LoginForm,
) -> bool {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, "Can't sign in", err.to_string());
            return false;
        }
    };
    match api.login(&request).await {
        Ok(response) => store_session(cell, storage, keys, modal, response),
        Err(err) => {
            show_error(modal, "Sign-in failed", err.user_message("Invalid email or password."));
            false
        }
    }
}

pub async fn register(
    api: &impl EduApi,
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    modal: &impl StateCell<ModalState>,
    form: &RegisterForm,
) -> bool {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, "Can't create account", err.to_string());
            return false;
        }
    };
    match api.register(&request).await {
        Ok(response) => {
            let email = response.user.email.clone();
            if !store_session(cell, storage, keys, modal, response) {
                return false;
            }
            show_success(modal, "Welcome!", format!("We sent a verification link to {email}."));
            true
        }
        Err(err) => {
            show_error(modal, "Registration failed", err.user_message(GENERIC_RETRY_MESSAGE));
            false
        }
    }
}

/// Complete a rehydrate (or refresh the profile). A 401 means the stored
/// token is dead, so the session is cleared.
pub async fn fetch_current_user(
    api: &impl EduApi,
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
) {
    match api.current_user().await {
        Ok(user) => {
            if let Err(err) = auth::update_user(cell, storage, keys, user) {
                leptos::logging::warn!("profile not persisted: {err}");
                cell.modify(|state| state.loading = false);
            }
        }
        Err(err) if err.is_unauthorized() => {
            leptos::logging::log!("stored session rejected, signing out");
            sign_out(cell, storage, keys);
        }
        Err(err) => {
            leptos::logging::warn!("failed to load current user: {err}");
            cell.modify(|state| state.loading = false);
        }
    }
}

pub fn sign_out(cell: &impl StateCell<AuthState>, storage: &impl KeyValueStorage, keys: &StorageKeys) {
    if let Err(err) = auth::logout(cell, storage, keys) {
        leptos::logging::warn!("session not cleared from storage: {err}");
    }
}

pub async fn resend_verification(api: &impl EduApi, modal: &impl StateCell<ModalState>) {
    match api.resend_verification().await {
        Ok(response) => {
            let message = if response.message.is_empty() {
                "Check your inbox for a new verification link.".to_owned()
            } else {
                response.message
            };
            show_success(modal, "Verification email sent", message);
        }
        Err(err) => show_error(modal, "Couldn't send email", err.user_message(GENERIC_RETRY_MESSAGE)),
    }
}

/// Verify `token`, refreshing the cached user when signed in so the
/// verification banner disappears.
pub async fn verify_email(
    api: &impl EduApi,
    cell: &impl StateCell<AuthState>,
    storage: &impl KeyValueStorage,
    keys: &StorageKeys,
    token: &str,
) -> VerifyOutcome {
    let token = token.trim();
    if token.is_empty() {
        return VerifyOutcome::Failed("This verification link is missing its token.".to_owned());
    }
    match api.verify_email(token).await {
        Ok(response) => {
            if cell.inspect(|state| state.token.is_some()).unwrap_or(false) {
                fetch_current_user(api, cell, storage, keys).await;
            }
            let message =
                if response.message.is_empty() { "Your email has been verified.".to_owned() } else { response.message };
            VerifyOutcome::Verified(message)
        }
        Err(err) => VerifyOutcome::Failed(err.user_message("This verification link is invalid or has expired.")),
    }
}
