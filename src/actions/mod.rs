//! Async load and mutation flows shared by the route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these from `spawn_local` with the `HttpApi` and their
//! page `RwSignal`s; tests drive the same functions with `FakeApi` and
//! `Rc<RefCell<_>>` state.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Load failures settle to empty slices with a
//! warning. Mutation failures open the global error modal with the backend
//! `detail` when present, so every API error stops at this boundary.

pub mod auth;
pub mod load;
pub mod mutate;

use crate::net::error::ApiError;
use crate::state::cell::StateCell;
use crate::state::modal::ModalState;

pub const GENERIC_RETRY_MESSAGE: &str = "Something went wrong. Please try again.";
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission denied. You don't have access to do that.";

fn show_success(modal: &impl StateCell<ModalState>, title: &str, message: impl Into<String>) {
    let message = message.into();
    modal.modify(|m| m.show_success(title, message));
}

fn show_error(modal: &impl StateCell<ModalState>, title: &str, message: impl Into<String>) {
    let message = message.into();
    modal.modify(|m| m.show_error(title, message));
}

/// Copy for a failed destructive action: permission vs. everything else.
#[must_use]
pub fn delete_failure_message(err: &ApiError) -> &'static str {
    if err.is_forbidden() { PERMISSION_DENIED_MESSAGE } else { GENERIC_RETRY_MESSAGE }
}
