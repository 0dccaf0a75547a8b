//! Route-level page components.

pub mod assignment;
pub mod assignment_new;
pub mod calculator;
pub mod classroom;
pub mod dashboard;
pub mod flashcards;
pub mod login;
pub mod register;
pub mod verify_email;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Numeric `:id` route parameter, or `None` when absent or malformed.
fn route_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()))
}
