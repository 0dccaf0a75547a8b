//! Client-side state: app-wide stores, per-page state, and widget state
//! machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `modal` are the only cross-page stores; `App` provides each as
//! an `RwSignal` context. Page state (`dashboard`, `classroom`, `assignment`)
//! is owned by its route component and mutated only by the flows in
//! `actions`. Widget state (`flashcards`, `composer`, `calculator`,
//! `network`) never leaves its component.

pub mod assignment;
pub mod auth;
pub mod calculator;
pub mod cell;
pub mod classroom;
pub mod composer;
pub mod dashboard;
pub mod drafts;
pub mod flashcards;
pub mod load;
pub mod modal;
pub mod network;
