//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure derivations (due status, grade tiers, calendar grids, chart geometry,
//! calculator evaluation) live here so pages and components stay thin and
//! the math is testable without a browser.

pub mod auth;
pub mod calc;
pub mod calendar;
pub mod due;
pub mod grading;
pub mod markdown;
pub mod radar;
pub mod storage;
