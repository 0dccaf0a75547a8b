//! Write-through handle over a piece of shared client state.
//!
//! DESIGN
//! ======
//! Flows in `actions` mutate page and store state through `StateCell` rather
//! than `RwSignal` directly, so the same async code drives Leptos signals in
//! the browser and `Rc<RefCell<_>>` in native tests.
//!
//! A `None` result means the owner is gone (a signal disposed after the user
//! navigated away); the write is dropped instead of panicking.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

pub trait StateCell<T> {
    /// Mutate the state, returning the closure's result.
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing to changes.
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.try_borrow_mut().ok()?;
        Some(f(&mut guard))
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.try_borrow().ok()?;
        Some(f(&guard))
    }
}
