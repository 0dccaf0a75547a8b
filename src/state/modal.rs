//! Single app-wide acknowledgment / confirmation dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never render their own result dialogs. They call `show_*` on the one
//! `ModalState` provided by `App`, and `GlobalModal` renders it. Opening a
//! modal while another is visible replaces its content in place, so at most
//! one dialog is ever on screen.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;
use std::sync::Arc;

/// Zero-argument action run when the user affirms a confirmation.
pub type ConfirmAction = Arc<dyn Fn() + Send + Sync>;

/// Visual/behavioral flavor of the modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
    #[default]
    Info,
    Confirm,
}

/// Content of a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Render the confirm button as a destructive action.
    pub destructive: bool,
}

impl ConfirmRequest {
    /// A destructive confirmation ("Delete" / "Cancel").
    pub fn destructive(title: impl Into<String>, message: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            cancel_label: "Cancel".to_owned(),
            destructive: true,
        }
    }
}

#[derive(Clone, Default)]
pub struct ModalState {
    pub open: bool,
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub destructive: bool,
    on_confirm: Option<ConfirmAction>,
}

impl fmt::Debug for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalState")
            .field("open", &self.open)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("has_confirm_action", &self.on_confirm.is_some())
            .finish_non_exhaustive()
    }
}

impl ModalState {
    pub fn show_success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ModalKind::Success, title.into(), message.into());
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ModalKind::Error, title.into(), message.into());
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ModalKind::Info, title.into(), message.into());
    }

    pub fn show_confirm(&mut self, request: ConfirmRequest, on_confirm: ConfirmAction) {
        *self = Self {
            open: true,
            kind: ModalKind::Confirm,
            title: request.title,
            message: request.message,
            confirm_label: request.confirm_label,
            cancel_label: request.cancel_label,
            destructive: request.destructive,
            on_confirm: Some(on_confirm),
        };
    }

    fn show(&mut self, kind: ModalKind, title: String, message: String) {
        *self = Self {
            open: true,
            kind,
            title,
            message,
            confirm_label: "OK".to_owned(),
            cancel_label: String::new(),
            destructive: false,
            on_confirm: None,
        };
    }

    /// Close an acknowledgment. Confirmations stay open; they need
    /// `affirm` or `cancel`.
    pub fn acknowledge(&mut self) {
        if self.kind != ModalKind::Confirm {
            self.close();
        }
    }

    /// Close without running any pending confirm action.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Close a confirmation and hand back its action for the caller to run
    /// once the state borrow is released. Non-confirm modals just close.
    #[must_use]
    pub fn affirm(&mut self) -> Option<ConfirmAction> {
        let action = if self.kind == ModalKind::Confirm { self.on_confirm.take() } else { None };
        self.close();
        action
    }

    #[must_use]
    pub fn has_pending_confirm(&self) -> bool {
        self.open && self.on_confirm.is_some()
    }

    fn close(&mut self) {
        self.open = false;
        self.on_confirm = None;
    }
}
