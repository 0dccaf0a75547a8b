//! User-triggered mutations: deletes, creates, grading, posting.
//!
//! DESIGN
//! ======
//! Deletes are two-step. `request_delete` only opens a confirmation; the
//! component's confirm callback spawns the matching `delete_*` flow, so no
//! destructive call is issued without an explicit affirm. Items are removed
//! from local state after the backend succeeds, never before.
//!
//! Create/grade flows validate locally first (error modal, no request),
//! then hold an in-flight flag for the duration of the request so a second
//! click is ignored.

#[cfg(test)]
#[path = "mutate_test.rs"]
mod mutate_test;

use time::UtcOffset;

use super::load::reload_submissions;
use super::{GENERIC_RETRY_MESSAGE, delete_failure_message, show_error, show_success};
use crate::net::api::EduApi;
use crate::net::types::{Assignment, Classroom};
use crate::state::assignment::AssignmentPage;
use crate::state::cell::StateCell;
use crate::state::classroom::ClassroomPage;
use crate::state::composer::ComposerState;
use crate::state::dashboard::DashboardPage;
use crate::state::drafts::{AssignmentDraft, ClassroomDraft, FormError, SubmissionDraft, validate_join_code};
use crate::state::modal::{ConfirmAction, ConfirmRequest, ModalState};
use crate::util::grading::{grade_feedback, parse_score};

const MISSING_INFO_TITLE: &str = "Missing information";

// =============================================================
// Deletes
// =============================================================

/// Ask for confirmation; `on_confirm` runs only if the user affirms.
pub fn request_delete(modal: &impl StateCell<ModalState>, request: ConfirmRequest, on_confirm: ConfirmAction) {
    modal.modify(|m| m.show_confirm(request, on_confirm));
}

#[must_use]
pub fn delete_assignment_prompt(title: &str) -> ConfirmRequest {
    ConfirmRequest::destructive(
        "Delete assignment?",
        format!("\"{title}\" and all of its submissions will be permanently deleted."),
        "Delete",
    )
}

#[must_use]
pub fn delete_material_prompt(title: &str) -> ConfirmRequest {
    ConfirmRequest::destructive("Delete material?", format!("\"{title}\" will be removed from this classroom."), "Delete")
}

#[must_use]
pub fn delete_classroom_prompt(name: &str) -> ConfirmRequest {
    ConfirmRequest::destructive(
        "Delete classroom?",
        format!("\"{name}\" and all of its assignments, materials, and posts will be permanently deleted."),
        "Delete classroom",
    )
}

pub async fn delete_assignment(
    api: &impl EduApi,
    page: &impl StateCell<ClassroomPage>,
    modal: &impl StateCell<ModalState>,
    assignment_id: i64,
) {
    match api.delete_assignment(assignment_id).await {
        Ok(()) => {
            page.modify(|p| p.remove_assignment(assignment_id));
            show_success(modal, "Assignment deleted", "The assignment has been removed.");
        }
        Err(err) => {
            leptos::logging::warn!("delete assignment {assignment_id} failed: {err}");
            show_error(modal, "Couldn't delete assignment", delete_failure_message(&err));
        }
    }
}

pub async fn delete_material(
    api: &impl EduApi,
    page: &impl StateCell<ClassroomPage>,
    modal: &impl StateCell<ModalState>,
    material_id: i64,
) {
    match api.delete_material(material_id).await {
        Ok(()) => {
            page.modify(|p| p.remove_material(material_id));
            show_success(modal, "Material deleted", "The material has been removed.");
        }
        Err(err) => {
            leptos::logging::warn!("delete material {material_id} failed: {err}");
            show_error(modal, "Couldn't delete material", delete_failure_message(&err));
        }
    }
}

/// Returns `true` on success; the caller drops the classroom from its list
/// or navigates away from the deleted classroom.
pub async fn delete_classroom(api: &impl EduApi, modal: &impl StateCell<ModalState>, classroom_id: i64) -> bool {
    match api.delete_classroom(classroom_id).await {
        Ok(()) => {
            show_success(modal, "Classroom deleted", "The classroom has been removed.");
            true
        }
        Err(err) => {
            leptos::logging::warn!("delete classroom {classroom_id} failed: {err}");
            show_error(modal, "Couldn't delete classroom", delete_failure_message(&err));
            false
        }
    }
}

// =============================================================
// Creates
// =============================================================

/// Returns the created assignment so the caller can navigate to it.
pub async fn create_assignment(
    api: &impl EduApi,
    draft: &impl StateCell<AssignmentDraft>,
    modal: &impl StateCell<ModalState>,
    classroom_id: i64,
    offset: UtcOffset,
) -> Option<Assignment> {
    let request = draft.modify(|d| {
        if d.submitting {
            return None;
        }
        let request = d.validate(offset);
        if request.is_ok() {
            d.submitting = true;
        }
        Some(request)
    })??;
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, MISSING_INFO_TITLE, err.to_string());
            return None;
        }
    };

    let result = api.create_assignment(classroom_id, &request).await;
    draft.modify(|d| d.submitting = false);
    match result {
        Ok(assignment) => {
            show_success(modal, "Assignment created", format!("\"{}\" has been posted to the class.", assignment.title));
            Some(assignment)
        }
        Err(err) => {
            show_error(modal, "Couldn't create assignment", err.user_message("Failed to create assignment. Please try again."));
            None
        }
    }
}

pub async fn create_classroom(
    api: &impl EduApi,
    draft: &impl StateCell<ClassroomDraft>,
    dashboard: &impl StateCell<DashboardPage>,
    modal: &impl StateCell<ModalState>,
) -> Option<Classroom> {
    let request = draft.modify(|d| {
        if d.submitting {
            return None;
        }
        let request = d.validate();
        if request.is_ok() {
            d.submitting = true;
        }
        Some(request)
    })??;
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, MISSING_INFO_TITLE, err.to_string());
            return None;
        }
    };

    let result = api.create_classroom(&request).await;
    draft.modify(|d| d.submitting = false);
    match result {
        Ok(classroom) => {
            dashboard.modify(|p| p.upsert_classroom(classroom.clone()));
            draft.modify(|d| *d = ClassroomDraft::default());
            let code = classroom.join_code.as_deref().map(|code| format!(" Share join code {code} with your students.")).unwrap_or_default();
            show_success(modal, "Classroom created", format!("\"{}\" is ready.{code}", classroom.name));
            Some(classroom)
        }
        Err(err) => {
            show_error(modal, "Couldn't create classroom", err.user_message("Failed to create classroom. Please try again."));
            None
        }
    }
}

pub async fn update_classroom(
    api: &impl EduApi,
    draft: &impl StateCell<ClassroomDraft>,
    page: &impl StateCell<ClassroomPage>,
    modal: &impl StateCell<ModalState>,
    classroom_id: i64,
) -> Option<Classroom> {
    let request = draft.modify(|d| {
        if d.submitting {
            return None;
        }
        let request = d.validate_update();
        if request.is_ok() {
            d.submitting = true;
        }
        Some(request)
    })??;
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, MISSING_INFO_TITLE, err.to_string());
            return None;
        }
    };

    let result = api.update_classroom(classroom_id, &request).await;
    draft.modify(|d| d.submitting = false);
    match result {
        Ok(classroom) => {
            page.modify(|p| p.classroom = Some(classroom.clone()));
            show_success(modal, "Classroom updated", "Your changes have been saved.");
            Some(classroom)
        }
        Err(err) => {
            let message = if err.is_forbidden() {
                super::PERMISSION_DENIED_MESSAGE.to_owned()
            } else {
                err.user_message("Failed to update classroom. Please try again.")
            };
            show_error(modal, "Couldn't update classroom", message);
            None
        }
    }
}

pub async fn join_classroom(
    api: &impl EduApi,
    dashboard: &impl StateCell<DashboardPage>,
    modal: &impl StateCell<ModalState>,
) -> Option<Classroom> {
    let code = dashboard.modify(|p| {
        if p.joining {
            return None;
        }
        let code = validate_join_code(&p.join_code);
        if code.is_ok() {
            p.joining = true;
        }
        Some(code)
    })??;
    let code = match code {
        Ok(code) => code,
        Err(err) => {
            show_error(modal, MISSING_INFO_TITLE, err.to_string());
            return None;
        }
    };

    let result = api.join_classroom(&code).await;
    dashboard.modify(|p| p.joining = false);
    match result {
        Ok(classroom) => {
            dashboard.modify(|p| {
                p.join_code.clear();
                p.upsert_classroom(classroom.clone());
            });
            show_success(modal, "Joined classroom", format!("You're now a member of \"{}\".", classroom.name));
            Some(classroom)
        }
        Err(err) => {
            show_error(modal, "Couldn't join classroom", err.user_message("Invalid or expired join code."));
            None
        }
    }
}

// =============================================================
// Grading / submitting
// =============================================================

pub async fn grade_submission(
    api: &impl EduApi,
    page: &impl StateCell<AssignmentPage>,
    modal: &impl StateCell<ModalState>,
    submission_id: i64,
) {
    let prepared = page
        .modify(|p| {
            if p.grading.is_some() {
                return None;
            }
            let max_points = p.max_points();
            let parsed = parse_score(&p.grade_input(submission_id), max_points);
            if parsed.is_ok() {
                p.grading = Some(submission_id);
            }
            Some((parsed, max_points))
        })
        .flatten();
    let Some((parsed, max_points)) = prepared else {
        return;
    };
    let score = match parsed {
        Ok(score) => score,
        Err(err) => {
            show_error(modal, "Invalid score", err.to_string());
            return;
        }
    };

    let result = api.grade_submission(submission_id, score).await;
    page.modify(|p| p.grading = None);
    match result {
        Ok(graded) => {
            reload_submissions(api, page, graded.assignment_id).await;
            let feedback = grade_feedback(score, max_points);
            show_success(modal, &format!("Graded {}", graded.student_name), feedback.summary(score, max_points));
        }
        Err(err) => {
            show_error(modal, "Couldn't save grade", err.user_message("Failed to save grade. Please try again."));
        }
    }
}

pub async fn submit_assignment(
    api: &impl EduApi,
    page: &impl StateCell<AssignmentPage>,
    modal: &impl StateCell<ModalState>,
    assignment_id: i64,
) {
    let prepared = page
        .modify(|p| {
            if p.submitting {
                return None;
            }
            let request = p.submission_draft.validate();
            if request.is_ok() {
                p.submitting = true;
            }
            Some(request)
        })
        .flatten();
    let Some(request) = prepared else {
        return;
    };
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            show_error(modal, MISSING_INFO_TITLE, err.to_string());
            return;
        }
    };

    let result = api.submit_assignment(assignment_id, &request).await;
    page.modify(|p| p.submitting = false);
    match result {
        Ok(_) => {
            page.modify(|p| {
                p.submission_draft = SubmissionDraft::default();
                if let Some(assignment) = p.assignment.as_mut() {
                    assignment.is_submitted = true;
                }
            });
            show_success(modal, "Submitted", "Your work has been turned in.");
        }
        Err(err) => {
            show_error(modal, "Couldn't submit", err.user_message("Failed to submit. Please try again."));
        }
    }
}

// =============================================================
// Stream
// =============================================================

pub async fn create_post(
    api: &impl EduApi,
    page: &impl StateCell<ClassroomPage>,
    composer: &impl StateCell<ComposerState>,
    modal: &impl StateCell<ModalState>,
    classroom_id: i64,
) {
    let prepared = composer.modify(|c| if c.posting { None } else { Some(c.take_post()) }).flatten();
    let Some(request) = prepared else {
        return;
    };
    let Some(request) = request else {
        if composer.inspect(ComposerState::has_unsafe_link).unwrap_or(false) {
            show_error(modal, "Unsupported link", FormError::UnsafeLink.to_string());
        } else {
            show_error(modal, "Empty post", "Write something before posting.");
        }
        return;
    };

    match api.create_post(classroom_id, &request).await {
        Ok(post) => {
            page.modify(|p| p.prepend_post(post));
            composer.modify(ComposerState::finish_posted);
        }
        Err(err) => {
            composer.modify(ComposerState::finish_failed);
            show_error(modal, "Couldn't post", err.user_message(GENERIC_RETRY_MESSAGE));
        }
    }
}
