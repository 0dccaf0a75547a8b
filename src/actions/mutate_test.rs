use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::actions::PERMISSION_DENIED_MESSAGE;
use crate::net::error::ApiError;
use crate::net::types::{AssignmentKind, StreamPost, Submission};
use crate::state::modal::ModalKind;
use crate::test_support::{FakeApi, assignment, classroom, forbidden, material, post, server_error, submission};

fn cell<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

fn classroom_page() -> Rc<RefCell<ClassroomPage>> {
    cell(ClassroomPage {
        classroom: Some(classroom(1)),
        assignments: vec![assignment(10, 1), assignment(11, 1), assignment(12, 1)],
        materials: vec![material(30, 1), material(31, 1)],
        ..ClassroomPage::default()
    })
}

fn unprocessable(detail: &str) -> ApiError {
    ApiError::Status { status: 422, detail: Some(detail.to_owned()) }
}

fn filled_draft() -> AssignmentDraft {
    AssignmentDraft {
        title: "Essay".to_owned(),
        due_date: "2025-04-01".to_owned(),
        kind: AssignmentKind::Project,
        ..AssignmentDraft::default()
    }
}

// =============================================================
// Delete confirmation gating
// =============================================================

#[test]
fn delete_is_not_called_until_confirmed() {
    let api = FakeApi::default();
    api.respond("delete_assignment", &());
    let page = classroom_page();
    let modal = cell(ModalState::default());

    let queued: Arc<Mutex<Vec<i64>>> = Arc::default();
    let queue = queued.clone();
    request_delete(
        &modal,
        delete_assignment_prompt("Assignment 11"),
        Arc::new(move || {
            if let Ok(mut ids) = queue.lock() {
                ids.push(11);
            }
        }),
    );

    assert_eq!(modal.borrow().kind, ModalKind::Confirm);
    assert!(modal.borrow().destructive);
    assert_eq!(api.call_count("delete_assignment"), 0);

    // Cancelling never runs the callback.
    modal.borrow_mut().cancel();
    assert!(queued.lock().map(|ids| ids.is_empty()).unwrap_or(false));
    assert_eq!(api.call_count("delete_assignment"), 0);

    // Re-open and affirm: the callback runs and the component spawns the delete.
    let queue = queued.clone();
    request_delete(
        &modal,
        delete_assignment_prompt("Assignment 11"),
        Arc::new(move || {
            if let Ok(mut ids) = queue.lock() {
                ids.push(11);
            }
        }),
    );
    let action = modal.borrow_mut().affirm();
    if let Some(action) = action {
        action();
    }
    let ids = queued.lock().map(|ids| ids.clone()).unwrap_or_default();
    assert_eq!(ids, vec![11]);
    for id in ids {
        block_on(delete_assignment(&api, &page, &modal, id));
    }
    assert_eq!(api.calls(), vec!["delete_assignment:11".to_owned()]);
}

#[test]
fn confirm_replaces_open_success_modal() {
    let modal = cell(ModalState::default());
    modal.borrow_mut().show_success("Saved", "done");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    request_delete(
        &modal,
        delete_material_prompt("Notes"),
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let modal = modal.borrow();
    assert!(modal.open);
    assert_eq!(modal.kind, ModalKind::Confirm);
    assert_eq!(modal.title, "Delete material?");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// =============================================================
// Delete outcomes
// =============================================================

#[test]
fn successful_delete_removes_exactly_that_id() {
    let api = FakeApi::default();
    api.respond("delete_assignment:11", &());
    let page = classroom_page();
    let modal = cell(ModalState::default());

    block_on(delete_assignment(&api, &page, &modal, 11));

    let ids: Vec<i64> = page.borrow().assignments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![10, 12]);
    assert_eq!(page.borrow().materials.len(), 2);
    assert_eq!(modal.borrow().kind, ModalKind::Success);
}

#[test]
fn forbidden_delete_shows_permission_message_and_keeps_item() {
    let api = FakeApi::default();
    api.fail("delete_material:30", forbidden());
    let page = classroom_page();
    let modal = cell(ModalState::default());

    block_on(delete_material(&api, &page, &modal, 30));

    assert_eq!(page.borrow().materials.len(), 2);
    assert_eq!(modal.borrow().kind, ModalKind::Error);
    assert_eq!(modal.borrow().message, PERMISSION_DENIED_MESSAGE);
}

#[test]
fn other_delete_failures_suggest_retry() {
    let api = FakeApi::default();
    api.fail("delete_classroom:1", server_error());
    let modal = cell(ModalState::default());

    assert!(!block_on(delete_classroom(&api, &modal, 1)));
    assert_eq!(modal.borrow().message, GENERIC_RETRY_MESSAGE);

    api.respond("delete_classroom:1", &());
    assert!(block_on(delete_classroom(&api, &modal, 1)));
    assert_eq!(modal.borrow().kind, ModalKind::Success);
}

// =============================================================
// Create validation
// =============================================================

#[test]
fn create_with_empty_title_issues_no_call() {
    let api = FakeApi::default();
    let draft = cell(AssignmentDraft { title: String::new(), ..filled_draft() });
    let modal = cell(ModalState::default());

    let created = block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC));

    assert!(created.is_none());
    assert!(api.calls().is_empty());
    assert!(modal.borrow().open);
    assert_eq!(modal.borrow().kind, ModalKind::Error);
    assert_eq!(modal.borrow().message, "Title is required");
    assert!(!draft.borrow().submitting);
}

#[test]
fn create_with_empty_due_date_issues_no_call() {
    let api = FakeApi::default();
    let draft = cell(AssignmentDraft { due_date: String::new(), ..filled_draft() });
    let modal = cell(ModalState::default());

    assert!(block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC)).is_none());
    assert!(api.calls().is_empty());
    assert_eq!(modal.borrow().kind, ModalKind::Error);
}

#[test]
fn create_success_sends_payload_and_clears_in_flight() {
    let api = FakeApi::default();
    api.respond("create_assignment:1", &assignment(99, 1));
    let draft = cell(filled_draft());
    let modal = cell(ModalState::default());

    let created = block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC));

    assert_eq!(created.map(|a| a.id), Some(99));
    assert!(!draft.borrow().submitting);
    assert_eq!(modal.borrow().kind, ModalKind::Success);
    let body = &api.bodies()[0];
    assert_eq!(body["assignment_type"], "project");
    assert_eq!(body["title"], "Essay");
}

#[test]
fn create_in_flight_ignores_second_submit() {
    let api = FakeApi::default();
    let draft = cell(AssignmentDraft { submitting: true, ..filled_draft() });
    let modal = cell(ModalState::default());

    assert!(block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC)).is_none());
    assert!(api.calls().is_empty());
    assert!(!modal.borrow().open);
}

#[test]
fn create_failure_surfaces_backend_detail() {
    let api = FakeApi::default();
    api.fail("create_assignment", unprocessable("Due date must be in the future"));
    let draft = cell(filled_draft());
    let modal = cell(ModalState::default());

    block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC));
    assert_eq!(modal.borrow().message, "Due date must be in the future");

    api.fail("create_assignment", server_error());
    block_on(create_assignment(&api, &draft, &modal, 1, UtcOffset::UTC));
    assert_eq!(modal.borrow().message, "Failed to create assignment. Please try again.");
}

#[test]
fn create_classroom_validates_and_prepends() {
    let api = FakeApi::default();
    let draft = cell(ClassroomDraft::default());
    let dashboard = cell(DashboardPage { classrooms: vec![classroom(1)], ..DashboardPage::default() });
    let modal = cell(ModalState::default());

    assert!(block_on(create_classroom(&api, &draft, &dashboard, &modal)).is_none());
    assert!(api.calls().is_empty());

    let mut created = classroom(2);
    created.join_code = Some("XYZ123".to_owned());
    api.respond("create_classroom", &created);
    draft.borrow_mut().name = "Physics".to_owned();
    draft.borrow_mut().subject = "Science".to_owned();
    block_on(create_classroom(&api, &draft, &dashboard, &modal));

    assert_eq!(dashboard.borrow().classrooms[0].id, 2);
    assert!(modal.borrow().message.contains("XYZ123"));
    assert_eq!(*draft.borrow(), ClassroomDraft::default());
}

#[test]
fn update_classroom_replaces_page_classroom() {
    let api = FakeApi::default();
    let mut renamed = classroom(1);
    renamed.name = "Renamed".to_owned();
    api.respond("update_classroom:1", &renamed);
    let draft = cell(ClassroomDraft::from_classroom(&renamed));
    let page = classroom_page();
    let modal = cell(ModalState::default());

    block_on(update_classroom(&api, &draft, &page, &modal, 1));
    assert_eq!(page.borrow().classroom.as_ref().map(|c| c.name.as_str()), Some("Renamed"));

    api.fail("update_classroom:1", forbidden());
    block_on(update_classroom(&api, &draft, &page, &modal, 1));
    assert_eq!(modal.borrow().message, PERMISSION_DENIED_MESSAGE);
}

#[test]
fn join_classroom_normalizes_code() {
    let api = FakeApi::default();
    api.respond("join_classroom", &classroom(7));
    let dashboard = cell(DashboardPage { join_code: " abc123 ".to_owned(), ..DashboardPage::default() });
    let modal = cell(ModalState::default());

    let joined = block_on(join_classroom(&api, &dashboard, &modal));

    assert_eq!(joined.map(|c| c.id), Some(7));
    assert_eq!(api.bodies()[0], serde_json::json!("ABC123"));
    assert!(dashboard.borrow().join_code.is_empty());
    assert!(!dashboard.borrow().joining);
}

// =============================================================
// Grading
// =============================================================

fn grading_page() -> Rc<RefCell<AssignmentPage>> {
    cell(AssignmentPage {
        assignment: Some(assignment(5, 1)),
        submissions: vec![submission(1, 5), submission(2, 5)],
        ..AssignmentPage::default()
    })
}

fn graded(id: i64, score: f64) -> Submission {
    let mut graded = submission(id, 5);
    graded.is_graded = true;
    graded.score = Some(score);
    graded
}

#[test]
fn grade_85_shows_great_tier_and_refetches() {
    let api = FakeApi::default();
    api.respond("grade_submission:1", &graded(1, 85.0))
        .respond("list_submissions:5", &vec![graded(1, 85.0), submission(2, 5)]);
    let page = grading_page();
    page.borrow_mut().set_grade_draft(1, "85".to_owned());
    let modal = cell(ModalState::default());

    block_on(grade_submission(&api, &page, &modal, 1));

    assert_eq!(api.calls(), vec!["grade_submission:1".to_owned(), "list_submissions:5".to_owned()]);
    assert_eq!(page.borrow().graded_count(), 1);
    assert_eq!(page.borrow().grading, None);
    assert_eq!(modal.borrow().kind, ModalKind::Success);
    assert!(modal.borrow().message.starts_with("🎉"));
}

#[test]
fn grade_50_uses_a_different_tier_than_85() {
    let api = FakeApi::default();
    api.respond("grade_submission:2", &graded(2, 50.0)).respond("list_submissions:5", &vec![graded(2, 50.0)]);
    let page = grading_page();
    page.borrow_mut().set_grade_draft(2, "50".to_owned());
    let modal = cell(ModalState::default());

    block_on(grade_submission(&api, &page, &modal, 2));

    assert!(modal.borrow().message.starts_with("💪"));
}

#[test]
fn invalid_score_issues_no_call() {
    let api = FakeApi::default();
    let page = grading_page();
    page.borrow_mut().set_grade_draft(1, "150".to_owned());
    let modal = cell(ModalState::default());

    block_on(grade_submission(&api, &page, &modal, 1));

    assert!(api.calls().is_empty());
    assert_eq!(modal.borrow().kind, ModalKind::Error);
    assert_eq!(modal.borrow().title, "Invalid score");
}

#[test]
fn grading_in_flight_blocks_other_rows() {
    let api = FakeApi::default();
    let page = grading_page();
    page.borrow_mut().grading = Some(2);
    page.borrow_mut().set_grade_draft(1, "80".to_owned());
    let modal = cell(ModalState::default());

    block_on(grade_submission(&api, &page, &modal, 1));
    assert!(api.calls().is_empty());
}

// =============================================================
// Submitting / posting
// =============================================================

#[test]
fn submit_marks_assignment_submitted() {
    let api = FakeApi::default();
    api.respond("submit_assignment:5", &submission(3, 5));
    let page = grading_page();
    page.borrow_mut().submission_draft.content = "My answer".to_owned();
    let modal = cell(ModalState::default());

    block_on(submit_assignment(&api, &page, &modal, 5));

    let page = page.borrow();
    assert!(page.assignment.as_ref().is_some_and(|a| a.is_submitted));
    assert!(page.submission_draft.content.is_empty());
    assert!(!page.submitting);
}

#[test]
fn empty_submission_issues_no_call() {
    let api = FakeApi::default();
    let page = grading_page();
    let modal = cell(ModalState::default());

    block_on(submit_assignment(&api, &page, &modal, 5));
    assert!(api.calls().is_empty());
    assert_eq!(modal.borrow().kind, ModalKind::Error);
}

#[test]
fn post_success_prepends_and_resets_composer() {
    let api = FakeApi::default();
    let created: StreamPost = post(77, 1);
    api.respond("create_post:1", &created);
    let page = classroom_page();
    page.borrow_mut().posts = vec![post(1, 1)];
    let composer = cell(ComposerState { content: "Hello class".to_owned(), ..ComposerState::default() });
    let modal = cell(ModalState::default());

    block_on(create_post(&api, &page, &composer, &modal, 1));

    assert_eq!(page.borrow().posts[0].id, 77);
    assert_eq!(*composer.borrow(), ComposerState::default());
}

#[test]
fn post_failure_keeps_draft_for_retry() {
    let api = FakeApi::default();
    api.fail("create_post:1", server_error());
    let page = classroom_page();
    let composer = cell(ComposerState { content: "Hello class".to_owned(), ..ComposerState::default() });
    let modal = cell(ModalState::default());

    block_on(create_post(&api, &page, &composer, &modal, 1));

    assert_eq!(composer.borrow().content, "Hello class");
    assert!(!composer.borrow().posting);
    assert_eq!(modal.borrow().kind, ModalKind::Error);
}

#[test]
fn blank_post_opens_error_without_call() {
    let api = FakeApi::default();
    let page = classroom_page();
    let composer = cell(ComposerState::default());
    let modal = cell(ModalState::default());

    block_on(create_post(&api, &page, &composer, &modal, 1));
    assert!(api.calls().is_empty());
    assert_eq!(modal.borrow().title, "Empty post");
}

#[test]
fn script_link_post_opens_error_without_call() {
    let api = FakeApi::default();
    let page = classroom_page();
    let composer = cell(ComposerState {
        content: "Bonus points".to_owned(),
        link_url: "javascript:alert(1)".to_owned(),
        ..ComposerState::default()
    });
    let modal = cell(ModalState::default());

    block_on(create_post(&api, &page, &composer, &modal, 1));
    assert!(api.calls().is_empty());
    assert_eq!(modal.borrow().title, "Unsupported link");
    assert_eq!(composer.borrow().content, "Bonus points");
}
