use super::*;
use crate::test_support::{assignment, submission};

#[test]
fn grade_input_prefers_draft_then_saved_score() {
    let mut graded = submission(1, 5);
    graded.is_graded = true;
    graded.score = Some(18.0);
    let mut page = AssignmentPage { submissions: vec![graded, submission(2, 5)], ..AssignmentPage::default() };

    assert_eq!(page.grade_input(1), "18");
    assert_eq!(page.grade_input(2), "");
    page.set_grade_draft(2, "15".to_owned());
    assert_eq!(page.grade_input(2), "15");
}

#[test]
fn replace_submissions_drops_drafts_for_graded_rows() {
    let mut page = AssignmentPage { submissions: vec![submission(1, 5), submission(2, 5)], ..AssignmentPage::default() };
    page.set_grade_draft(1, "9".to_owned());
    page.set_grade_draft(2, "7".to_owned());

    let mut now_graded = submission(1, 5);
    now_graded.is_graded = true;
    now_graded.score = Some(9.0);
    page.replace_submissions(vec![now_graded, submission(2, 5)]);

    assert!(!page.grade_drafts.contains_key(&1));
    assert_eq!(page.grade_drafts.get(&2).map(String::as_str), Some("7"));
    assert_eq!(page.graded_count(), 1);
}

#[test]
fn max_points_defaults_to_zero_without_assignment() {
    assert_eq!(AssignmentPage::default().max_points(), 0.0);
    let page = AssignmentPage { assignment: Some(assignment(5, 1)), ..AssignmentPage::default() };
    assert_eq!(page.max_points(), 100.0);
}
