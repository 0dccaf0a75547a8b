use super::*;
use crate::test_support::{assignment, classroom};

#[test]
fn empty_message_differs_by_role() {
    assert_ne!(empty_classrooms_message(true), empty_classrooms_message(false));
    assert!(empty_classrooms_message(true).contains("created"));
    assert!(empty_classrooms_message(false).contains("joined"));
}

#[test]
fn remove_classroom_drops_only_matching_id_and_its_assignments() {
    let mut page = DashboardPage { classrooms: vec![classroom(1), classroom(2)], ..DashboardPage::default() };
    page.assignments.insert(1, vec![assignment(10, 1)]);
    page.assignments.insert(2, vec![assignment(20, 2)]);

    assert!(page.remove_classroom(1));
    assert_eq!(page.classrooms.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    assert!(!page.assignments.contains_key(&1));
    assert!(!page.remove_classroom(99));
}

#[test]
fn all_assignments_follows_classroom_order() {
    let mut page = DashboardPage { classrooms: vec![classroom(2), classroom(1)], ..DashboardPage::default() };
    page.assignments.insert(1, vec![assignment(10, 1)]);
    page.assignments.insert(2, vec![assignment(20, 2), assignment(21, 2)]);
    let ids: Vec<i64> = page.all_assignments().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![20, 21, 10]);
    assert_eq!(page.classroom_name(1), Some("Class 1"));
}

#[test]
fn upsert_replaces_existing_or_prepends() {
    let mut page = DashboardPage { classrooms: vec![classroom(1)], ..DashboardPage::default() };
    let mut renamed = classroom(1);
    renamed.name = "Renamed".to_owned();
    page.upsert_classroom(renamed);
    page.upsert_classroom(classroom(2));
    assert_eq!(page.classrooms.len(), 2);
    assert_eq!(page.classrooms[0].id, 2);
    assert_eq!(page.classrooms[1].name, "Renamed");
}
