use super::*;

#[test]
fn parse_role_matches_labels_case_insensitively() {
    assert_eq!(parse_role("Teacher"), Role::Teacher);
    assert_eq!(parse_role("parent"), Role::Parent);
    assert_eq!(parse_role("STUDENT"), Role::Student);
}

#[test]
fn parse_role_never_offers_admin() {
    assert_eq!(parse_role("Admin"), Role::Student);
    assert_eq!(parse_role(""), Role::Student);
}
