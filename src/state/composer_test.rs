use super::*;

#[test]
fn blank_content_yields_no_post() {
    let mut composer = ComposerState { content: "   ".to_owned(), ..ComposerState::default() };
    assert!(composer.take_post().is_none());
    assert!(!composer.posting);
}

#[test]
fn take_post_trims_and_blocks_duplicates() {
    let mut composer = ComposerState { content: " Exam moved to Friday ".to_owned(), ..ComposerState::default() };
    let post = composer.take_post();
    assert_eq!(post.map(|p| p.content).as_deref(), Some("Exam moved to Friday"));
    assert!(composer.posting);
    assert!(composer.take_post().is_none());
}

#[test]
fn link_attachment_defaults_name_to_url() {
    let mut composer = ComposerState {
        content: "See notes".to_owned(),
        link_url: "https://example.com/notes.pdf".to_owned(),
        ..ComposerState::default()
    };
    let attachment = composer.take_post().and_then(|p| p.attachment);
    assert_eq!(
        attachment,
        Some(Attachment { name: "https://example.com/notes.pdf".to_owned(), url: "https://example.com/notes.pdf".to_owned() })
    );
}

#[test]
fn collapse_keeps_draft_and_failure_allows_retry() {
    let mut composer = ComposerState::default();
    composer.expand();
    composer.content = "draft".to_owned();
    composer.collapse();
    assert_eq!(composer.mode, ComposerMode::Collapsed);
    assert_eq!(composer.content, "draft");

    assert!(composer.take_post().is_some());
    composer.finish_failed();
    assert!(composer.can_post());
    composer.finish_posted();
    assert_eq!(composer, ComposerState::default());
}

#[test]
fn script_link_blocks_posting() {
    let mut composer = ComposerState {
        content: "Click me".to_owned(),
        link_url: "javascript:alert(1)".to_owned(),
        ..ComposerState::default()
    };
    assert!(composer.has_unsafe_link());
    assert!(!composer.can_post());
    assert!(composer.take_post().is_none());
    assert!(!composer.posting);

    composer.link_url = "mailto:class@school.edu".to_owned();
    assert!(composer.take_post().and_then(|p| p.attachment).is_some());
}
