//! Stream post composer.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::types::{Attachment, PostCreate};
use crate::util::markdown::is_safe_url;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposerMode {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub mode: ComposerMode,
    pub content: String,
    pub link_name: String,
    pub link_url: String,
    pub posting: bool,
}

impl ComposerState {
    pub fn expand(&mut self) {
        self.mode = ComposerMode::Expanded;
    }

    /// Collapse without discarding the draft.
    pub fn collapse(&mut self) {
        self.mode = ComposerMode::Collapsed;
    }

    #[must_use]
    pub fn can_post(&self) -> bool {
        !self.posting && !self.content.trim().is_empty() && !self.has_unsafe_link()
    }

    /// A link was entered but its scheme is not web or mail.
    #[must_use]
    pub fn has_unsafe_link(&self) -> bool {
        let url = self.link_url.trim();
        !url.is_empty() && !is_safe_url(url)
    }

    /// Build the request and mark the composer busy. `None` for blank
    /// content, an unsafe link, or while a post is already in flight.
    pub fn take_post(&mut self) -> Option<PostCreate> {
        if !self.can_post() {
            return None;
        }
        self.posting = true;
        Some(PostCreate { content: self.content.trim().to_owned(), attachment: self.attachment() })
    }

    fn attachment(&self) -> Option<Attachment> {
        let url = self.link_url.trim();
        if url.is_empty() {
            return None;
        }
        let name = self.link_name.trim();
        Some(Attachment { name: if name.is_empty() { url.to_owned() } else { name.to_owned() }, url: url.to_owned() })
    }

    /// Clear the draft after a successful post.
    pub fn finish_posted(&mut self) {
        *self = Self::default();
    }

    /// Keep the draft for a retry after a failed post.
    pub fn finish_failed(&mut self) {
        self.posting = false;
    }
}
