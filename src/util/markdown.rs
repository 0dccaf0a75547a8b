//! Markdown rendering for stream posts and descriptions.
//!
//! Raw HTML in user content is dropped before rendering; the output is only
//! ever produced from Markdown constructs. Link and image destinations must
//! be relative or use one of `SAFE_SCHEMES`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Stand-in destination for a rejected link.
pub const BLOCKED_HREF: &str = "#";

/// `true` for relative URLs and for `http`, `https` and `mailto`.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are stripped before the scheme is read.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_control()).collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => {
            let scheme = &cleaned[..end];
            SAFE_SCHEMES.iter().any(|safe| safe.eq_ignore_ascii_case(scheme))
        }
        _ => true,
    }
}

/// `url` when it is safe to bind to `href`, otherwise `BLOCKED_HREF`.
#[must_use]
pub fn safe_href(url: &str) -> String {
    if is_safe_url(url) { url.trim().to_owned() } else { BLOCKED_HREF.to_owned() }
}

#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed(BLOCKED_HREF), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// First `max_chars` characters of the plain text, for card previews.
#[must_use]
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let text: String = Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(text.into_string()),
            Event::SoftBreak | Event::HardBreak | Event::End(_) => Some(" ".to_owned()),
            _ => None,
        })
        .collect();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
