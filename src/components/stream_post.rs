//! A classroom stream announcement.

use leptos::prelude::*;

use crate::net::types::StreamPost;
use crate::util::due::format_due;
use crate::util::markdown::{render_markdown_html, safe_href};

#[component]
pub fn StreamPostCard(post: StreamPost) -> impl IntoView {
    let body = render_markdown_html(&post.content);
    let initial = post.author_name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    view! {
        <article class="stream-post">
            <header class="stream-post__header">
                <span class="stream-post__avatar" aria-hidden="true">{initial}</span>
                <span class="stream-post__author">{post.author_name.clone()}</span>
                <time class="stream-post__time">{format_due(post.created_at)}</time>
            </header>
            <div class="stream-post__body markdown" inner_html=body></div>
            {post.attachment.map(|link| {
                view! {
                    <a class="stream-post__attachment" href=safe_href(&link.url) target="_blank" rel="noopener noreferrer">
                        "🔗 "{link.name}
                    </a>
                }
            })}
        </article>
    }
}
