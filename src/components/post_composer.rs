//! Collapsible "share with your class" composer at the top of the stream.

use leptos::prelude::*;

use crate::state::composer::{ComposerMode, ComposerState};

#[component]
pub fn PostComposer(composer: RwSignal<ComposerState>, on_post: Callback<()>) -> impl IntoView {
    let expanded = move || composer.with(|c| c.mode == ComposerMode::Expanded);

    view! {
        <div class="post-composer">
            <Show
                when=expanded
                fallback=move || {
                    view! {
                        <button class="post-composer__prompt" on:click=move |_| composer.update(ComposerState::expand)>
                            "Share something with your class..."
                        </button>
                    }
                }
            >
                <textarea
                    class="post-composer__content"
                    placeholder="Share something with your class... (Markdown supported)"
                    rows="4"
                    prop:value=move || composer.with(|c| c.content.clone())
                    on:input=move |ev| composer.update(|c| c.content = event_target_value(&ev))
                ></textarea>
                <div class="post-composer__link">
                    <input
                        class="post-composer__link-name"
                        type="text"
                        placeholder="Link title (optional)"
                        prop:value=move || composer.with(|c| c.link_name.clone())
                        on:input=move |ev| composer.update(|c| c.link_name = event_target_value(&ev))
                    />
                    <input
                        class="post-composer__link-url"
                        type="url"
                        placeholder="https://"
                        prop:value=move || composer.with(|c| c.link_url.clone())
                        on:input=move |ev| composer.update(|c| c.link_url = event_target_value(&ev))
                    />
                </div>
                <Show when=move || composer.with(ComposerState::has_unsafe_link)>
                    <p class="post-composer__hint">"Links must start with http://, https:// or mailto:"</p>
                </Show>
                <div class="post-composer__actions">
                    <button class="btn" on:click=move |_| composer.update(ComposerState::collapse)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !composer.with(ComposerState::can_post)
                        on:click=move |_| on_post.run(())
                    >
                        {move || if composer.with(|c| c.posting) { "Posting..." } else { "Post" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
