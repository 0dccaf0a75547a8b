//! Link card for a classroom material.

use leptos::prelude::*;

use crate::net::types::Material;
use crate::util::markdown::safe_href;

#[component]
pub fn MaterialCard(material: Material, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let id = material.id;

    view! {
        <div class="material-card">
            <a class="material-card__link" href=safe_href(&material.url) target="_blank" rel="noopener noreferrer">
                <span class="material-card__title">{material.title.clone()}</span>
                {material.description.clone().map(|d| view! { <span class="material-card__description">{d}</span> })}
            </a>
            {on_delete.map(|on_delete| {
                view! {
                    <button class="btn btn--icon material-card__delete" title="Delete material" on:click=move |_| on_delete.run(id)>
                        "🗑"
                    </button>
                }
            })}
        </div>
    }
}
