//! Assignment summary row used by the dashboard and classroom pages.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::net::types::Assignment;
use crate::util::due::{Priority, due_label};
use crate::util::grading::format_points;

#[component]
pub fn AssignmentCard(
    assignment: Assignment,
    now: OffsetDateTime,
    /// Shown on the dashboard, where assignments from every class are mixed.
    #[prop(optional, into)]
    classroom_name: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = assignment.id;
    let href = format!("/assignments/{id}");
    let priority = Priority::of(&assignment, now);
    let label = due_label(assignment.due_date, assignment.is_submitted, now);
    let score = assignment
        .score
        .filter(|_| assignment.is_graded)
        .map(|score| format!("{} / {}", format_points(score), format_points(assignment.max_points)));

    view! {
        <div class=format!("assignment-card {}", priority.css_class())>
            <a class="assignment-card__link" href=href>
                <span class="assignment-card__kind">{assignment.kind.as_str()}</span>
                <span class="assignment-card__title">{assignment.title.clone()}</span>
                {classroom_name.map(|name| view! { <span class="assignment-card__classroom">{name}</span> })}
                <span class="assignment-card__due">{label}</span>
                {score.map(|score| view! { <span class="assignment-card__score">{score}</span> })}
            </a>
            {on_delete.map(|on_delete| {
                view! {
                    <button
                        class="btn btn--icon assignment-card__delete"
                        title="Delete assignment"
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                }
            })}
        </div>
    }
}
