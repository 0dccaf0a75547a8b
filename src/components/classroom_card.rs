//! Card for a classroom in the dashboard grid.

use leptos::prelude::*;

use crate::net::types::Classroom;

/// A classroom tile linking to its page. Teachers get a delete button,
/// which only requests confirmation through `on_delete`.
#[component]
pub fn ClassroomCard(classroom: Classroom, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let href = format!("/classrooms/{}", classroom.id);
    let id = classroom.id;
    let grade = classroom.grade_level.clone().filter(|g| !g.is_empty());
    let students = match classroom.student_count {
        1 => "1 student".to_owned(),
        n => format!("{n} students"),
    };
    let join_code = classroom.join_code.clone().filter(|_| classroom.is_teacher);

    view! {
        <div class="classroom-card">
            <a class="classroom-card__link" href=href>
                <span class="classroom-card__subject">{classroom.subject.clone()}</span>
                <span class="classroom-card__name">{classroom.name.clone()}</span>
                {grade.map(|grade| view! { <span class="classroom-card__grade">{grade}</span> })}
                <span class="classroom-card__students">{students}</span>
            </a>
            {join_code.map(|code| view! { <span class="classroom-card__code" title="Join code">{code}</span> })}
            {on_delete.map(|on_delete| {
                view! {
                    <button
                        class="btn btn--icon classroom-card__delete"
                        title="Delete classroom"
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                }
            })}
        </div>
    }
}
