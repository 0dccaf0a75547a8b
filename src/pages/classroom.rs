//! Classroom page with stream, assignments, and materials tabs.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use time::OffsetDateTime;

use super::route_id;
use crate::actions::{load, mutate};
use crate::components::assignment_card::AssignmentCard;
use crate::components::classroom_dialog::ClassroomDialog;
use crate::components::material_card::MaterialCard;
use crate::components::nav_bar::NavBar;
use crate::components::post_composer::PostComposer;
use crate::components::stream_post::StreamPostCard;
use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::classroom::{ClassroomPage as ClassroomData, ClassroomTab};
use crate::state::composer::ComposerState;
use crate::state::drafts::ClassroomDraft;
use crate::state::modal::{ConfirmAction, ModalState};
use crate::util::auth::install_unauth_redirect;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ClassroomPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let classroom_id = route_id();
    let page = RwSignal::new(ClassroomData::default());
    let composer = RwSignal::new(ComposerState::default());
    let show_edit = RwSignal::new(false);

    // Reload when the route id changes; earlier responses are discarded by ticket.
    let load_api = api.clone();
    Effect::new(move || {
        let Some(id) = classroom_id.get() else {
            return;
        };
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            load::load_classroom(&api, &page, id).await;
        });
    });

    let post_api = api.clone();
    let on_post = Callback::new(move |()| {
        let Some(id) = classroom_id.get_untracked() else {
            return;
        };
        let api = post_api.clone();
        leptos::task::spawn_local(async move {
            mutate::create_post(&api, &page, &composer, &modal, id).await;
        });
    });

    let assignment_api = api.clone();
    let on_delete_assignment = Callback::new(move |id: i64| {
        let title = page.with_untracked(|p| p.assignments.iter().find(|a| a.id == id).map(|a| a.title.clone()));
        let Some(title) = title else {
            return;
        };
        let api = assignment_api.clone();
        let confirm: ConfirmAction = Arc::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                mutate::delete_assignment(&api, &page, &modal, id).await;
            });
        });
        mutate::request_delete(&modal, mutate::delete_assignment_prompt(&title), confirm);
    });

    let material_api = api.clone();
    let on_delete_material = Callback::new(move |id: i64| {
        let title = page.with_untracked(|p| p.materials.iter().find(|m| m.id == id).map(|m| m.title.clone()));
        let Some(title) = title else {
            return;
        };
        let api = material_api.clone();
        let confirm: ConfirmAction = Arc::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                mutate::delete_material(&api, &page, &modal, id).await;
            });
        });
        mutate::request_delete(&modal, mutate::delete_material_prompt(&title), confirm);
    });

    // Leaving the deleted classroom happens from inside the confirm action,
    // which must be Send; a signal carries the request back to the router.
    let deleted = RwSignal::new(false);
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if deleted.get() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let classroom_api = api.clone();
    let on_delete_classroom = Callback::new(move |()| {
        let Some((id, name)) = page.with_untracked(|p| p.classroom.as_ref().map(|c| (c.id, c.name.clone()))) else {
            return;
        };
        let api = classroom_api.clone();
        let confirm: ConfirmAction = Arc::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if mutate::delete_classroom(&api, &modal, id).await {
                    deleted.try_set(true);
                }
            });
        });
        mutate::request_delete(&modal, mutate::delete_classroom_prompt(&name), confirm);
    });

    let update_api = api.clone();
    let edit_draft = RwSignal::new(ClassroomDraft::default());
    let on_save = Callback::new(move |()| {
        let Some(id) = classroom_id.get_untracked() else {
            return;
        };
        let api = update_api.clone();
        leptos::task::spawn_local(async move {
            if mutate::update_classroom(&api, &edit_draft, &page, &modal, id).await.is_some() {
                show_edit.try_set(false);
            }
        });
    });
    let on_edit = move |_| {
        if let Some(draft) = page.with_untracked(|p| p.classroom.as_ref().map(ClassroomDraft::from_classroom)) {
            edit_draft.set(draft);
            show_edit.set(true);
        }
    };

    let is_teacher = move || page.with(ClassroomData::is_teacher);
    let tab = move || page.with(|p| p.tab);

    let stream = move || {
        let posts = page.with(|p| p.posts.clone());
        if posts.is_empty() {
            return view! { <p class="empty-state">"No announcements yet."</p> }.into_any();
        }
        posts.into_iter().map(|post| view! { <StreamPostCard post/> }).collect_view().into_any()
    };

    let assignments = move || {
        let now = OffsetDateTime::now_utc();
        let teacher = is_teacher();
        let items = page.with(|p| p.assignments.clone());
        if items.is_empty() {
            return view! { <p class="empty-state">"No assignments yet."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|assignment| {
                if teacher {
                    view! { <AssignmentCard assignment now on_delete=on_delete_assignment/> }.into_any()
                } else {
                    view! { <AssignmentCard assignment now/> }.into_any()
                }
            })
            .collect_view()
            .into_any()
    };

    let materials = move || {
        let teacher = is_teacher();
        let items = page.with(|p| p.materials.clone());
        if items.is_empty() {
            return view! { <p class="empty-state">"No materials yet."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|material| {
                if teacher {
                    view! { <MaterialCard material on_delete=on_delete_material/> }.into_any()
                } else {
                    view! { <MaterialCard material/> }.into_any()
                }
            })
            .collect_view()
            .into_any()
    };

    let header = move || {
        page.with(|p| p.classroom.clone()).map(|classroom| {
            let description = classroom.description.as_deref().map(render_markdown_html).unwrap_or_default();
            let code = classroom.join_code.clone().filter(|_| classroom.is_teacher);
            view! {
                <header class="classroom-page__header">
                    <span class="classroom-page__subject">{classroom.subject.clone()}</span>
                    <h1 class="classroom-page__name">{classroom.name.clone()}</h1>
                    <div class="classroom-page__description markdown" inner_html=description></div>
                    {code.map(|code| view! { <p class="classroom-page__code">"Join code: " <strong>{code}</strong></p> })}
                </header>
            }
        })
    };

    view! {
        <div class="classroom-page">
            <NavBar/>
            <Show
                when=move || !page.with(|p| p.phase.is_loading() && p.classroom.is_none())
                fallback=|| view! { <p>"Loading classroom..."</p> }
            >
                <Show
                    when=move || page.with(|p| p.classroom.is_some())
                    fallback=|| view! { <p class="empty-state">"Classroom not found."</p> }
                >
                    {header}
                    <Show when=is_teacher>
                        <div class="classroom-page__actions">
                            <a class="btn btn--primary" href=move || format!("/classrooms/{}/assignments/new", classroom_id.get().unwrap_or_default())>
                                "+ New assignment"
                            </a>
                            <button class="btn" on:click=on_edit>"Edit"</button>
                            <button class="btn btn--danger" on:click=move |_| on_delete_classroom.run(())>"Delete"</button>
                        </div>
                    </Show>
                    <nav class="tabs">
                        {ClassroomTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class=move || if tab() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                        on:click=move |_| page.update(|p| p.tab = t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <section class="classroom-page__panel">
                        {move || match tab() {
                            ClassroomTab::Stream => {
                                view! {
                                    <Show when=is_teacher>
                                        <PostComposer composer on_post/>
                                    </Show>
                                    <div class="stream">{stream}</div>
                                }
                                    .into_any()
                            }
                            ClassroomTab::Assignments => view! { <div class="assignment-list">{assignments}</div> }.into_any(),
                            ClassroomTab::Materials => view! { <div class="material-list">{materials}</div> }.into_any(),
                        }}
                    </section>
                </Show>
            </Show>
            <Show when=move || show_edit.get()>
                <ClassroomDialog
                    title="Edit classroom"
                    submit_label="Save"
                    draft=edit_draft
                    on_cancel=Callback::new(move |()| show_edit.set(false))
                    on_submit=on_save
                />
            </Show>
        </div>
    }
}
