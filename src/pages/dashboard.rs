//! Dashboard: classrooms, upcoming work, and subject mastery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Loads every classroom and its assignments
//! once auth has settled, then derives the upcoming list and radar chart from
//! that snapshot. Teachers create classrooms here; students join by code.

use leptos::prelude::*;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::actions::{load, mutate};
use crate::components::assignment_card::AssignmentCard;
use crate::components::classroom_card::ClassroomCard;
use crate::components::classroom_dialog::ClassroomDialog;
use crate::components::nav_bar::NavBar;
use crate::components::radar_chart::RadarChart;
use crate::components::verification_banner::VerificationBanner;
use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardPage as DashboardData, empty_classrooms_message};
use crate::state::drafts::ClassroomDraft;
use crate::state::modal::{ConfirmAction, ModalState};
use crate::util::auth::install_unauth_redirect;
use crate::util::due::upcoming;
use crate::util::radar::subject_mastery;

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let page = RwSignal::new(DashboardData::default());
    let draft = RwSignal::new(ClassroomDraft::default());
    let show_create = RwSignal::new(false);

    let load_api = api.clone();
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !auth.with(AuthState::is_authenticated) {
            return;
        }
        requested.set(true);
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            load::load_dashboard(&api, &page).await;
        });
    });

    let is_teacher = move || auth.with(AuthState::is_teacher);

    let delete_api = api.clone();
    let on_delete_request = Callback::new(move |id: i64| {
        let name = page.with_untracked(|p| p.classroom_name(id).unwrap_or_default().to_owned());
        let api = delete_api.clone();
        let confirm: ConfirmAction = Arc::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if mutate::delete_classroom(&api, &modal, id).await {
                    page.try_update(|p| p.remove_classroom(id));
                }
            });
        });
        mutate::request_delete(&modal, mutate::delete_classroom_prompt(&name), confirm);
    });

    let create_api = api.clone();
    let on_create = Callback::new(move |()| {
        let api = create_api.clone();
        leptos::task::spawn_local(async move {
            if mutate::create_classroom(&api, &draft, &page, &modal).await.is_some() {
                show_create.try_set(false);
            }
        });
    });

    let join_api = api.clone();
    let on_join = Callback::new(move |()| {
        let api = join_api.clone();
        leptos::task::spawn_local(async move {
            mutate::join_classroom(&api, &page, &modal).await;
        });
    });

    let classrooms = move || {
        let teacher = is_teacher();
        page.with(|p| p.classrooms.clone())
            .into_iter()
            .map(|classroom| {
                let on_delete = (teacher && classroom.is_teacher).then_some(on_delete_request);
                match on_delete {
                    Some(on_delete) => view! { <ClassroomCard classroom on_delete/> }.into_any(),
                    None => view! { <ClassroomCard classroom/> }.into_any(),
                }
            })
            .collect_view()
    };

    let upcoming_list = move || {
        let now = OffsetDateTime::now_utc();
        page.with(|p| {
            let all = p.all_assignments();
            upcoming(&all, now, UPCOMING_LIMIT)
                .into_iter()
                .map(|assignment| {
                    let classroom_name = p.classroom_name(assignment.classroom_id).unwrap_or_default().to_owned();
                    view! { <AssignmentCard assignment=assignment.clone() now classroom_name/> }
                })
                .collect_view()
        })
    };

    let mastery = Signal::derive(move || page.with(|p| subject_mastery(&p.classrooms, &p.assignments)));

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <NavBar/>
                <VerificationBanner/>

                <section class="dashboard-page__classrooms">
                    <header class="section-header">
                        <h2>"My classrooms"</h2>
                        <Show
                            when=is_teacher
                            fallback=move || {
                                view! {
                                    <form
                                        class="join-form"
                                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                                            ev.prevent_default();
                                            on_join.run(());
                                        }
                                    >
                                        <input
                                            class="join-form__code"
                                            type="text"
                                            placeholder="Join code"
                                            prop:value=move || page.with(|p| p.join_code.clone())
                                            on:input=move |ev| page.update(|p| p.join_code = event_target_value(&ev))
                                        />
                                        <button class="btn btn--primary" type="submit" disabled=move || page.with(|p| p.joining)>
                                            {move || if page.with(|p| p.joining) { "Joining..." } else { "Join" }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                "+ New classroom"
                            </button>
                        </Show>
                    </header>
                    <Show
                        when=move || !page.with(|p| p.phase.is_loading())
                        fallback=|| view! { <p>"Loading classrooms..."</p> }
                    >
                        <Show
                            when=move || page.with(|p| !p.classrooms.is_empty())
                            fallback=move || view! { <p class="empty-state">{empty_classrooms_message(is_teacher())}</p> }
                        >
                            <div class="dashboard-page__cards">{classrooms}</div>
                        </Show>
                    </Show>
                </section>

                <section class="dashboard-page__upcoming">
                    <h2>"Upcoming"</h2>
                    <div class="assignment-list">{upcoming_list}</div>
                </section>

                <section class="dashboard-page__mastery">
                    <h2>"Subject mastery"</h2>
                    <RadarChart data=mastery/>
                </section>

                <Show when=move || show_create.get()>
                    <ClassroomDialog
                        title="Create classroom"
                        submit_label="Create"
                        draft
                        on_cancel=Callback::new(move |()| show_create.set(false))
                        on_submit=on_create
                    />
                </Show>
            </div>
        </Show>
    }
}
