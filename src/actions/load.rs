//! Fetch-on-mount flows, one per route.
//!
//! Each flow takes a fresh ticket, issues its fetches concurrently, settles
//! each one independently, and applies the results only if the ticket is
//! still current when they arrive.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::collections::HashMap;

use futures::future::join_all;

use crate::net::api::EduApi;
use crate::state::assignment::AssignmentPage;
use crate::state::cell::StateCell;
use crate::state::classroom::ClassroomPage;
use crate::state::dashboard::DashboardPage;
use crate::state::load::{LoadPhase, settle};

pub async fn load_dashboard(api: &impl EduApi, page: &impl StateCell<DashboardPage>) {
    let Some(ticket) = page.modify(|p| {
        p.phase = LoadPhase::Loading;
        p.seq.begin()
    }) else {
        return;
    };

    let classrooms = settle("classrooms", api.list_classrooms().await);
    let lists = join_all(classrooms.iter().map(|c| api.list_assignments(c.id))).await;
    let assignments: HashMap<_, _> = classrooms
        .iter()
        .zip(lists)
        .map(|(classroom, result)| (classroom.id, settle(&format!("assignments for classroom {}", classroom.id), result)))
        .collect();

    page.modify(|p| {
        if !p.seq.is_current(ticket) {
            return;
        }
        p.classrooms = classrooms;
        p.assignments = assignments;
        p.phase = LoadPhase::Ready;
    });
}

pub async fn load_classroom(api: &impl EduApi, page: &impl StateCell<ClassroomPage>, classroom_id: i64) {
    let Some(ticket) = page.modify(|p| p.begin_load(classroom_id)) else {
        return;
    };

    let (classroom, assignments, materials, posts) = futures::join!(
        api.get_classroom(classroom_id),
        api.list_assignments(classroom_id),
        api.list_materials(classroom_id),
        api.list_posts(classroom_id),
    );
    let classroom = settle("classroom", classroom.map(Some));
    let assignments = settle("assignments", assignments);
    let materials = settle("materials", materials);
    let posts = settle("posts", posts);

    page.modify(|p| {
        if !p.seq.is_current(ticket) {
            return;
        }
        p.classroom = classroom;
        p.assignments = assignments;
        p.materials = materials;
        p.posts = posts;
        p.phase = LoadPhase::Ready;
    });
}

pub async fn load_assignment(api: &impl EduApi, page: &impl StateCell<AssignmentPage>, assignment_id: i64) {
    let Some(ticket) = page.modify(|p| p.begin_load(assignment_id)) else {
        return;
    };

    let (assignment, submissions) =
        futures::join!(api.get_assignment(assignment_id), api.list_submissions(assignment_id));
    let assignment = settle("assignment", assignment.map(Some));
    let submissions = settle("submissions", submissions);

    page.modify(|p| {
        if !p.seq.is_current(ticket) {
            return;
        }
        p.assignment = assignment;
        p.grade_drafts.clear();
        p.submissions = submissions;
        p.phase = LoadPhase::Ready;
    });
}

/// Refetch submissions after a grade or submit, keeping the current list
/// when the refetch fails.
pub async fn reload_submissions(api: &impl EduApi, page: &impl StateCell<AssignmentPage>, assignment_id: i64) {
    let Some(ticket) = page.inspect(|p| p.seq.current()) else {
        return;
    };
    match api.list_submissions(assignment_id).await {
        Ok(submissions) => {
            page.modify(|p| {
                if p.seq.is_current(ticket) {
                    p.replace_submissions(submissions);
                }
            });
        }
        Err(err) => leptos::logging::warn!("failed to reload submissions for assignment {assignment_id}: {err}"),
    }
}
