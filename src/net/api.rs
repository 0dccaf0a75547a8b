//! REST client for the classroom backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from browser storage on every request.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! Pages and flows depend on the `EduApi` trait, not on `HttpApi`, so the
//! load/mutation logic in `actions` runs against a scripted fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the backend's
//! `detail` text. Transport failures are `Network`; body mismatches are
//! `Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Assignment, AssignmentCreate, AuthResponse, Classroom, ClassroomCreate, ClassroomUpdate, GradeRequest,
    JoinClassroomRequest, LoginRequest, Material, MessageResponse, PostCreate, RegisterRequest, StreamPost,
    Submission, SubmissionCreate, User, VerifyEmailRequest,
};
use crate::config::ClientConfig;

/// One method per backend call used by the client.
#[allow(async_fn_in_trait)]
pub trait EduApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn resend_verification(&self) -> Result<MessageResponse, ApiError>;
    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError>;

    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError>;
    async fn get_classroom(&self, id: i64) -> Result<Classroom, ApiError>;
    async fn create_classroom(&self, request: &ClassroomCreate) -> Result<Classroom, ApiError>;
    async fn join_classroom(&self, code: &str) -> Result<Classroom, ApiError>;
    async fn update_classroom(&self, id: i64, request: &ClassroomUpdate) -> Result<Classroom, ApiError>;
    async fn delete_classroom(&self, id: i64) -> Result<(), ApiError>;

    async fn list_assignments(&self, classroom_id: i64) -> Result<Vec<Assignment>, ApiError>;
    async fn get_assignment(&self, id: i64) -> Result<Assignment, ApiError>;
    async fn create_assignment(&self, classroom_id: i64, request: &AssignmentCreate) -> Result<Assignment, ApiError>;
    async fn delete_assignment(&self, id: i64) -> Result<(), ApiError>;

    async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>, ApiError>;
    async fn submit_assignment(&self, assignment_id: i64, request: &SubmissionCreate)
    -> Result<Submission, ApiError>;
    async fn grade_submission(&self, submission_id: i64, score: f64) -> Result<Submission, ApiError>;

    async fn list_materials(&self, classroom_id: i64) -> Result<Vec<Material>, ApiError>;
    async fn delete_material(&self, id: i64) -> Result<(), ApiError>;

    async fn list_posts(&self, classroom_id: i64) -> Result<Vec<StreamPost>, ApiError>;
    async fn create_post(&self, classroom_id: i64, request: &PostCreate) -> Result<StreamPost, ApiError>;
}

// =============================================================
// Endpoints
// =============================================================

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const CURRENT_USER_PATH: &str = "/auth/me";
const RESEND_VERIFICATION_PATH: &str = "/auth/resend-verification";
const VERIFY_EMAIL_PATH: &str = "/auth/verify-email";
const CLASSROOMS_PATH: &str = "/classrooms";
const JOIN_CLASSROOM_PATH: &str = "/classrooms/join";

fn classroom_endpoint(id: i64) -> String {
    format!("{CLASSROOMS_PATH}/{id}")
}

fn classroom_assignments_endpoint(classroom_id: i64) -> String {
    format!("{CLASSROOMS_PATH}/{classroom_id}/assignments")
}

fn classroom_materials_endpoint(classroom_id: i64) -> String {
    format!("{CLASSROOMS_PATH}/{classroom_id}/materials")
}

fn classroom_posts_endpoint(classroom_id: i64) -> String {
    format!("{CLASSROOMS_PATH}/{classroom_id}/posts")
}

fn assignment_endpoint(id: i64) -> String {
    format!("/assignments/{id}")
}

fn assignment_submissions_endpoint(assignment_id: i64) -> String {
    format!("/assignments/{assignment_id}/submissions")
}

fn grade_endpoint(submission_id: i64) -> String {
    format!("/submissions/{submission_id}/grade")
}

fn material_endpoint(id: i64) -> String {
    format!("/materials/{id}")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================
// HttpApi
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// `EduApi` over HTTP against `ClientConfig::api_base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    token_key: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone(), token_key: config.storage_keys.token.clone() }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Verb::Get, path, None).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Verb::Post, path, Some(body)).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(Verb::Put, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_for_status::<()>(Verb::Delete, path, None).await
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.dispatch(verb, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn send_for_status<B: Serialize>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(verb, path, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use crate::util::storage::{BrowserStorage, KeyValueStorage};
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = BrowserStorage.get(&self.token_key) {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &text));
        }
        Ok(resp)
    }
}

impl EduApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(CURRENT_USER_PATH).await
    }

    async fn resend_verification(&self) -> Result<MessageResponse, ApiError> {
        self.post_json(RESEND_VERIFICATION_PATH, &serde_json::json!({})).await
    }

    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.post_json(VERIFY_EMAIL_PATH, &VerifyEmailRequest { token: token.to_owned() }).await
    }

    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.get_json(CLASSROOMS_PATH).await
    }

    async fn get_classroom(&self, id: i64) -> Result<Classroom, ApiError> {
        self.get_json(&classroom_endpoint(id)).await
    }

    async fn create_classroom(&self, request: &ClassroomCreate) -> Result<Classroom, ApiError> {
        self.post_json(CLASSROOMS_PATH, request).await
    }

    async fn join_classroom(&self, code: &str) -> Result<Classroom, ApiError> {
        self.post_json(JOIN_CLASSROOM_PATH, &JoinClassroomRequest { code: code.trim().to_owned() }).await
    }

    async fn update_classroom(&self, id: i64, request: &ClassroomUpdate) -> Result<Classroom, ApiError> {
        self.put_json(&classroom_endpoint(id), request).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&classroom_endpoint(id)).await
    }

    async fn list_assignments(&self, classroom_id: i64) -> Result<Vec<Assignment>, ApiError> {
        self.get_json(&classroom_assignments_endpoint(classroom_id)).await
    }

    async fn get_assignment(&self, id: i64) -> Result<Assignment, ApiError> {
        self.get_json(&assignment_endpoint(id)).await
    }

    async fn create_assignment(&self, classroom_id: i64, request: &AssignmentCreate) -> Result<Assignment, ApiError> {
        self.post_json(&classroom_assignments_endpoint(classroom_id), request).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&assignment_endpoint(id)).await
    }

    async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>, ApiError> {
        self.get_json(&assignment_submissions_endpoint(assignment_id)).await
    }

    async fn submit_assignment(
        &self,
        assignment_id: i64,
        request: &SubmissionCreate,
    ) -> Result<Submission, ApiError> {
        self.post_json(&assignment_submissions_endpoint(assignment_id), request).await
    }

    async fn grade_submission(&self, submission_id: i64, score: f64) -> Result<Submission, ApiError> {
        self.post_json(&grade_endpoint(submission_id), &GradeRequest { score }).await
    }

    async fn list_materials(&self, classroom_id: i64) -> Result<Vec<Material>, ApiError> {
        self.get_json(&classroom_materials_endpoint(classroom_id)).await
    }

    async fn delete_material(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&material_endpoint(id)).await
    }

    async fn list_posts(&self, classroom_id: i64) -> Result<Vec<StreamPost>, ApiError> {
        self.get_json(&classroom_posts_endpoint(classroom_id)).await
    }

    async fn create_post(&self, classroom_id: i64, request: &PostCreate) -> Result<StreamPost, ApiError> {
        self.post_json(&classroom_posts_endpoint(classroom_id), request).await
    }
}
