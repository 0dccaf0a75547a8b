//! Shared fixtures and a scripted `EduApi` for flow tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use time::macros::datetime;

use crate::net::api::EduApi;
use crate::util::storage::{KeyValueStorage, MemoryStorage, StorageError};
use crate::net::error::{ApiError, STATUS_FORBIDDEN, STATUS_NOT_FOUND};
use crate::net::types::{
    Assignment, AssignmentCreate, AssignmentKind, AuthResponse, Classroom, ClassroomCreate, ClassroomUpdate,
    LoginRequest, Material, MessageResponse, PostCreate, RegisterRequest, Role, StreamPost, Submission,
    SubmissionCreate, User,
};

// =============================================================
// Fixtures
// =============================================================

pub fn user(role: Role) -> User {
    User {
        id: 1,
        email: "user@school.edu".to_owned(),
        full_name: "Test User".to_owned(),
        role,
        is_verified: true,
        ai_requests_used: 0,
        ai_requests_limit: 20,
    }
}

pub fn classroom(id: i64) -> Classroom {
    Classroom {
        id,
        name: format!("Class {id}"),
        subject: "Math".to_owned(),
        grade_level: None,
        description: None,
        join_code: None,
        is_teacher: false,
        student_count: 0,
        created_at: None,
    }
}

pub fn assignment(id: i64, classroom_id: i64) -> Assignment {
    Assignment {
        id,
        classroom_id,
        title: format!("Assignment {id}"),
        description: None,
        kind: AssignmentKind::Homework,
        due_date: Some(datetime!(2025-03-10 23:59 UTC)),
        max_points: 100.0,
        is_submitted: false,
        is_graded: false,
        score: None,
        submission_count: None,
    }
}

pub fn material(id: i64, classroom_id: i64) -> Material {
    Material {
        id,
        classroom_id,
        title: format!("Material {id}"),
        description: None,
        url: format!("https://example.com/m/{id}"),
    }
}

pub fn post(id: i64, classroom_id: i64) -> StreamPost {
    StreamPost {
        id,
        classroom_id,
        author_name: "Ms. Rivera".to_owned(),
        content: format!("Post {id}"),
        attachment: None,
        created_at: datetime!(2025-03-05 08:00 UTC),
    }
}

pub fn submission(id: i64, assignment_id: i64) -> Submission {
    Submission {
        id,
        assignment_id,
        student_id: 100 + id,
        student_name: format!("Student {id}"),
        submitted_at: datetime!(2025-03-05 10:00 UTC),
        content: Some("answer".to_owned()),
        attachment: None,
        is_graded: false,
        score: None,
    }
}

pub fn forbidden() -> ApiError {
    ApiError::Status { status: STATUS_FORBIDDEN, detail: Some("Not allowed".to_owned()) }
}

pub fn server_error() -> ApiError {
    ApiError::Status { status: 500, detail: None }
}

// =============================================================
// FakeApi
// =============================================================

type CallHook = Box<dyn Fn(&str)>;

/// Scripted `EduApi`.
///
/// Replies are keyed by `method` or `method:id`; the id-specific key wins.
/// Unscripted calls fail with a 404 so a missing script shows up as an
/// error path rather than a silent success.
#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<HashMap<String, Result<Value, ApiError>>>,
    calls: RefCell<Vec<String>>,
    bodies: RefCell<Vec<Value>>,
    on_call: RefCell<Option<CallHook>>,
}

impl FakeApi {
    pub fn respond<T: Serialize>(&self, key: &str, value: &T) -> &Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.replies.borrow_mut().insert(key.to_owned(), Ok(value));
        self
    }

    pub fn respond_json(&self, key: &str, value: Value) -> &Self {
        self.replies.borrow_mut().insert(key.to_owned(), Ok(value));
        self
    }

    pub fn fail(&self, key: &str, err: ApiError) -> &Self {
        self.replies.borrow_mut().insert(key.to_owned(), Err(err));
        self
    }

    /// Run `hook` with the call key as each call starts.
    pub fn on_call(&self, hook: impl Fn(&str) + 'static) {
        *self.on_call.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|call| call.starts_with(prefix)).count()
    }

    /// Request bodies in call order.
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.borrow().clone()
    }

    fn reply<T: DeserializeOwned>(&self, method: &str, id: Option<i64>, body: Option<Value>) -> Result<T, ApiError> {
        let key = id.map_or_else(|| method.to_owned(), |id| format!("{method}:{id}"));
        self.calls.borrow_mut().push(key.clone());
        if let Some(body) = body {
            self.bodies.borrow_mut().push(body);
        }
        if let Some(hook) = self.on_call.borrow().as_ref() {
            hook(&key);
        }

        let scripted = {
            let replies = self.replies.borrow();
            replies.get(&key).or_else(|| replies.get(method)).cloned()
        };
        match scripted {
            Some(Ok(value)) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            Some(Err(err)) => Err(err),
            None => Err(ApiError::Status { status: STATUS_NOT_FOUND, detail: Some(format!("unscripted call {key}")) }),
        }
    }
}

fn body<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

impl EduApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.reply("login", None, body(request))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.reply("register", None, body(request))
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.reply("current_user", None, None)
    }

    async fn resend_verification(&self) -> Result<MessageResponse, ApiError> {
        self.reply("resend_verification", None, None)
    }

    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.reply("verify_email", None, Some(Value::String(token.to_owned())))
    }

    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.reply("list_classrooms", None, None)
    }

    async fn get_classroom(&self, id: i64) -> Result<Classroom, ApiError> {
        self.reply("get_classroom", Some(id), None)
    }

    async fn create_classroom(&self, request: &ClassroomCreate) -> Result<Classroom, ApiError> {
        self.reply("create_classroom", None, body(request))
    }

    async fn join_classroom(&self, code: &str) -> Result<Classroom, ApiError> {
        self.reply("join_classroom", None, Some(Value::String(code.to_owned())))
    }

    async fn update_classroom(&self, id: i64, request: &ClassroomUpdate) -> Result<Classroom, ApiError> {
        self.reply("update_classroom", Some(id), body(request))
    }

    async fn delete_classroom(&self, id: i64) -> Result<(), ApiError> {
        self.reply("delete_classroom", Some(id), None)
    }

    async fn list_assignments(&self, classroom_id: i64) -> Result<Vec<Assignment>, ApiError> {
        self.reply("list_assignments", Some(classroom_id), None)
    }

    async fn get_assignment(&self, id: i64) -> Result<Assignment, ApiError> {
        self.reply("get_assignment", Some(id), None)
    }

    async fn create_assignment(&self, classroom_id: i64, request: &AssignmentCreate) -> Result<Assignment, ApiError> {
        self.reply("create_assignment", Some(classroom_id), body(request))
    }

    async fn delete_assignment(&self, id: i64) -> Result<(), ApiError> {
        self.reply("delete_assignment", Some(id), None)
    }

    async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>, ApiError> {
        self.reply("list_submissions", Some(assignment_id), None)
    }

    async fn submit_assignment(
        &self,
        assignment_id: i64,
        request: &SubmissionCreate,
    ) -> Result<Submission, ApiError> {
        self.reply("submit_assignment", Some(assignment_id), body(request))
    }

    async fn grade_submission(&self, submission_id: i64, score: f64) -> Result<Submission, ApiError> {
        self.reply("grade_submission", Some(submission_id), body(&score))
    }

    async fn list_materials(&self, classroom_id: i64) -> Result<Vec<Material>, ApiError> {
        self.reply("list_materials", Some(classroom_id), None)
    }

    async fn delete_material(&self, id: i64) -> Result<(), ApiError> {
        self.reply("delete_material", Some(id), None)
    }

    async fn list_posts(&self, classroom_id: i64) -> Result<Vec<StreamPost>, ApiError> {
        self.reply("list_posts", Some(classroom_id), None)
    }

    async fn create_post(&self, classroom_id: i64, request: &PostCreate) -> Result<StreamPost, ApiError> {
        self.reply("create_post", Some(classroom_id), body(request))
    }
}

// =============================================================
// RejectingStorage
// =============================================================

/// In-memory storage that refuses writes to chosen keys and, optionally,
/// every removal. Models a full quota or locked-down private mode.
#[derive(Clone, Debug, Default)]
pub struct RejectingStorage {
    pub inner: MemoryStorage,
    pub rejected_keys: Vec<String>,
    pub reject_all_writes: bool,
    pub reject_removals: bool,
}

impl RejectingStorage {
    /// Every `set` and `remove` fails.
    pub fn locked() -> Self {
        Self { reject_all_writes: true, reject_removals: true, ..Self::default() }
    }

    pub fn rejecting_key(mut self, key: &str) -> Self {
        self.rejected_keys.push(key.to_owned());
        self
    }

    pub fn rejecting_removals(mut self) -> Self {
        self.reject_removals = true;
        self
    }
}

impl KeyValueStorage for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_all_writes || self.rejected_keys.iter().any(|k| k == key) {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_removals {
            return Err(StorageError::Unavailable);
        }
        self.inner.remove(key)
    }
}
