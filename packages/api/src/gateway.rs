//! # Gateway: one method per user-facing backend action
//!
//! [`Gateway`] shapes each request, sends it through a [`Backend`], and turns
//! the outcome into either a decoded value or a [`GatewayError`] of the right
//! kind. It never reads or writes the session store; callers own persistence.
//!
//! | Method | Endpoint | Attempts | Error kind |
//! |--------|----------|----------|------------|
//! | [`validate_credential`](Gateway::validate_credential) | `POST /validate-api-key` | up to the policy ceiling | `Auth` / `Transient` |
//! | [`wake`](Gateway::wake) | `GET /` | up to the policy ceiling | `Transient` |
//! | [`fetch_grades`](Gateway::fetch_grades) | `POST /get-courses-with-graded-assignments` | 1 | `Fetch` |
//! | [`generate_tasks`](Gateway::generate_tasks) | `POST /create-tasks` | 1 | `Fetch` |
//! | [`chat`](Gateway::chat) | `/analyze-grades`, `/chat-tasks`, `/support` | 1 | `Chat` |
//! | [`generate_quiz`](Gateway::generate_quiz) | `POST /create-quiz` (multipart) | 1 | `Quiz` |
//!
//! Task generation uses a single contract: request `{"apiKey": ...}`, response
//! `{"tasks": [...]}`. A free-text `{"response": ...}` body is a decode
//! failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use store::{Course, GradesSnapshot, Task, TaskSnapshot};

use crate::backend::{Backend, HttpBackend, Upload};
use crate::config::GatewayConfig;
use crate::error::{GatewayError, TransportError};
use crate::models::{QuizSet, ValidatedUser};
use crate::retry::{retry, Retried, RetryPolicy};

const WAKE_PATH: &str = "/";
const VALIDATE_PATH: &str = "/validate-api-key";
const GRADES_PATH: &str = "/get-courses-with-graded-assignments";
const TASKS_PATH: &str = "/create-tasks";
const QUIZ_PATH: &str = "/create-quiz";
const QUIZ_FIELD: &str = "file";

/// What a chat turn is about, with the context the backend needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChatContext<'a> {
    Grades(&'a [Course]),
    Tasks(&'a [Task]),
    Support,
}

/// Chat topic without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatTopic {
    Grades,
    Tasks,
    Support,
}

impl ChatTopic {
    pub fn path(self) -> &'static str {
        match self {
            Self::Grades => "/analyze-grades",
            Self::Tasks => "/chat-tasks",
            Self::Support => "/support",
        }
    }
}

impl ChatContext<'_> {
    pub fn topic(&self) -> ChatTopic {
        match self {
            Self::Grades(_) => ChatTopic::Grades,
            Self::Tasks(_) => ChatTopic::Tasks,
            Self::Support => ChatTopic::Support,
        }
    }

    fn body(&self, prompt: &str) -> Value {
        match self {
            Self::Grades(grades) => json!({ "prompt": prompt, "grades": grades }),
            Self::Tasks(tasks) => json!({ "prompt": prompt, "tasks": tasks }),
            Self::Support => json!({ "prompt": prompt }),
        }
    }
}

#[derive(Deserialize)]
struct WakeResponse {
    message: String,
}

#[derive(Deserialize)]
struct GradesResponse {
    courses_with_graded_assignments: GradesSnapshot,
}

#[derive(Deserialize)]
struct TasksResponse {
    tasks: TaskSnapshot,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Deserialize)]
struct QuizResponse {
    #[serde(rename = "Quiz")]
    quiz: QuizSet,
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Backend client for every EagleTask action.
pub struct Gateway<B: Backend> {
    backend: B,
    policy: RetryPolicy,
}

impl Gateway<HttpBackend> {
    /// HTTP gateway built from a configuration document.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(HttpBackend::new(&config.backend), config.retry.policy())
    }
}

impl<B: Backend> Gateway<B> {
    pub fn new(backend: B, policy: RetryPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Liveness probe, retried under the cold-start policy.
    pub async fn wake(&self) -> Result<String, GatewayError> {
        let result = retry(
            &self.policy,
            |attempt| {
                tracing::debug!(attempt, "probing backend");
                let reply = self.backend.get_json(WAKE_PATH);
                async move { decode::<WakeResponse>(reply.await?) }
            },
            TransportError::is_cold_start,
        )
        .await;

        match result {
            Ok(r) => {
                tracing::info!("backend is awake");
                Ok(r.message)
            }
            Err(Retried::Aborted { attempt: attempts, error })
            | Err(Retried::Exhausted { attempts, last: error }) => {
                tracing::warn!(attempts, %error, "backend did not wake up");
                Err(GatewayError::Transient {
                    attempts,
                    detail: error.to_string(),
                })
            }
        }
    }

    /// Check a credential, retrying while the backend is cold.
    ///
    /// Any failure other than a cold-start symptom stops at once with
    /// [`GatewayError::Auth`]. Only running out of attempts yields
    /// [`GatewayError::Transient`].
    pub async fn validate_credential(&self, token: &str) -> Result<ValidatedUser, GatewayError> {
        if token.trim().is_empty() {
            return Err(GatewayError::Auth("empty credential".to_string()));
        }
        let body = json!({ "api_key": token });

        let result = retry(
            &self.policy,
            |attempt| {
                tracing::debug!(attempt, "validating credential");
                self.backend.post_json(VALIDATE_PATH, body.clone())
            },
            TransportError::is_cold_start,
        )
        .await;

        match result {
            Ok(value) => {
                let user = ValidatedUser::from_response(value).map_err(GatewayError::Auth)?;
                tracing::info!(user_id = %user.user_id, "credential accepted");
                Ok(user)
            }
            Err(Retried::Aborted { error, .. }) => {
                tracing::warn!(%error, "credential rejected");
                Err(GatewayError::Auth(error.to_string()))
            }
            Err(Retried::Exhausted { attempts, last }) => {
                tracing::warn!(attempts, error = %last, "backend unreachable, giving up");
                Err(GatewayError::Transient {
                    attempts,
                    detail: last.to_string(),
                })
            }
        }
    }

    /// Courses with graded assignments. Single attempt.
    pub async fn fetch_grades(&self, token: &str) -> Result<GradesSnapshot, GatewayError> {
        let result = match self
            .backend
            .post_json(GRADES_PATH, json!({ "api_key": token }))
            .await
        {
            Ok(value) => decode::<GradesResponse>(value).map(|r| r.courses_with_graded_assignments),
            Err(e) => Err(e),
        };
        result
            .inspect(|grades| tracing::info!(courses = grades.len(), "fetched grades"))
            .map_err(|e| {
                tracing::warn!(error = %e, "grades fetch failed");
                GatewayError::Fetch(e.to_string())
            })
    }

    /// Generated task list. Single attempt.
    pub async fn generate_tasks(&self, token: &str) -> Result<TaskSnapshot, GatewayError> {
        let result = match self
            .backend
            .post_json(TASKS_PATH, json!({ "apiKey": token }))
            .await
        {
            Ok(value) => decode::<TasksResponse>(value).map(|r| r.tasks),
            Err(e) => Err(e),
        };
        result
            .inspect(|tasks| tracing::info!(tasks = tasks.len(), "generated tasks"))
            .map_err(|e| {
                tracing::warn!(error = %e, "task generation failed");
                GatewayError::Fetch(e.to_string())
            })
    }

    /// One chat turn. Single attempt.
    pub async fn chat(&self, context: ChatContext<'_>, message: &str) -> Result<String, GatewayError> {
        let topic = context.topic();
        if message.trim().is_empty() {
            return Err(GatewayError::Chat("empty message".to_string()));
        }
        let result = match self
            .backend
            .post_json(topic.path(), context.body(message))
            .await
        {
            Ok(value) => decode::<ChatResponse>(value).map(|r| r.response),
            Err(e) => Err(e),
        };
        result.map_err(|e| {
            tracing::warn!(?topic, error = %e, "chat turn failed");
            GatewayError::Chat(e.to_string())
        })
    }

    /// Upload a document and get a quiz back. Single attempt.
    pub async fn generate_quiz(&self, upload: Upload) -> Result<QuizSet, GatewayError> {
        if upload.bytes.is_empty() {
            return Err(GatewayError::Quiz(format!("{} is empty", upload.file_name)));
        }
        let file_name = upload.file_name.clone();
        let result = match self.backend.post_file(QUIZ_PATH, QUIZ_FIELD, upload).await {
            Ok(value) => decode::<QuizResponse>(value).map(|r| r.quiz),
            Err(e) => Err(e),
        };
        match result {
            Ok(quiz) if quiz.is_empty() => {
                tracing::warn!(file = %file_name, "quiz came back empty");
                Err(GatewayError::Quiz(format!("no questions generated from {file_name}")))
            }
            Ok(quiz) => {
                tracing::info!(file = %file_name, questions = quiz.len(), "generated quiz");
                Ok(quiz)
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "quiz generation failed");
                Err(GatewayError::Quiz(e.to_string()))
            }
        }
    }
}
