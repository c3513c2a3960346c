//! # API crate: backend gateway for EagleTask
//!
//! Everything the client says to the EagleTask backend goes through this
//! crate. Views call [`Gateway`] methods and receive either decoded data or a
//! [`GatewayError`] whose kind decides which message the user sees.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`Backend`] transport trait and its `reqwest` implementation |
//! | [`config`] | `eagletask.toml` schema: base URL, timeout, retry policy |
//! | [`error`] | [`TransportError`] (one request) and [`GatewayError`] (one action) |
//! | [`gateway`] | One method per backend action |
//! | [`models`] | Response shapes that are not cached: validated user, quiz |
//! | [`refresh`] | Fetch a snapshot and persist it only on success |
//! | [`retry`] | Fixed-delay retry used while the backend wakes up |
//!
//! Cached records (courses, tasks, the session) live in the `store` crate and
//! are re-exported here for convenience.

pub mod backend;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod refresh;
pub mod retry;

#[cfg(test)]
mod test_support;

pub use backend::{Backend, HttpBackend, Upload};
pub use config::{BackendConfig, GatewayConfig, RetryConfig};
pub use error::{GatewayError, TransportError};
pub use gateway::{ChatContext, ChatTopic, Gateway};
pub use models::{QuizQuestion, QuizSet, ValidatedUser};
pub use refresh::{load_grades, refresh_grades, refresh_tasks};
pub use retry::{retry, sleep, Retried, RetryPolicy};

pub use store::{Assignment, Course, GradesSnapshot, Session, Task, TaskSnapshot};
