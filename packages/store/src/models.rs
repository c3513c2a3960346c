//! # Domain models for courses, grades and tasks
//!
//! Defines the records the client caches between page loads. They are
//! `Serialize + Deserialize` so they can be written to the key-value store as
//! JSON and sent back to the backend as chat context.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Course`] | A course with its graded assignments, in backend order. |
//! | [`Assignment`] | One graded assignment: achieved score out of possible points, plus an optional due date. |
//! | [`Task`] | One generated study task: title, course, time estimate, due timestamp and description. |
//! | [`Session`] | The persisted login record. |
//!
//! Field names follow the backend's wire format through `serde(rename)`, so a
//! snapshot written to storage is byte-compatible with what the backend sent.
//!
//! [`GradesSnapshot`] and [`TaskSnapshot`] are plain vectors: a refresh replaces
//! the whole vector, it never merges.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Last successful grades fetch.
pub type GradesSnapshot = Vec<Course>;

/// Last successful task generation.
pub type TaskSnapshot = Vec<Task>;

/// A course and its graded assignments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "course_name")]
    pub name: String,
    #[serde(rename = "graded_assignments", default)]
    pub assignments: Vec<Assignment>,
}

/// A graded assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    /// Points the student received.
    #[serde(rename = "submission_score")]
    pub score: f64,
    /// Points available.
    #[serde(rename = "points_possible")]
    pub possible: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Assignment {
    /// Score as a percentage, or `None` for zero-point assignments.
    pub fn percentage(&self) -> Option<f64> {
        percent(self.score, self.possible)
    }
}

impl Course {
    /// Sum of achieved and possible points across all assignments.
    pub fn totals(&self) -> (f64, f64) {
        self.assignments
            .iter()
            .fold((0.0, 0.0), |(s, p), a| (s + a.score, p + a.possible))
    }

    /// Overall course percentage weighted by points.
    pub fn percentage(&self) -> Option<f64> {
        let (score, possible) = self.totals();
        percent(score, possible)
    }
}

fn percent(score: f64, possible: f64) -> Option<f64> {
    if possible > 0.0 {
        Some(score / possible * 100.0)
    } else {
        None
    }
}

/// A study task produced by the task generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub title: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub time_estimate: String,
    /// Due timestamp as the backend formatted it.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Calendar day the task is due, if the timestamp can be parsed.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]` (space or `T`) and bare
    /// `YYYY-MM-DD`.
    pub fn due_day(&self) -> Option<NaiveDate> {
        parse_day(self.due_date.trim())
    }
}

fn parse_day(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Persisted login record.
///
/// `is_logged_in` is only ever written as `true` together with a credential;
/// [`Session::is_valid`] re-checks that on read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub is_logged_in: bool,
    pub credential: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn signed_in(credential: &str, user_id: &str) -> Self {
        Self {
            is_logged_in: true,
            credential: Some(credential.to_string()),
            user_id: Some(user_id.to_string()),
        }
    }

    /// Logged in with a non-empty credential.
    pub fn is_valid(&self) -> bool {
        self.is_logged_in && self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }
}
