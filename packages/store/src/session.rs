//! # Session store: login state and cached snapshots on an abstract key-value store
//!
//! [`SessionStore`] is the only component that reads or writes the client's
//! persisted state. All access goes through the [`KvStore`] trait, so the same
//! logic runs against an in-memory map (tests), the filesystem (native builds)
//! or `window.localStorage` (web).
//!
//! ## [`KvStore`] trait
//!
//! Three synchronous methods over string keys and string values: `get`, `set`
//! and `remove`. Browser storage is synchronous, and keeping the trait
//! synchronous means a read issued after a write always observes it.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`SESSION_KEY`] | JSON [`Session`] (login flag, credential, user id) |
//! | [`GRADES_KEY`] | JSON [`GradesSnapshot`] |
//! | [`TASKS_KEY`] | JSON [`TaskSnapshot`] |
//!
//! The session is stored as one value so signing in or out flips every field
//! at once. Snapshots are serialized in full before the single `set` call; a
//! reader never sees a partially built document.
//!
//! ## Phases
//!
//! [`SessionPhase`] models the login state machine. `Authenticating` is held in
//! UI memory only; [`SessionStore::phase`] derives the phase from storage and
//! therefore reports `Anonymous` after a reload that interrupted a login.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{GradesSnapshot, Session, TaskSnapshot};

pub const SESSION_KEY: &str = "eagletask.session";
pub const GRADES_KEY: &str = "eagletask.grades";
pub const TASKS_KEY: &str = "eagletask.tasks";

/// Synchronous string key-value storage.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Login state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Session and snapshot persistence backed by a [`KvStore`].
pub struct SessionStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a validated credential. Calling it again with the same values
    /// rewrites an identical record.
    pub fn sign_in(&self, credential: &str, user_id: &str) {
        self.write_json(SESSION_KEY, &Session::signed_in(credential, user_id));
    }

    /// Forget the session and every cached snapshot.
    pub fn sign_out(&self) {
        self.store.remove(SESSION_KEY);
        self.store.remove(GRADES_KEY);
        self.store.remove(TASKS_KEY);
    }

    /// Whether a valid session is stored. Reads storage on every call.
    pub fn is_signed_in(&self) -> bool {
        self.session().is_valid()
    }

    /// The stored session, or the signed-out default.
    pub fn session(&self) -> Session {
        self.read_json(SESSION_KEY).unwrap_or_default()
    }

    /// Credential of a valid session.
    pub fn credential(&self) -> Option<String> {
        let session = self.session();
        if session.is_valid() {
            session.credential
        } else {
            None
        }
    }

    pub fn user_id(&self) -> Option<String> {
        let session = self.session();
        if session.is_valid() {
            session.user_id
        } else {
            None
        }
    }

    /// Persisted phase; never `Authenticating`.
    pub fn phase(&self) -> SessionPhase {
        if self.is_signed_in() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Replace the cached grades.
    pub fn save_grades(&self, grades: &GradesSnapshot) {
        self.write_json(GRADES_KEY, grades);
    }

    pub fn grades(&self) -> Option<GradesSnapshot> {
        self.read_json(GRADES_KEY)
    }

    /// Replace the cached tasks.
    pub fn save_tasks(&self, tasks: &TaskSnapshot) {
        self.write_json(TASKS_KEY, tasks);
    }

    pub fn tasks(&self) -> Option<TaskSnapshot> {
        self.read_json(TASKS_KEY)
    }

    /// Raw stored value for a key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable stored value");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{Assignment, Course, Task};

    fn sample_grades() -> GradesSnapshot {
        vec![
            Course {
                name: "Calculus I".to_string(),
                assignments: vec![
                    Assignment {
                        name: "Quiz 1".to_string(),
                        score: 8.5,
                        possible: 10.0,
                        due_date: Some("2024-09-12T23:59:00Z".to_string()),
                    },
                    Assignment {
                        name: "Quiz 2".to_string(),
                        score: 10.0,
                        possible: 10.0,
                        due_date: None,
                    },
                ],
            },
            Course {
                name: "Intro to Philosophy".to_string(),
                assignments: vec![],
            },
        ]
    }

    #[test]
    fn test_sign_in_then_out() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(!sessions.is_signed_in());
        assert_eq!(sessions.phase(), SessionPhase::Anonymous);

        sessions.sign_in("canvas-token", "1234");
        assert!(sessions.is_signed_in());
        assert_eq!(sessions.credential().as_deref(), Some("canvas-token"));
        assert_eq!(sessions.user_id().as_deref(), Some("1234"));
        assert_eq!(sessions.phase(), SessionPhase::Authenticated);

        sessions.sign_out();
        assert!(!sessions.is_signed_in());
        assert_eq!(sessions.credential(), None);
        assert_eq!(sessions.session(), Session::default());
    }

    #[test]
    fn test_sign_in_is_idempotent() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());

        sessions.sign_in("canvas-token", "1234");
        let first = store.get(SESSION_KEY);
        sessions.sign_in("canvas-token", "1234");
        sessions.sign_in("canvas-token", "1234");

        assert!(sessions.is_signed_in());
        assert_eq!(store.get(SESSION_KEY), first);
    }

    #[test]
    fn test_reads_are_fresh_across_handles() {
        let store = MemoryStore::new();
        let a = SessionStore::new(store.clone());
        let b = SessionStore::new(store);

        a.sign_in("canvas-token", "1234");
        assert!(b.is_signed_in());
        b.sign_out();
        assert!(!a.is_signed_in());
    }

    #[test]
    fn test_sign_out_clears_snapshots() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());
        sessions.sign_in("canvas-token", "1234");
        sessions.save_grades(&sample_grades());
        sessions.save_tasks(&vec![]);

        sessions.sign_out();
        assert!(store.get(SESSION_KEY).is_none());
        assert!(store.get(GRADES_KEY).is_none());
        assert!(store.get(TASKS_KEY).is_none());
    }

    #[test]
    fn test_grades_roundtrip_preserves_order() {
        let sessions = SessionStore::new(MemoryStore::new());
        let grades = sample_grades();
        sessions.save_grades(&grades);

        let loaded = sessions.grades().unwrap();
        assert_eq!(loaded, grades);
        assert_eq!(loaded[0].assignments[0].name, "Quiz 1");
        assert_eq!(loaded[0].assignments[1].name, "Quiz 2");
        assert_eq!(loaded[1].name, "Intro to Philosophy");
    }

    #[test]
    fn test_snapshot_is_replaced_not_merged() {
        let sessions = SessionStore::new(MemoryStore::new());
        let task = |title: &str| Task {
            title: title.to_string(),
            course: "BIOL 2000".to_string(),
            time_estimate: "30 minutes".to_string(),
            due_date: "2024-10-01".to_string(),
            description: String::new(),
        };

        sessions.save_tasks(&vec![task("a"), task("b")]);
        sessions.save_tasks(&vec![task("c")]);

        let tasks = sessions.tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "c");
    }

    #[test]
    fn test_corrupt_values_read_as_absent() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json");
        store.set(GRADES_KEY, "[{\"course_name\": 3}]");

        let sessions = SessionStore::new(store);
        assert!(!sessions.is_signed_in());
        assert!(sessions.grades().is_none());
    }

    #[test]
    fn test_logged_in_flag_without_credential_is_signed_out() {
        let store = MemoryStore::new();
        store.set(
            SESSION_KEY,
            r#"{"is_logged_in": true, "credential": null, "user_id": "1234"}"#,
        );
        let sessions = SessionStore::new(store);
        assert!(!sessions.is_signed_in());
        assert_eq!(sessions.user_id(), None);
    }

    #[test]
    fn test_interrupted_login_resolves_to_anonymous() {
        let store = MemoryStore::new();
        // A login in progress lives only in UI memory; nothing is written
        // until validation succeeds.
        let mut phase = SessionPhase::Authenticating;
        assert_eq!(phase, SessionPhase::Authenticating);

        // Reload: a fresh store handle derives the phase from storage.
        phase = SessionStore::new(store).phase();
        assert_eq!(phase, SessionPhase::Anonymous);
    }
}
