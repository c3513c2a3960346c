//! Fetch-then-persist helpers for the cached snapshots.
//!
//! A refresh reads the credential from the session, asks the gateway for fresh
//! data, and overwrites the snapshot only when the fetch succeeded. On failure
//! the previous snapshot stays exactly as it was.

use store::{GradesSnapshot, KvStore, SessionStore, TaskSnapshot};

use crate::backend::Backend;
use crate::error::GatewayError;
use crate::gateway::Gateway;

fn credential<S: KvStore>(session: &SessionStore<S>) -> Result<String, GatewayError> {
    session
        .credential()
        .ok_or_else(|| GatewayError::Auth("not signed in".to_string()))
}

/// Fetch grades and replace the cached snapshot.
pub async fn refresh_grades<B: Backend, S: KvStore>(
    gateway: &Gateway<B>,
    session: &SessionStore<S>,
) -> Result<GradesSnapshot, GatewayError> {
    let token = credential(session)?;
    let grades = gateway.fetch_grades(&token).await?;
    session.save_grades(&grades);
    Ok(grades)
}

/// Cached grades, fetched and saved only when nothing is cached yet.
pub async fn load_grades<B: Backend, S: KvStore>(
    gateway: &Gateway<B>,
    session: &SessionStore<S>,
) -> Result<GradesSnapshot, GatewayError> {
    match session.grades() {
        Some(cached) => Ok(cached),
        None => refresh_grades(gateway, session).await,
    }
}

/// Generate tasks and replace the cached snapshot.
pub async fn refresh_tasks<B: Backend, S: KvStore>(
    gateway: &Gateway<B>,
    session: &SessionStore<S>,
) -> Result<TaskSnapshot, GatewayError> {
    let token = credential(session)?;
    let tasks = gateway.generate_tasks(&token).await?;
    session.save_tasks(&tasks);
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use store::session::{GRADES_KEY, TASKS_KEY};
    use store::MemoryStore;

    use super::*;
    use crate::retry::RetryPolicy;
    use crate::test_support::{status, unreachable, ScriptedBackend};

    fn gateway(backend: ScriptedBackend) -> Gateway<ScriptedBackend> {
        Gateway::new(backend, RetryPolicy::new(3, Duration::ZERO))
    }

    fn signed_in() -> SessionStore<MemoryStore> {
        let session = SessionStore::new(MemoryStore::new());
        session.sign_in("token-abc", "u-1");
        session
    }

    #[tokio::test]
    async fn test_refresh_grades_saves_snapshot() {
        let session = signed_in();
        let gw = gateway(ScriptedBackend::new().then(Ok(json!({
            "courses_with_graded_assignments": [
                {"course_name": "Chemistry", "graded_assignments": [
                    {"name": "Lab 1", "submission_score": 18.0, "points_possible": 20.0}
                ]}
            ]
        }))));

        let grades = refresh_grades(&gw, &session).await.unwrap();
        assert_eq!(grades[0].name, "Chemistry");
        assert_eq!(session.grades(), Some(grades));
        assert_eq!(
            gw.backend().calls()[0].body,
            Some(json!({"api_key": "token-abc"}))
        );
    }

    #[tokio::test]
    async fn test_failed_grades_refresh_keeps_cache_bytes() {
        let session = signed_in();
        session.save_grades(&vec![store::Course {
            name: "History".to_string(),
            assignments: vec![],
        }]);
        let before = session.raw(GRADES_KEY);

        let gw = gateway(ScriptedBackend::new().then(status(500, "Canvas timeout")));
        let err = refresh_grades(&gw, &session).await.unwrap_err();

        assert!(matches!(err, GatewayError::Fetch(_)));
        assert_eq!(session.raw(GRADES_KEY), before);
    }

    #[tokio::test]
    async fn test_failed_tasks_refresh_keeps_cache_bytes() {
        let session = signed_in();
        let gw = gateway(
            ScriptedBackend::new()
                .then(Ok(json!({"tasks": [
                    {"task": "Outline essay", "course": "Writing", "description": "", "time_estimate": "30 minutes", "due_date": "2024-10-02T23:59:00Z"}
                ]})))
                .then(unreachable()),
        );

        refresh_tasks(&gw, &session).await.unwrap();
        let before = session.raw(TASKS_KEY);
        assert!(before.is_some());

        let err = refresh_tasks(&gw, &session).await.unwrap_err();
        assert!(matches!(err, GatewayError::Fetch(_)));
        assert_eq!(session.raw(TASKS_KEY), before);
        assert_eq!(gw.backend().calls()[0].body, Some(json!({"apiKey": "token-abc"})));
    }

    #[tokio::test]
    async fn test_refresh_replaces_rather_than_merges() {
        let session = signed_in();
        let gw = gateway(
            ScriptedBackend::new()
                .then(Ok(json!({"courses_with_graded_assignments": [
                    {"course_name": "A", "graded_assignments": []},
                    {"course_name": "B", "graded_assignments": []}
                ]})))
                .then(Ok(json!({"courses_with_graded_assignments": [
                    {"course_name": "C", "graded_assignments": []}
                ]}))),
        );

        refresh_grades(&gw, &session).await.unwrap();
        refresh_grades(&gw, &session).await.unwrap();

        let names: Vec<_> = session.grades().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[tokio::test]
    async fn test_load_grades_uses_cache() {
        let session = signed_in();
        session.save_grades(&vec![store::Course {
            name: "History".to_string(),
            assignments: vec![],
        }]);
        let gw = gateway(ScriptedBackend::new().always(unreachable()));

        let grades = load_grades(&gw, &session).await.unwrap();
        assert_eq!(grades[0].name, "History");
        assert_eq!(gw.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn test_load_grades_fetches_when_empty() {
        let session = signed_in();
        let gw = gateway(ScriptedBackend::new().then(Ok(json!({
            "courses_with_graded_assignments": [
                {"course_name": "Physics", "graded_assignments": []}
            ]
        }))));

        load_grades(&gw, &session).await.unwrap();
        let again = load_grades(&gw, &session).await.unwrap();
        assert_eq!(again[0].name, "Physics");
        assert_eq!(gw.backend().call_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_without_session_skips_network() {
        let session = SessionStore::new(MemoryStore::new());
        let gw = gateway(ScriptedBackend::new());

        assert!(matches!(
            refresh_grades(&gw, &session).await,
            Err(GatewayError::Auth(_))
        ));
        assert!(matches!(
            refresh_tasks(&gw, &session).await,
            Err(GatewayError::Auth(_))
        ));
        assert_eq!(gw.backend().call_count(), 0);
    }
}
