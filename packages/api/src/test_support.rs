//! Scripted in-memory [`Backend`] for gateway tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::backend::{Backend, Upload};
use crate::error::TransportError;

/// A request the backend received.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub upload: Option<(String, Upload)>,
    pub at: tokio::time::Instant,
}

/// Replies from a queue, then from an optional repeating fallback.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    fallback: Option<Result<Value, TransportError>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one reply.
    pub fn then(self, reply: Result<Value, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Reply used once the queue is empty.
    pub fn always(mut self, reply: Result<Value, TransportError>) -> Self {
        self.fallback = Some(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn reply(&self, call: Call) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| Err(TransportError::Unreachable("no scripted reply".to_string())))
    }
}

impl Backend for ScriptedBackend {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        self.reply(Call {
            method: "GET",
            path: path.to_string(),
            body: None,
            upload: None,
            at: tokio::time::Instant::now(),
        })
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.reply(Call {
            method: "POST",
            path: path.to_string(),
            body: Some(body),
            upload: None,
            at: tokio::time::Instant::now(),
        })
    }

    async fn post_file(
        &self,
        path: &str,
        field: &str,
        upload: Upload,
    ) -> Result<Value, TransportError> {
        self.reply(Call {
            method: "POST",
            path: path.to_string(),
            body: None,
            upload: Some((field.to_string(), upload)),
            at: tokio::time::Instant::now(),
        })
    }
}

pub fn unreachable() -> Result<Value, TransportError> {
    Err(TransportError::Unreachable("connection refused".to_string()))
}

pub fn status(code: u16, message: &str) -> Result<Value, TransportError> {
    Err(TransportError::Status {
        status: code,
        message: message.to_string(),
    })
}
