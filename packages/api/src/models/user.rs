//! # Validated user
//!
//! `POST /validate-api-key` answers with `{"user": ..., ...}`. Depending on the
//! backend revision the `user` field is a bare id string, a numeric id, or a
//! profile object carrying `id` and `name`. [`ValidatedUser::from_response`]
//! accepts all three and reduces them to the string id the session stores.
//! A profile without an `id` falls back to its `name`.

use serde::Deserialize;
use serde_json::Value;

/// The identity returned by a successful credential validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedUser {
    pub user_id: String,
}

#[derive(Deserialize)]
struct ValidateResponse {
    user: UserField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserField {
    Text(String),
    Number(i64),
    Record {
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl ValidatedUser {
    /// Extract the user id from a validation response body.
    pub fn from_response(body: Value) -> Result<Self, String> {
        let response: ValidateResponse =
            serde_json::from_value(body).map_err(|e| format!("malformed validation response: {e}"))?;

        let user_id = match response.user {
            UserField::Text(id) => Some(id),
            UserField::Number(id) => Some(id.to_string()),
            UserField::Record { id, name } => match id {
                Some(Value::String(s)) => Some(s),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => name,
            },
        };

        match user_id {
            Some(id) if !id.trim().is_empty() => Ok(Self { user_id: id }),
            _ => Err("validation response carried no user id".to_string()),
        }
    }
}
