//! Wire DTOs for the `/auth` and `/api/v1/greetings` endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Request bodies are decoded straight from submitted form fields,
//! so every request field is a string or a list of strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as returned by `GET /auth` and `POST /auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Login name; also the `author` of greetings this user writes.
    pub username: String,
    /// Company the user belongs to.
    pub company_id: String,
    /// Admins may delete any greeting within their company.
    #[serde(default)]
    pub is_admin: bool,
}

/// A posted message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub message: String,
    /// Username of the writer.
    pub author: String,
    /// Company id of the writer.
    pub company: String,
}

impl Greeting {
    /// Build the list entry for a greeting the current user just created.
    pub fn authored(id: i64, message: String, user: &AuthUser) -> Self {
        Self {
            id,
            message,
            author: user.username.clone(),
            company: user.company_id.clone(),
        }
    }

    /// Whether `user` is allowed to delete this greeting: same company, and
    /// either the author or an admin.
    pub fn can_be_deleted_by(&self, user: Option<&AuthUser>) -> bool {
        user.is_some_and(|user| {
            user.company_id == self.company && (user.is_admin || user.username == self.author)
        })
    }

    /// Footer line shown under the message.
    pub fn byline(&self) -> String {
        format!("By {} in {}", self.author, self.company)
    }
}

/// Body of `POST /auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub company_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body of `POST /api/v1/greetings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGreetingRequest {
    pub message: String,
}

/// Deserialize an integer id that may arrive as `12` or `12.0`.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
