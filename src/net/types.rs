//! Wire DTOs and errors for the REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON (and Mongo-style `_id`) so
//! serde does the renaming once here. Lenient number handling matches what the
//! server actually sends: counters sometimes arrive as numeric strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors produced at the REST boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No credential was stored, so no request was sent.
    #[error("no authentication token found")]
    MissingToken,

    /// The transport failed before a response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The server rejected the credential (401/403).
    #[error("unauthorized: status {status}")]
    Unauthorized { status: u16 },

    /// The server returned another non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not have the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The envelope carried `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message suitable for a form banner, preferring the server's wording.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected(message) if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// User object inside the `/auth/profile` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub bio: String,
}

/// Body of `PUT /auth/profile`. Only `Some` fields are sent.
///
/// `profile_photo: Some(None)` serializes as `null`, which asks the server to
/// drop the current photo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<Option<String>>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A blog post row as listed by `/blogs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default = "draft_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /blogs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// Category id; omitted when none is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-separated tag list.
    pub tags: String,
    /// `draft` or `published`.
    pub status: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// Aggregate counters from `/blogs/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub total_blogs: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub published_blogs: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub draft_blogs: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub total_views: u64,
}

/// A blog category from `/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default = "untitled")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "blogCount", deserialize_with = "deserialize_lenient_u64")]
    pub post_count: u64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default = "default_icon", deserialize_with = "deserialize_icon_id")]
    pub icon: u64,
}

fn untitled() -> String {
    "Untitled".to_owned()
}

fn draft_status() -> String {
    "draft".to_owned()
}

fn default_icon() -> u64 {
    1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Accept numbers or numeric strings; anything else counts as zero.
fn deserialize_lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_u64(&value).unwrap_or(0))
}

/// Icon ids start at 1; zero or garbage selects the first palette entry.
fn deserialize_icon_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_u64(&value).filter(|id| *id > 0).unwrap_or_else(default_icon))
}
