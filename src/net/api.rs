//! REST API client for the blog backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports [`ApiError::Unavailable`]; everything
//! above the transport (status mapping, envelope parsing, shape normalization)
//! is plain Rust and covered by tests.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint funnels through `interpret_response` and one parse function,
//! so callers only ever see a typed value or an [`ApiError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{
    ApiError, BlogStats, BlogSummary, Category, LoginRequest, NewAccount, NewBlog, ProfileUpdate, ProfileUser,
};

const PROFILE_PATH: &str = "/auth/profile";
const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const BLOGS_PATH: &str = "/blogs";
const BLOG_STATS_PATH: &str = "/blogs/stats";
const CATEGORIES_PATH: &str = "/categories";

/// Session-related calls the session context depends on.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// `GET /auth/profile` with the bearer credential.
    async fn fetch_profile(&self, token: &str) -> Result<ProfileUser, ApiError>;

    /// `POST /auth/login`, returning the issued token.
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    /// `POST /auth/register`, returning a token when the server issues one.
    async fn register(&self, account: &NewAccount) -> Result<Option<String>, ApiError>;

    /// `PUT /auth/profile` with the bearer credential.
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<(), ApiError>;
}

/// Authenticated content writes.
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    /// `POST /blogs` with the bearer credential.
    async fn create_blog(&self, token: &str, blog: &NewBlog) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

/// HTTP implementation of the backend API rooted at `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Most recent posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-2xx status, or an
    /// unrecognized body shape.
    pub async fn recent_blogs(&self, limit: usize) -> Result<Vec<BlogSummary>, ApiError> {
        let body = self.execute(Method::Get, &blogs_path(Some(limit)), None, None).await?;
        parse_list(&body, "blogs")
    }

    /// Every post visible to the admin.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::recent_blogs`].
    pub async fn blogs(&self) -> Result<Vec<BlogSummary>, ApiError> {
        let body = self.execute(Method::Get, &blogs_path(None), None, None).await?;
        parse_list(&body, "blogs")
    }

    /// Dashboard summary counters.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::recent_blogs`].
    pub async fn blog_stats(&self) -> Result<BlogStats, ApiError> {
        let body = self.execute(Method::Get, BLOG_STATS_PATH, None, None).await?;
        parse_stats(&body)
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::recent_blogs`].
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.execute(Method::Get, CATEGORIES_PATH, None, None).await?;
        parse_list(&body, "categories")
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        payload: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            };
            let builder = match token {
                Some(token) => builder.header("Authorization", &bearer(token)),
                None => builder,
            };
            let request = match payload {
                Some(payload) => builder.json(&payload),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            if !(200..300).contains(&status) {
                log::warn!("api: {method:?} {url} -> {status}");
            }
            interpret_response(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, token, payload);
            Err(ApiError::Unavailable)
        }
    }
}

impl SessionApi for HttpApi {
    async fn fetch_profile(&self, token: &str) -> Result<ProfileUser, ApiError> {
        let body = self.execute(Method::Get, PROFILE_PATH, Some(token), None).await?;
        parse_profile(&body)
    }

    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.execute(Method::Post, LOGIN_PATH, None, Some(payload)).await?;
        parse_token(&body)?.ok_or_else(|| ApiError::Decode("login response carried no token".to_owned()))
    }

    async fn register(&self, account: &NewAccount) -> Result<Option<String>, ApiError> {
        let payload = serde_json::to_value(account).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.execute(Method::Post, REGISTER_PATH, None, Some(payload)).await?;
        parse_token(&body)
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        let payload = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(Method::Put, PROFILE_PATH, Some(token), Some(payload)).await?;
        Ok(())
    }
}

impl BlogApi for HttpApi {
    async fn create_blog(&self, token: &str, blog: &NewBlog) -> Result<(), ApiError> {
        let payload = serde_json::to_value(blog).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(Method::Post, BLOGS_PATH, Some(token), Some(payload)).await?;
        Ok(())
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn blogs_path(limit: Option<usize>) -> String {
    match limit {
        Some(limit) => format!("{BLOGS_PATH}?limit={limit}"),
        None => BLOGS_PATH.to_owned(),
    }
}

fn envelope_message(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_owned)
}

/// Map status + raw body into the decoded JSON body or an error. An empty
/// success body (e.g. `204 No Content`) decodes to `Value::Null`.
fn interpret_response(status: u16, text: &str) -> Result<Value, ApiError> {
    let parsed = serde_json::from_str::<Value>(text);

    if matches!(status, 401 | 403) {
        return Err(ApiError::Unauthorized { status });
    }
    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(envelope_message)
            .unwrap_or_else(|| "request failed".to_owned());
        return Err(ApiError::Status { status, message });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let body = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = envelope_message(&body).unwrap_or_else(|| "request rejected".to_owned());
        return Err(ApiError::Rejected(message));
    }
    Ok(body)
}

fn parse_profile(body: &Value) -> Result<ProfileUser, ApiError> {
    let user = body
        .pointer("/data/user")
        .or_else(|| body.get("user"))
        .ok_or_else(|| ApiError::Decode("profile response has no user object".to_owned()))?;
    serde_json::from_value(user.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_token(body: &Value) -> Result<Option<String>, ApiError> {
    let token = body.pointer("/data/token").or_else(|| body.get("token"));
    match token {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(token)) if !token.is_empty() => Ok(Some(token.clone())),
        Some(other) => Err(ApiError::Decode(format!("unexpected token value: {other}"))),
    }
}

/// Locate a list under `key` in any of the shapes the backend produces:
/// `{data: {key: [..]}}`, `{key: [..]}`, `{data: [..]}`, or a bare array.
fn find_list<'a>(body: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    if let Some(items) = body.as_array() {
        return Some(items);
    }
    let data = body.get("data");
    data.and_then(|data| data.get(key))
        .or_else(|| body.get(key))
        .or(data)
        .and_then(Value::as_array)
}

fn parse_list<T>(body: &Value, key: &str) -> Result<Vec<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let items = find_list(body, key).ok_or_else(|| ApiError::Decode(format!("response has no {key} list")))?;
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

fn parse_stats(body: &Value) -> Result<BlogStats, ApiError> {
    let stats = body
        .pointer("/data/stats")
        .or_else(|| body.get("stats"))
        .or_else(|| body.get("data"))
        .unwrap_or(body);
    if !stats.is_object() {
        return Err(ApiError::Decode("stats response is not an object".to_owned()));
    }
    serde_json::from_value(stats.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}
