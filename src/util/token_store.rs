//! Bearer-token persistence with a fixed expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf dependency of the session lifecycle. The browser build keeps the token
//! in a same-site cookie so it survives reloads; the expiry is enforced by the
//! cookie jar itself, not re-checked here.
//!
//! TRADE-OFFS
//! ==========
//! Operations are total: a missing document or a refused cookie write is
//! logged and otherwise ignored, leaving the session to fail closed on the
//! next read.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Date format used by the cookie `expires` attribute.
const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const EPOCH_COOKIE_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Bytes that may not appear raw in a cookie value.
const COOKIE_VALUE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b',').add(b';').add(b'\\').add(b'%');

/// Persistence medium for the single current credential.
pub trait TokenStore {
    /// Persist `value` with expiry `now + ttl`, replacing any current value.
    fn set_token(&self, value: &str);

    /// Current value, or `None` when absent or expired.
    fn get_token(&self) -> Option<String>;

    /// Drop the current value. Calling it again is a no-op.
    fn remove_token(&self);
}

/// `document.cookie` assignment that stores `value` until `expires`.
///
/// The value is percent-encoded so separators survive the round trip through
/// [`find_cookie`].
pub fn set_cookie_header(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    let value = utf8_percent_encode(value, COOKIE_VALUE);
    format!("{name}={value};expires={};path=/;SameSite=Strict", expires.format(COOKIE_DATE_FORMAT))
}

/// `now + ttl`, saturating at the latest representable instant.
pub fn expiry_after(now: DateTime<Utc>, ttl: TimeDelta) -> DateTime<Utc> {
    now.checked_add_signed(ttl).unwrap_or_else(|| {
        log::warn!("token store: ttl {ttl} overflows, clamping expiry");
        DateTime::<Utc>::MAX_UTC
    })
}

/// `document.cookie` assignment that evicts `name` immediately.
pub fn expired_cookie_header(name: &str) -> String {
    format!("{name}=;expires={EPOCH_COOKIE_DATE};path=/;SameSite=Strict")
}

/// Find `name` in a `document.cookie` string and decode its value. Empty or
/// undecodable values count as absent.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .filter(|value| !value.is_empty())
        .and_then(|value| percent_decode_str(value).decode_utf8().ok())
        .map(std::borrow::Cow::into_owned)
}

// =============================================================================
// COOKIE STORE
// =============================================================================

/// Token store backed by a browser cookie.
///
/// Outside the browser (`csr` disabled) there is no cookie jar, so the store
/// never holds a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieTokenStore {
    name: String,
    ttl: TimeDelta,
}

impl CookieTokenStore {
    pub fn new(name: impl Into<String>, ttl: TimeDelta) -> Self {
        Self { name: name.into(), ttl }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TokenStore for CookieTokenStore {
    fn set_token(&self, value: &str) {
        let header = set_cookie_header(&self.name, value, expiry_after(Utc::now(), self.ttl));
        write_document_cookie(&header);
    }

    fn get_token(&self) -> Option<String> {
        read_document_cookie().and_then(|cookies| find_cookie(&cookies, &self.name))
    }

    fn remove_token(&self) {
        write_document_cookie(&expired_cookie_header(&self.name));
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

fn read_document_cookie() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_document_cookie(header: &str) {
    #[cfg(feature = "csr")]
    {
        let written = html_document().is_some_and(|doc| doc.set_cookie(header).is_ok());
        if !written {
            log::warn!("token store: cookie write refused");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = header;
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Source of the current time for [`MemoryTokenStore`].
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Clone)]
struct StoredToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Process-local token store with the same expiry semantics as the cookie.
///
/// Clones share the same slot.
#[derive(Clone)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<StoredToken>>>,
    ttl: TimeDelta,
    clock: Clock,
}

impl MemoryTokenStore {
    pub fn new(ttl: TimeDelta) -> Self {
        Self::with_clock(ttl, Arc::new(Utc::now))
    }

    pub fn with_clock(ttl: TimeDelta, clock: Clock) -> Self {
        Self { slot: Arc::new(Mutex::new(None)), ttl, clock }
    }

    /// Expiry of the stored value, if one is present and unexpired.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.live().map(|token| token.expires_at)
    }

    fn live(&self) -> Option<StoredToken> {
        let now = (self.clock)();
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|token| token.expires_at <= now) {
            *slot = None;
        }
        slot.clone()
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("ttl", &self.ttl)
            .field("present", &self.live().is_some())
            .finish_non_exhaustive()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_token(&self, value: &str) {
        let expires_at = expiry_after((self.clock)(), self.ttl);
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(StoredToken { value: value.to_owned(), expires_at });
    }

    fn get_token(&self) -> Option<String> {
        self.live().map(|token| token.value)
    }

    fn remove_token(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
