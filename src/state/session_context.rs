//! Session context: the single owner of [`SessionSnapshot`] transitions.
//!
//! ARCHITECTURE
//! ============
//! Constructed once at startup and handed to the UI through Leptos context.
//! Pages call the async operations here; observers (the reactive signal the
//! route guard reads) are notified synchronously after every transition.
//!
//! Results are applied in the order responses arrive. Overlapping fetches are
//! not sequenced, so the last response to land wins.

#[cfg(test)]
#[path = "session_context_test.rs"]
mod session_context_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use super::session::{SessionProfile, SessionSnapshot, SessionState};
use crate::net::api::{BlogApi, SessionApi};
use crate::net::types::{ApiError, LoginRequest, NewAccount, NewBlog, ProfileUpdate};
use crate::util::token_store::TokenStore;

/// Callback invoked with the new snapshot after each transition.
pub type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct Inner<S, A> {
    store: S,
    api: A,
    snapshot: Mutex<SessionSnapshot>,
    listeners: Mutex<Vec<Listener>>,
}

/// Cheaply clonable handle; clones share one session.
pub struct SessionContext<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for SessionContext<S, A> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S, A> SessionContext<S, A>
where
    S: TokenStore,
    A: SessionApi,
{
    pub fn new(store: S, api: A) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                api,
                snapshot: Mutex::new(SessionSnapshot::default()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn store(&self) -> &S {
        &self.inner.store
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn state(&self) -> SessionState {
        self.snapshot().state
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn loading(&self) -> bool {
        self.snapshot().loading()
    }

    pub fn user(&self) -> Option<SessionProfile> {
        self.snapshot().user().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot().error
    }

    /// Register `listener` for every later transition.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + Send + Sync + 'static) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn transition(&self, apply: impl FnOnce(&mut SessionSnapshot)) {
        let next = {
            let mut snapshot = self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
            apply(&mut snapshot);
            snapshot.clone()
        };
        let listeners = self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in &listeners {
            listener(&next);
        }
    }

    /// Resolve the initial state. No token means no network call.
    pub async fn init(&self) {
        if self.inner.store.get_token().is_none() {
            log::debug!("session: no stored token");
            self.transition(SessionSnapshot::mark_unauthenticated);
            return;
        }
        self.fetch_user().await;
    }

    /// Blocking fetch: shows `Loading`, fails closed.
    pub async fn fetch_user(&self) {
        let _ = self.establish().await;
    }

    /// Re-run [`Self::fetch_user`] if a user is currently signed in.
    pub async fn refresh_user(&self) {
        if !self.is_authenticated() {
            return;
        }
        self.fetch_user().await;
    }

    /// Refetch the profile without showing `Loading` or dropping the session
    /// on failure.
    pub async fn refresh_user_silently(&self) {
        match self.load_profile().await {
            Ok(profile) => self.transition(|snapshot| snapshot.apply_silent_result(profile)),
            Err(err) => log::warn!("session: silent refresh failed: {err}"),
        }
    }

    /// Drop the cached profile and the stored token.
    pub fn logout(&self) {
        self.inner.store.remove_token();
        self.transition(SessionSnapshot::clear);
    }

    pub fn clear_user(&self) {
        self.logout();
    }

    /// Exchange credentials for a token, then establish the session.
    ///
    /// # Errors
    ///
    /// Returns the login failure, or the profile failure if the fresh token
    /// could not be turned into a session. A failed login leaves the current
    /// state untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let token = self.inner.api.login(&request).await?;
        self.inner.store.set_token(&token);
        self.establish().await
    }

    /// Create an account; sign in immediately when the server returns a token.
    ///
    /// # Errors
    ///
    /// Returns the registration failure, or the profile failure after a token
    /// was issued.
    pub async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        match self.inner.api.register(account).await? {
            Some(token) => {
                self.inner.store.set_token(&token);
                self.establish().await
            }
            None => Ok(()),
        }
    }

    /// Save profile edits, then refresh the cached profile silently.
    ///
    /// # Errors
    ///
    /// Returns the update failure. An authorization failure also ends the
    /// session.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let api = &self.inner.api;
        self.authorized(|token| async move { api.update_profile(&token, update).await }).await?;
        self.refresh_user_silently().await;
        Ok(())
    }

    /// Run an authenticated request with the current token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without calling `request` when no
    /// token is stored. An [`ApiError::Unauthorized`] result logs the user out
    /// before it is returned.
    pub async fn authorized<T, F, Fut>(&self, request: F) -> Result<T, ApiError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self.inner.store.get_token().ok_or(ApiError::MissingToken)?;
        let result = request(token).await;
        if let Err(err) = &result {
            if err.is_unauthorized() {
                log::info!("session: credential rejected, signing out");
                self.logout();
            }
        }
        result
    }

    async fn load_profile(&self) -> Result<SessionProfile, ApiError> {
        let token = self.inner.store.get_token().ok_or(ApiError::MissingToken)?;
        let user = self.inner.api.fetch_profile(&token).await?;
        Ok(SessionProfile::from_wire(user, Utc::now()))
    }

    async fn establish(&self) -> Result<(), ApiError> {
        self.transition(SessionSnapshot::begin_blocking_fetch);
        match self.load_profile().await {
            Ok(profile) => {
                log::debug!("session: authenticated as {}", profile.id);
                self.transition(|snapshot| snapshot.apply_blocking_result(Some(profile)));
                Ok(())
            }
            Err(err) => {
                log::warn!("session: profile fetch failed: {err}");
                self.inner.store.remove_token();
                self.transition(|snapshot| snapshot.apply_blocking_result(None));
                Err(err)
            }
        }
    }
}

impl<S, A> SessionContext<S, A>
where
    S: TokenStore,
    A: SessionApi + BlogApi,
{
    /// Create a post with the current credential.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::authorized`]: a missing token fails without a
    /// request, and an authorization failure ends the session.
    pub async fn create_blog(&self, blog: &NewBlog) -> Result<(), ApiError> {
        let api = &self.inner.api;
        self.authorized(|token| async move { api.create_blog(&token, blog).await }).await
    }
}
