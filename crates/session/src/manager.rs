//! Session lifecycle orchestration
//!
//! One [`SessionManager`] exists per tab. Views never inspect the token store
//! or timers themselves: they call [`SessionManager::ensure_valid_session`]
//! (or one of the fetch helpers built on it) and react to the returned
//! [`SessionError`].
//!
//! Ordering: a successful login or refresh persists the token and re-arms
//! the expiry timer before control returns to the caller, so a valid session
//! is never left without a scheduled expiry. A logout issued while a login
//! or refresh is in flight wins; the late token is dropped.

use crate::api::AuthApi;
use crate::clock::{Clock, SystemClock};
use crate::error::{SessionError, SessionResult};
use crate::scheduler::ExpiryScheduler;
use crate::session::{LogoutReason, Session};
use crate::store::SessionStore;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use warden_core::{LoginRequest, RegisterRequest, User};
use warden_http::ClientError;

#[cfg(target_arch = "wasm32")]
use crate::{
    config::SessionConfig, scheduler::BrowserExpiryScheduler, store::BrowserSessionStore,
};
#[cfg(target_arch = "wasm32")]
use warden_http::PublicClient;

/// Handle returned by [`SessionManager::on_logged_out`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(LogoutReason)>;

struct Inner<A: AuthApi, S: SessionStore, E: ExpiryScheduler, C: Clock> {
    api: A,
    store: S,
    scheduler: E,
    clock: C,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
    /// Bumped by logout; a request that started in an earlier generation
    /// must not install or clear anything when it completes
    generation: Cell<u64>,
}

impl<A: AuthApi, S: SessionStore, E: ExpiryScheduler, C: Clock> Inner<A, S, E, C> {
    /// Expiry timer callback for the session holding `token`
    fn expire(&self, token: &str) {
        if let Some(stored) = self.store.load() {
            if stored.token != token {
                tracing::debug!("ignoring expiry of a superseded token");
                return;
            }
        }

        self.store.clear();
        tracing::info!("session expired");
        self.notify(LogoutReason::Expired);
    }

    fn superseded(&self, generation: u64) -> bool {
        self.generation.get() != generation
    }

    fn end_session(&self) {
        self.scheduler.cancel();
        self.store.clear();
    }

    fn notify(&self, reason: LogoutReason) {
        // Listeners may register or remove listeners while being called
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(reason);
        }
    }
}

impl<A: AuthApi, S: SessionStore, E: ExpiryScheduler, C: Clock> Drop for Inner<A, S, E, C> {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

/// Tab-wide session lifecycle manager
///
/// Cheap to clone; clones share the same session. When the last clone is
/// dropped the pending expiry timer is cancelled.
pub struct SessionManager<A, S, E, C = SystemClock>
where
    A: AuthApi,
    S: SessionStore,
    E: ExpiryScheduler,
    C: Clock,
{
    inner: Rc<Inner<A, S, E, C>>,
}

impl<A, S, E, C> Clone for SessionManager<A, S, E, C>
where
    A: AuthApi,
    S: SessionStore,
    E: ExpiryScheduler,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A, S, E, C> PartialEq for SessionManager<A, S, E, C>
where
    A: AuthApi,
    S: SessionStore,
    E: ExpiryScheduler,
    C: Clock,
{
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A, S, E, C> SessionManager<A, S, E, C>
where
    A: AuthApi + 'static,
    S: SessionStore + 'static,
    E: ExpiryScheduler + 'static,
    C: Clock + 'static,
{
    pub fn new(api: A, store: S, scheduler: E, clock: C) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                store,
                scheduler,
                clock,
                listeners: RefCell::default(),
                next_listener: Cell::new(0),
                generation: Cell::new(0),
            }),
        }
    }

    /// Exchange credentials for a session
    ///
    /// A rejected attempt leaves any existing session exactly as it was.
    /// A logout while the request is in flight wins: the issued token is
    /// discarded and `ExpiredRefresh` is returned.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let generation = self.inner.generation.get();

        let response = self.inner.api.login(&request).await.map_err(|err| {
            tracing::debug!(error = %err, "login failed");
            SessionError::from_login(err)
        })?;

        let session = Session::from_token(response.token).map_err(|err| {
            tracing::warn!(error = %err, "login returned an unusable token");
            SessionError::UnusableToken(err)
        })?;

        if self.inner.superseded(generation) {
            tracing::debug!("logged out while signing in, discarding token");
            return Err(SessionError::ExpiredRefresh);
        }

        self.install(&session)?;
        tracing::info!(
            subject = session.subject().unwrap_or("-"),
            role = %session.role(),
            expires_at = session.expires_at_millis(),
            "logged in"
        );
        Ok(session)
    }

    /// Create an account; the current session is not touched
    ///
    /// Returns the service's confirmation message, if it sent one.
    pub async fn register(&self, request: &RegisterRequest) -> SessionResult<Option<String>> {
        let response = self
            .inner
            .api
            .register(request)
            .await
            .map_err(SessionError::from_register)?;

        tracing::info!("registration accepted");
        Ok(response.message)
    }

    /// A usable session, refreshing silently when the stored one is missing
    /// or expired
    ///
    /// `Err(SessionError::ExpiredRefresh)` means the user has to log in again;
    /// the store is cleared and no timer is left armed in that case.
    pub async fn ensure_valid_session(&self) -> SessionResult<Session> {
        if let Some(session) = self.current_session() {
            // Re-arm in case the previous timer was lost with an earlier manager
            self.arm(&session);
            return Ok(session);
        }

        self.refresh().await
    }

    /// The stored session if it is still valid; never refreshes
    pub fn current_session(&self) -> Option<Session> {
        let stored = self.inner.store.load()?;

        let session = match Session::from_token(stored.token) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "stored token is unreadable");
                return None;
            }
        };

        if session.expires_at_millis() != stored.expires_at_millis {
            tracing::debug!("stored expiry disagrees with the token, using the token's claim");
        }

        session
            .is_valid_at(self.inner.clock.now_millis())
            .then_some(session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Obtain a new token through `/refresh-token`
    pub async fn refresh(&self) -> SessionResult<Session> {
        tracing::debug!("attempting silent refresh");
        let generation = self.inner.generation.get();

        let refreshed = match self.inner.api.refresh_token().await {
            Ok(response) => match Session::from_token(response.token) {
                Ok(session) if session.is_valid_at(self.inner.clock.now_millis()) => Ok(session),
                Ok(_) => {
                    tracing::warn!("refresh returned an already expired token");
                    Err(SessionError::ExpiredRefresh)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "refresh returned an unusable token");
                    Err(SessionError::ExpiredRefresh)
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "silent refresh failed");
                Err(SessionError::from_refresh(&err))
            }
        };

        if self.inner.superseded(generation) {
            tracing::debug!("logged out while refreshing, discarding result");
            return Err(SessionError::ExpiredRefresh);
        }

        match refreshed {
            Ok(session) => {
                self.install(&session)?;
                tracing::info!(expires_at = session.expires_at_millis(), "session refreshed");
                Ok(session)
            }
            Err(err) => {
                // A refresh that overlapped this one may already have rotated
                // the refresh cookie and stored a fresh token
                if let Some(session) = self.current_session() {
                    tracing::debug!("using session installed by a concurrent refresh");
                    self.arm(&session);
                    return Ok(session);
                }
                self.inner.end_session();
                Err(err)
            }
        }
    }

    /// Clear the session and cancel its expiry; safe to call repeatedly
    pub fn logout(&self) {
        let had_session = self.inner.store.load().is_some() || self.inner.scheduler.is_armed();
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.end_session();

        if had_session {
            tracing::info!("logged out");
            self.inner.notify(LogoutReason::Explicit);
        }
    }

    /// `GET /profile` with a valid session
    pub async fn fetch_profile(&self) -> SessionResult<User> {
        let session = self.ensure_valid_session().await?;
        let generation = self.inner.generation.get();
        self.inner
            .api
            .profile(session.token())
            .await
            .map_err(|err| self.protected_failure(err, generation))
    }

    /// `GET /admin` with a valid session; `Forbidden` for non-admins
    pub async fn fetch_admin(&self) -> SessionResult<User> {
        let session = self.ensure_valid_session().await?;
        let generation = self.inner.generation.get();
        self.inner
            .api
            .admin(session.token())
            .await
            .map_err(|err| self.protected_failure(err, generation))
    }

    /// Call `listener` whenever the session ends by expiry or logout
    pub fn on_logged_out(&self, listener: impl Fn(LogoutReason) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Persist `session` and arm its expiry
    fn install(&self, session: &Session) -> SessionResult<()> {
        self.inner
            .store
            .save(session.token(), session.expires_at_millis())?;
        self.arm(session);
        Ok(())
    }

    fn arm(&self, session: &Session) {
        let inner: Weak<Inner<A, S, E, C>> = Rc::downgrade(&self.inner);
        let token = session.token().to_string();

        self.inner.scheduler.arm(
            session.expires_at_millis(),
            Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner.expire(&token);
                }
            }),
        );
        tracing::debug!(
            expires_at = session.expires_at_millis(),
            remaining_ms = session.remaining_millis(self.inner.clock.now_millis()),
            "session expiry armed"
        );
    }

    fn protected_failure(&self, err: ClientError, generation: u64) -> SessionError {
        let err = SessionError::from_protected(err);
        if err.requires_reauthentication() && !self.inner.superseded(generation) {
            tracing::warn!("auth service no longer accepts the session token");
            self.inner.end_session();
        }
        err
    }
}

/// The manager as wired in the browser
#[cfg(target_arch = "wasm32")]
pub type BrowserSessionManager =
    SessionManager<PublicClient, BrowserSessionStore, BrowserExpiryScheduler, SystemClock>;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionManager {
    pub fn browser(client: PublicClient, config: SessionConfig) -> Self {
        Self::new(
            client,
            BrowserSessionStore::new(config),
            BrowserExpiryScheduler::new(),
            SystemClock,
        )
    }
}
