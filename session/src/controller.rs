//! Session state machine.
//!
//! DESIGN
//! ======
//! `SessionController` is the single writer of session state and the only
//! caller of the token store and the remote API. All operations take `&self`
//! so one controller can be shared by every task the UI spawns; state lives
//! in `Cell`/`RefCell` and no borrow is ever held across an `.await`.
//!
//! ORDERING
//! ========
//! Each async operation takes a generation ticket when it starts. `logout`
//! (and any newer operation) bumps the generation, and a resumed operation
//! whose ticket is no longer current drops its response on the floor. That
//! is what keeps a profile fetch that was in flight during logout from
//! resurrecting the cleared session.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::error::{AuthError, Operation};
use crate::gate::{self, HOME_ROUTE};
use crate::store::SessionStore;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back!";
const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully!";
const LOGOUT_MESSAGE: &str = "Logged out successfully!";

/// Externally visible phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Validating,
    Authenticated,
}

/// Read-only view of the session published to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub status: SessionStatus,
    pub is_authenticated: bool,
    /// True while an operation is in flight or a token is being validated.
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// Snapshot used before a controller exists (server render, first paint).
    /// Keeps access gates in their loading state instead of redirecting.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            user: None,
            status: SessionStatus::Validating,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user notification (toast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Everything the controller tells the surrounding application.
pub trait SessionHost {
    /// Called after every state change with the new snapshot.
    fn publish(&self, snapshot: &SessionSnapshot);

    /// Surface a transient notification.
    fn notify(&self, notice: Notice);

    /// Navigate to an application route.
    fn navigate(&self, path: &str);
}

/// Session record. The variant is the status, so `user` cannot exist without
/// a validated token.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Session {
    Unauthenticated,
    Validating { token: String },
    Authenticated { token: String, user: UserProfile },
}

impl Session {
    fn status(&self) -> SessionStatus {
        match self {
            Self::Unauthenticated => SessionStatus::Unauthenticated,
            Self::Validating { .. } => SessionStatus::Validating,
            Self::Authenticated { .. } => SessionStatus::Authenticated,
        }
    }

    fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Validating { token } | Self::Authenticated { token, .. } => Some(token),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InitPhase {
    Pending,
    Running,
    Done,
}

/// Owner of the current session. Construct once per application lifetime.
pub struct SessionController<S, A, H> {
    store: S,
    api: A,
    host: H,
    session: RefCell<Session>,
    busy: Cell<bool>,
    generation: Cell<u64>,
    init: Cell<InitPhase>,
    return_to: RefCell<Option<String>>,
}

impl<S, A, H> SessionController<S, A, H>
where
    S: SessionStore,
    A: AuthApi,
    H: SessionHost,
{
    /// Build the controller and publish the initial snapshot: `Validating`
    /// when the store already holds a token, `Unauthenticated` otherwise.
    pub fn new(store: S, api: A, host: H) -> Self {
        let session = match store.get() {
            Some(token) => Session::Validating { token },
            None => Session::Unauthenticated,
        };
        let controller = Self {
            store,
            api,
            host,
            session: RefCell::new(session),
            busy: Cell::new(false),
            generation: Cell::new(0),
            init: Cell::new(InitPhase::Pending),
            return_to: RefCell::new(None),
        };
        controller.publish();
        controller
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.borrow();
        let status = session.status();
        SessionSnapshot {
            user: session.user().cloned(),
            status,
            is_authenticated: status == SessionStatus::Authenticated,
            is_loading: self.busy.get() || status == SessionStatus::Validating,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.borrow().status()
    }

    /// Bearer token of the current session, validated or not.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.borrow().token().map(str::to_owned)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Remember where to send the user after the next successful login or
    /// signup. Returns `false` (and forgets nothing) for unsafe paths.
    pub fn remember_return_path(&self, path: &str) -> bool {
        match gate::sanitize_return_path(path) {
            Some(path) => {
                debug!(%path, "remembering return path");
                *self.return_to.borrow_mut() = Some(path);
                true
            }
            None => false,
        }
    }

    /// Re-validate a stored token at startup.
    ///
    /// Runs at most once; later calls return the current status untouched.
    /// Rejection of the stored token is silent apart from logging.
    pub async fn initialize(&self) -> SessionStatus {
        if self.init.get() != InitPhase::Pending {
            debug!("session already initialized");
            return self.status();
        }
        if self.busy.get() {
            // Only reachable when a login/signup began from Unauthenticated,
            // so there is no stored token left to validate.
            self.init.set(InitPhase::Done);
            return self.status();
        }
        self.init.set(InitPhase::Running);

        let Some(token) = self.store.get() else {
            self.init.set(InitPhase::Done);
            self.set_session(Session::Unauthenticated);
            info!("no stored token; session unauthenticated");
            return SessionStatus::Unauthenticated;
        };

        let ticket = self.begin();
        self.set_session(Session::Validating { token: token.clone() });
        let profile = self.api.profile(&token).await;
        self.init.set(InitPhase::Done);

        if !self.is_current(ticket) {
            debug!(generation = ticket, "discarding stale startup validation");
            return self.status();
        }

        self.busy.set(false);
        match profile {
            Ok(user) => {
                info!(user_id = %user.id, "restored session from stored token");
                self.set_session(Session::Authenticated { token, user });
            }
            Err(e) => {
                info!(error = %e, "stored token rejected; clearing session");
                self.store.clear();
                self.set_session(Session::Unauthenticated);
            }
        }
        self.status()
    }

    /// Exchange credentials for a token, validate it, and enter the app.
    ///
    /// # Errors
    ///
    /// Returns the failure that was also surfaced as an error notice, or
    /// [`AuthError::Busy`] / [`AuthError::Superseded`] which are not surfaced.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let request = LoginRequest {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };
        let ticket = self.try_begin()?;
        debug!(generation = ticket, "login started");
        let response = self.api.login(&request).await;
        self.enter_with(ticket, Operation::Login, response, LOGIN_SUCCESS_MESSAGE)
            .await
    }

    /// Register a new account and enter the app with the issued token.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn signup(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<(), AuthError> {
        let request = RegisterRequest {
            first_name: first_name.trim().to_owned(),
            last_name: last_name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
            phone: phone.map(str::trim).filter(|p| !p.is_empty()).map(str::to_owned),
        };
        let ticket = self.try_begin()?;
        debug!(generation = ticket, "signup started");
        let response = self.api.register(&request).await;
        self.enter_with(ticket, Operation::Register, response, SIGNUP_SUCCESS_MESSAGE)
            .await
    }

    /// Drop the session. Synchronous and infallible; invalidates anything in
    /// flight and always navigates home.
    pub fn logout(&self) {
        self.generation.set(self.generation.get() + 1);
        self.busy.set(false);
        self.return_to.borrow_mut().take();
        self.store.clear();

        let had_session = self.status() != SessionStatus::Unauthenticated;
        self.set_session(Session::Unauthenticated);
        if had_session {
            info!("logged out");
            self.host.notify(Notice::success(LOGOUT_MESSAGE));
        }
        self.host.navigate(HOME_ROUTE);
    }

    /// Shared tail of login and signup: store the token, validate it, and
    /// either enter `Authenticated` or roll back to `Unauthenticated`.
    async fn enter_with(
        &self,
        ticket: u64,
        op: Operation,
        response: Result<AuthResponse, AuthError>,
        default_success: &str,
    ) -> Result<(), AuthError> {
        if !self.is_current(ticket) {
            debug!(generation = ticket, "discarding stale credential exchange");
            return Err(AuthError::Superseded);
        }

        let response = match response {
            Ok(response) => response,
            Err(e) => return Err(self.fail(op, e)),
        };
        let Some(token) = response.issued_token().map(str::to_owned) else {
            warn!(?op, "auth api returned success without a token");
            return Err(self.fail(op, AuthError::Server(op.try_again_message())));
        };

        self.store.set(&token);
        self.set_session(Session::Validating { token: token.clone() });
        let profile = self.api.profile(&token).await;

        if !self.is_current(ticket) {
            debug!(generation = ticket, "discarding stale profile fetch");
            return Err(AuthError::Superseded);
        }

        self.busy.set(false);
        match profile {
            Ok(user) => {
                info!(?op, user_id = %user.id, "session established");
                self.set_session(Session::Authenticated { token, user });
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| default_success.to_owned());
                self.host.notify(Notice::success(message));
                let target = self
                    .return_to
                    .borrow_mut()
                    .take()
                    .unwrap_or_else(|| HOME_ROUTE.to_owned());
                self.host.navigate(&target);
                Ok(())
            }
            Err(e) => {
                warn!(?op, error = %e, "issued token failed validation");
                self.store.clear();
                self.set_session(Session::Unauthenticated);
                self.host.notify(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Report a credential-exchange failure. State and store are untouched.
    fn fail(&self, op: Operation, e: AuthError) -> AuthError {
        warn!(?op, kind = ?e.kind(), error = %e, "credential exchange failed");
        self.busy.set(false);
        self.publish();
        self.host.notify(Notice::error(e.to_string()));
        e
    }

    /// Credential exchanges wait for any stored token to be validated first,
    /// so a failed exchange never strands the session in `Validating`.
    fn try_begin(&self) -> Result<u64, AuthError> {
        if self.busy.get() || self.status() == SessionStatus::Validating {
            debug!("rejecting request while another is in flight");
            return Err(AuthError::Busy);
        }
        let ticket = self.begin();
        self.publish();
        Ok(ticket)
    }

    /// Start an operation: mark busy and take a fresh generation ticket.
    fn begin(&self) -> u64 {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        self.busy.set(true);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    fn set_session(&self, session: Session) {
        *self.session.borrow_mut() = session;
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.host.publish(&snapshot);
    }
}
