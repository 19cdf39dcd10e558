//! Scripted doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use tokio::sync::oneshot;

use crate::api::AuthApi;
use crate::controller::{Notice, SessionHost, SessionSnapshot};
use crate::error::AuthError;
use crate::types::{AuthResponse, HealthResponse, LoginRequest, RegisterRequest, UserProfile};

pub(crate) fn profile(id: &str, first_name: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Doe".to_owned(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: None,
        role: "user".to_owned(),
    }
}

pub(crate) fn issued(token: &str, message: Option<&str>) -> AuthResponse {
    AuthResponse {
        token: Some(token.to_owned()),
        message: message.map(str::to_owned),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Login(String),
    Register(String),
    Profile(String),
    Health,
}

/// A profile reply either available immediately or released later through a
/// oneshot, so tests can interleave other operations with the fetch.
pub(crate) enum ProfileReply {
    Ready(Result<UserProfile, AuthError>),
    Gated(oneshot::Receiver<Result<UserProfile, AuthError>>),
}

/// Auth API that replays queued responses. An empty queue answers with a
/// network error.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    login: RefCell<VecDeque<Result<AuthResponse, AuthError>>>,
    register: RefCell<VecDeque<Result<AuthResponse, AuthError>>>,
    profile: RefCell<VecDeque<ProfileReply>>,
    health: RefCell<VecDeque<Result<HealthResponse, AuthError>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on_login(self, reply: Result<AuthResponse, AuthError>) -> Self {
        self.login.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn on_register(self, reply: Result<AuthResponse, AuthError>) -> Self {
        self.register.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn on_profile(self, reply: Result<UserProfile, AuthError>) -> Self {
        self.profile.borrow_mut().push_back(ProfileReply::Ready(reply));
        self
    }

    /// Queue a profile reply that resolves only when the returned sender fires.
    pub(crate) fn on_profile_gated(&self) -> oneshot::Sender<Result<UserProfile, AuthError>> {
        let (tx, rx) = oneshot::channel();
        self.profile.borrow_mut().push_back(ProfileReply::Gated(rx));
        tx
    }

    pub(crate) fn on_health(self, reply: Result<HealthResponse, AuthError>) -> Self {
        self.health.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn profile_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Profile(_)))
            .count()
    }
}

impl AuthApi for ScriptedApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.calls.borrow_mut().push(Call::Login(request.email.clone()));
        let reply = self.login.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(AuthError::network()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.calls.borrow_mut().push(Call::Register(request.email.clone()));
        let reply = self.register.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(AuthError::network()))
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        self.calls.borrow_mut().push(Call::Profile(token.to_owned()));
        let reply = self.profile.borrow_mut().pop_front();
        match reply {
            Some(ProfileReply::Ready(reply)) => reply,
            Some(ProfileReply::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(AuthError::network())),
            None => Err(AuthError::network()),
        }
    }

    async fn health(&self) -> Result<HealthResponse, AuthError> {
        self.calls.borrow_mut().push(Call::Health);
        let reply = self.health.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(AuthError::network()))
    }
}

/// Host that records everything the controller emits.
#[derive(Default)]
pub(crate) struct RecordingHost {
    pub(crate) snapshots: RefCell<Vec<SessionSnapshot>>,
    pub(crate) notices: RefCell<Vec<Notice>>,
    pub(crate) navigations: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub(crate) fn last_snapshot(&self) -> Option<SessionSnapshot> {
        self.snapshots.borrow().last().cloned()
    }

    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl SessionHost for RecordingHost {
    fn publish(&self, snapshot: &SessionSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }
}
