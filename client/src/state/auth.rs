//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthContext` is provided under the router by `AuthProvider`. Route
//! guards, the navbar and the auth forms read `snapshot` and call the
//! operations here; only the wrapped `SessionController` ever writes it.
//!
//! The controller exists only in the browser. On the server the snapshot stays
//! at `SessionSnapshot::pending()`, so access gates render their loading state
//! and hydration starts from the same markup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::SessionSnapshot;

use crate::state::notices::NoticeState;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::reactive::owner::LocalStorage;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use session::{Notice, SessionController, SessionHost};

#[cfg(feature = "hydrate")]
use crate::net::api::HttpAuthApi;
#[cfg(feature = "hydrate")]
use crate::util::token_store::LocalStorageStore;

/// Signup form contents after client-side validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[cfg(feature = "hydrate")]
type BrowserController = SessionController<LocalStorageStore, HttpAuthApi, BrowserHost>;

/// Copyable handle to the session, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub snapshot: RwSignal<SessionSnapshot>,
    pub notices: RwSignal<NoticeState>,
    #[cfg(feature = "hydrate")]
    controller: StoredValue<Option<Rc<BrowserController>>, LocalStorage>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(SessionSnapshot::pending()),
            notices: RwSignal::new(NoticeState::default()),
            #[cfg(feature = "hydrate")]
            controller: StoredValue::new_local(None),
        }
    }

    /// Build the controller, then validate any stored token and probe API
    /// health in the background. Later calls are no-ops.
    #[cfg(feature = "hydrate")]
    pub fn start<F>(self, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        if self.controller.with_value(Option::is_some) {
            return;
        }
        let host = BrowserHost {
            snapshot: self.snapshot,
            notices: self.notices,
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        };
        let api = HttpAuthApi::new(crate::config::api_base_url());
        let controller = Rc::new(SessionController::new(LocalStorageStore, api, host));
        self.controller.set_value(Some(Rc::clone(&controller)));

        leptos::task::spawn_local(async move {
            controller.initialize().await;
            session::api::probe_health(controller.api()).await;
        });
    }

    pub fn login(self, email: String, password: String) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller() {
                leptos::task::spawn_local(async move {
                    let _ = controller.login(&email, &password).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    }

    pub fn signup(self, details: SignupDetails) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller() {
                leptos::task::spawn_local(async move {
                    let _ = controller
                        .signup(
                            &details.first_name,
                            &details.last_name,
                            &details.email,
                            &details.password,
                            details.phone.as_deref(),
                        )
                        .await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = details;
        }
    }

    pub fn logout(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller() {
                controller.logout();
            }
        }
    }

    /// Remember a protected path to return to after the next login.
    pub fn remember_return_path(self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller() {
                controller.remember_return_path(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }

    #[cfg(feature = "hydrate")]
    fn controller(self) -> Option<Rc<BrowserController>> {
        self.controller.get_value()
    }
}

/// Fetch the `AuthContext` provided by `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Whether auth forms should refuse input for this snapshot.
pub fn forms_locked(snapshot: &SessionSnapshot) -> bool {
    snapshot.is_loading
}

/// Navbar greeting for the signed-in user, if any.
pub fn greeting(snapshot: &SessionSnapshot) -> Option<String> {
    snapshot
        .user
        .as_ref()
        .filter(|_| snapshot.is_authenticated)
        .map(|user| format!("Hi, {}", user.first_name))
}

/// Bridges controller output into Leptos signals and the router.
#[cfg(feature = "hydrate")]
struct BrowserHost {
    snapshot: RwSignal<SessionSnapshot>,
    notices: RwSignal<NoticeState>,
    navigate: Rc<dyn Fn(&str)>,
}

#[cfg(feature = "hydrate")]
impl SessionHost for BrowserHost {
    fn publish(&self, snapshot: &SessionSnapshot) {
        self.snapshot.set(snapshot.clone());
    }

    fn notify(&self, notice: Notice) {
        let mut id = 0;
        self.notices.update(|state| id = state.push(notice));
        let notices = self.notices;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::config::NOTICE_TTL_MS).await;
            notices.try_update(|state| state.dismiss(id));
        });
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}
