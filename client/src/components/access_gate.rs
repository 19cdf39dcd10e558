//! Guard for routes that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected page views. The decision itself comes from
//! `session::gate::decide`; this component only renders it: a spinner while
//! the stored token is being validated, a replace-navigation to `/login` for
//! anonymous visitors, and the children once authenticated. Signing out on a
//! protected page does not bounce through `/login`.

#[cfg(test)]
#[path = "access_gate_test.rs"]
mod access_gate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::gate::{self, GateDecision};

use crate::state::auth::use_auth;

#[component]
pub fn AccessGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = join_path_and_query(&location.pathname.get(), &location.search.get());
        gate::decide(auth.snapshot.get().status, &requested)
    });

    Effect::new(move |previous: Option<GateDecision>| {
        let current = decision.get();
        if redirect_needed(previous.as_ref(), &current) {
            if let GateDecision::Redirect { to, from } = &current {
                auth.remember_return_path(from);
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
        current
    });

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading | GateDecision::Redirect { .. } => view! {
            <div class="access-gate" aria-busy="true">
                <span class="spinner"></span>
                <p class="access-gate__label">"Checking your session..."</p>
            </div>
        }
        .into_any(),
    }
}

/// Redirect to login only for visitors who never got in. A session that ends
/// while the protected view is shown is a logout, and the controller is
/// already taking the user home.
pub fn redirect_needed(previous: Option<&GateDecision>, current: &GateDecision) -> bool {
    matches!(current, GateDecision::Redirect { .. }) && !matches!(previous, Some(GateDecision::Render))
}

/// Rebuild the requested location from router parts. `search` may or may not
/// carry its leading `?`.
pub fn join_path_and_query(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}
