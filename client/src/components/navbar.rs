//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use session::SessionStatus;
use session::gate::{HOME_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE};

use crate::state::auth::{greeting, use_auth};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();

    let session_links = move || match auth.snapshot.with(|s| s.status) {
        SessionStatus::Authenticated => view! {
            <span class="navbar__user">{move || auth.snapshot.with(greeting)}</span>
            <button class="navbar__button" on:click=move |_| auth.logout()>
                "Logout"
            </button>
        }
        .into_any(),
        SessionStatus::Unauthenticated => view! {
            <a class="navbar__link" href=LOGIN_ROUTE>"Login"</a>
            <a class="navbar__link navbar__link--primary" href=SIGNUP_ROUTE>"Sign up"</a>
        }
        .into_any(),
        // Nothing to offer until the stored token is checked.
        SessionStatus::Validating => ().into_any(),
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=HOME_ROUTE>"Property Pulse"</a>
            <div class="navbar__session">{session_links}</div>
        </nav>
    }
}
