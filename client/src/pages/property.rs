//! Property detail page. Requires a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use session::UserProfile;

use crate::state::auth::use_auth;

#[component]
pub fn PropertyPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let property_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let viewer = move || {
        auth.snapshot
            .with(|s| s.user.as_ref().map(UserProfile::full_name))
            .unwrap_or_default()
    };

    view! {
        <section class="property">
            <h1>"Property " {property_id}</h1>
            <p class="property__viewer">"Signed in as " {viewer}</p>
        </section>
    }
}
