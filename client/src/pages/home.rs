//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let signed_in = move || auth.snapshot.with(|s| s.is_authenticated);

    view! {
        <section class="home">
            <h1>"Find your next place"</h1>
            <p class="home__lead">"Browse rentals and save the ones you like."</p>
            <a class="home__cta" href="/property/featured">"View featured property"</a>
            <Show when=move || !signed_in()>
                <p class="home__hint">"Sign in to see property details."</p>
            </Show>
        </section>
    }
}
