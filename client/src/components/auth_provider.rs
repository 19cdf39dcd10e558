//! Provider that installs the `AuthContext` for the whole app.

use leptos::prelude::*;

use crate::state::auth::AuthContext;

/// Provide the session context to `children` and, once hydrated, start the
/// browser session controller.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move |_| auth.start(navigate.clone()));
    }

    children()
}
