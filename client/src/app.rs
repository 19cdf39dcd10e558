//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{access_gate::AccessGate, auth_provider::AuthProvider, navbar::Navbar, toasts::Toasts};
use crate::pages::{home::HomePage, login::LoginPage, property::PropertyPage, signup::SignupPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The auth provider sits inside the router so the session controller can
/// navigate after login and logout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/property-pulse.css"/>
        <Title text="Property Pulse"/>

        <Router>
            <AuthProvider>
                <Navbar/>
                <main class="page">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route
                            path=(StaticSegment("property"), ParamSegment("id"))
                            view=|| view! { <AccessGate><PropertyPage/></AccessGate> }
                        />
                    </Routes>
                </main>
                <Toasts/>
            </AuthProvider>
        </Router>
    }
}
