//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through `AuthContext::login`; the controller reports the outcome
//! as a toast and navigates away on success. The form only blocks obviously
//! empty input.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::gate::SIGNUP_ROUTE;

use crate::state::auth::{forms_locked, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let locked = move || auth.snapshot.with(forms_locked);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                info.set(String::new());
                password.set(String::new());
                auth.login(email_value, password_value);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=locked>
                        {move || if locked() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=SIGNUP_ROUTE>"Create one"</a>
                </p>
            </div>
        </div>
    }
}

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
