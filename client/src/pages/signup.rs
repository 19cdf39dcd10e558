//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collects the registration fields, checks them locally, and submits through
//! `AuthContext::signup`. Server-side validation messages arrive as toasts.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use session::gate::LOGIN_ROUTE;

use crate::state::auth::{SignupDetails, forms_locked, use_auth};

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw signup form input, as typed.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Trim names, email and phone; enforce required fields, a plausible
    /// email, the password length and confirmation.
    pub fn validate(&self) -> Result<SignupDetails, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err("All required fields must be filled.");
        }
        if !looks_like_email(email) {
            return Err("Enter a valid email address.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters.");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.");
        }
        let phone = self.phone.trim();
        Ok(SignupDetails {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let locked = move || auth.snapshot.with(forms_locked);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked() {
            return;
        }
        let form = SignupForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        match form.validate() {
            Ok(details) => {
                info.set(String::new());
                auth.signup(details);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <SignupField signal=first_name placeholder="First name" autocomplete="given-name"/>
                        <SignupField signal=last_name placeholder="Last name" autocomplete="family-name"/>
                    </div>
                    <SignupField signal=email kind="email" placeholder="Email" autocomplete="email"/>
                    <SignupField signal=phone kind="tel" placeholder="Phone (optional)" autocomplete="tel"/>
                    <SignupField signal=password kind="password" placeholder="Password" autocomplete="new-password"/>
                    <SignupField
                        signal=confirm_password
                        kind="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                    />
                    <button class="auth-button" type="submit" disabled=locked>
                        {move || if locked() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=LOGIN_ROUTE>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn SignupField(
    signal: RwSignal<String>,
    placeholder: &'static str,
    autocomplete: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            autocomplete=autocomplete
            placeholder=placeholder
            prop:value=move || signal.get()
            on:input=move |ev| signal.set(event_target_value(&ev))
        />
    }
}
