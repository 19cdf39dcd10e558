//! Toast stack for session notices.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::state::notices::level_class;

/// Render queued notices; clicking one dismisses it early.
#[component]
pub fn Toasts() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="toasts" aria-live="polite">
            <For each=move || auth.notices.get().items key=|item| item.id let:item>
                <div
                    class=level_class(item.level)
                    role="status"
                    on:click=move |_| {
                        auth.notices.update(|state| {
                            state.dismiss(item.id);
                        });
                    }
                >
                    {item.message.clone()}
                </div>
            </For>
        </div>
    }
}
