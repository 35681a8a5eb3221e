use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Post-logout landing page.
#[component]
pub fn SignedOut() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session.state();

    // Already signed in again: straight back to the app.
    use_effect(move || {
        if session.state().authenticated {
            nav.replace(Route::Home {});
        }
    });

    if state.loading {
        return rsx! {
            div {
                class: "guard-placeholder",
                div { class: "spinner", aria_label: "Loading" }
            }
        };
    }

    if state.authenticated {
        return rsx! {};
    }

    rsx! {
        div {
            class: "page-center",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "You've been signed out" }
                p {
                    class: "auth-subtitle",
                    "Your session has ended successfully. Sign in again to continue using Stone Notes."
                }
                button {
                    class: "button-primary",
                    onclick: move |_| {
                        let mut session = session;
                        session.signin_redirect();
                    },
                    "Sign In Again"
                }
                p { class: "auth-footer", "Thank you for using Stone Notes" }
            }
        }
    }
}
