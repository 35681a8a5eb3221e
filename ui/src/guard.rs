//! Protected-route gate.
//!
//! Wraps page content that requires an authenticated session. While the
//! session is loading it renders a placeholder; on a session error it renders
//! the message and halts; once loading finishes without authentication it
//! stores the current path under `returnUrl`, renders nothing, and triggers
//! exactly one sign-in redirect. The session's `redirecting` flag keeps
//! re-renders from starting another.

use dioxus::prelude::*;

use crate::session::{use_session, Session, RETURN_URL_KEY};

/// What the guard should do for a given session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    /// Session still loading, or a redirect is already in flight.
    Wait,
    /// Authentication failed at the provider; render the message and stop.
    Error(String),
    /// Loading finished, no session, no navigation in flight: redirect now.
    RedirectToSignIn,
    /// Render the protected content.
    Authenticated,
}

/// Pure decision function for the guard.
pub fn guard_state(session: &Session) -> GuardState {
    if session.loading {
        return GuardState::Wait;
    }
    if let Some(error) = &session.error {
        return GuardState::Error(error.clone());
    }
    if session.authenticated {
        return GuardState::Authenticated;
    }
    if session.redirecting {
        return GuardState::Wait;
    }
    GuardState::RedirectToSignIn
}

/// Gate component around protected pages.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let state = guard_state(&session.state());

    // Side effect out of the render path: the effect re-runs on session
    // changes, and the redirecting flag it sets keeps it from firing twice.
    use_effect(move || {
        let mut session = session;
        if guard_state(&session.state()) == GuardState::RedirectToSignIn {
            store_return_url();
            session.signin_redirect();
        }
    });

    match state {
        GuardState::Wait => rsx! {
            div {
                class: "guard-placeholder",
                div { class: "spinner", aria_label: "Loading" }
            }
        },
        // Nothing while the sign-in navigation takes over the page.
        GuardState::RedirectToSignIn => rsx! {},
        GuardState::Error(message) => rsx! {
            div {
                class: "guard-error",
                "Authentication error: {message}"
            }
        },
        GuardState::Authenticated => rsx! {
            {children}
        },
    }
}

/// Persist the current path so the sign-in callback can restore it.
#[cfg(target_arch = "wasm32")]
fn store_return_url() {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.set_item(RETURN_URL_KEY, &path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_return_url() {
    tracing::debug!(key = RETURN_URL_KEY, "would store return path");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionUser;

    #[test]
    fn test_loading_waits() {
        assert_eq!(guard_state(&Session::default()), GuardState::Wait);
    }

    #[test]
    fn test_error_halts() {
        let session = Session::errored("bad issuer");
        assert_eq!(
            guard_state(&session),
            GuardState::Error("bad issuer".to_string())
        );
    }

    #[test]
    fn test_unauthenticated_redirects_once() {
        let mut session = Session::signed_out();
        assert_eq!(guard_state(&session), GuardState::RedirectToSignIn);

        // After signin_redirect() marks the navigation active, re-entry must
        // not trigger a second redirect.
        session.redirecting = true;
        assert_eq!(guard_state(&session), GuardState::Wait);
    }

    // The view shows a spinner only for `Wait`; a pending redirect renders
    // nothing, so the two states must stay distinguishable.
    #[test]
    fn test_redirect_state_is_not_a_wait_state() {
        assert_ne!(guard_state(&Session::signed_out()), GuardState::Wait);
        assert_eq!(
            guard_state(&Session::signed_out()),
            GuardState::RedirectToSignIn
        );
    }

    #[test]
    fn test_authenticated_renders_content() {
        let session = Session::signed_in(SessionUser {
            access_token: "tok".into(),
            given_name: "Ada".into(),
            family_name: "Stone".into(),
        });
        assert_eq!(guard_state(&session), GuardState::Authenticated);
    }
}
