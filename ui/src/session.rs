//! Session context over the OIDC redirect contract.
//!
//! The identity provider is external; this module consumes only its
//! login-redirect/token contract. On the redirect back it reads the access
//! token (and profile claims from the id token payload) out of the URL
//! fragment, establishes the session, restores the pre-redirect path, and
//! scrubs the callback artifacts from the address bar. Nothing here
//! validates tokens — the remote API does that on every call.
//!
//! The established session is kept in sessionStorage so it survives the
//! navigation that restores the original path. Sign-out clears it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use api::{AppConfig, OidcConfig};

/// sessionStorage key for the path to return to after the sign-in redirect.
pub const RETURN_URL_KEY: &str = "returnUrl";

/// sessionStorage key for the persisted session.
#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "stone-notes:session";

/// The authenticated user as seen by the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub access_token: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
}

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub loading: bool,
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub error: Option<String>,
    /// A sign-in or sign-out navigation is in flight.
    pub redirecting: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            loading: true,
            authenticated: false,
            user: None,
            error: None,
            redirecting: false,
        }
    }
}

impl Session {
    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            loading: false,
            authenticated: true,
            user: Some(user),
            error: None,
            redirecting: false,
        }
    }

    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.access_token.clone())
    }
}

/// Handle for reading session state and triggering the two redirects.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<Session>,
    config: Signal<AppConfig>,
}

impl SessionHandle {
    /// Snapshot of the current session state.
    pub fn state(&self) -> Session {
        self.state.cloned()
    }

    /// Navigate to the identity provider's sign-in endpoint. Marks the
    /// session as redirecting so re-renders do not trigger it again.
    pub fn signin_redirect(&mut self) {
        self.state.write().redirecting = true;
        let url = authorize_url(&self.config.read().oidc, &origin());
        tracing::info!("Redirecting to sign-in");
        navigate(&url);
    }

    /// Clear the session and navigate to the provider's sign-out endpoint.
    pub fn signout_redirect(&mut self) {
        clear_stored_session();
        let url = logout_url(&self.config.read().oidc, &origin());
        self.state.set(Session {
            redirecting: true,
            ..Session::signed_out()
        });
        tracing::info!("Redirecting to sign-out");
        navigate(&url);
    }
}

/// Get the current session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that establishes the session on load.
/// Wrap the app with this component below the config provider.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(Session::default);
    let config = use_context::<Signal<AppConfig>>();
    let handle = use_context_provider(|| SessionHandle { state, config });

    use_effect(move || initialize(handle.state));

    rsx! {
        {children}
    }
}

/// Establish the session from the callback fragment, a stored session, or
/// neither. Runs once on mount.
fn initialize(mut state: Signal<Session>) {
    let fragment = current_fragment();
    if let Some(outcome) = session_from_fragment(&fragment) {
        match &outcome {
            Session {
                user: Some(user), ..
            } => {
                store_session(user);
                state.set(outcome.clone());
                restore_return_url();
            }
            _ => {
                tracing::warn!(error = ?outcome.error, "Sign-in callback reported an error");
                state.set(outcome);
            }
        }
        return;
    }

    match load_stored_session() {
        Some(user) => state.set(Session::signed_in(user)),
        None => state.set(Session::signed_out()),
    }
}

/// Interpret a URL fragment as a sign-in callback. Returns `None` when the
/// fragment carries no callback parameters at all.
pub(crate) fn session_from_fragment(fragment: &str) -> Option<Session> {
    let params = parse_fragment(fragment);
    if params.is_empty() {
        return None;
    }

    if let Some(error) = lookup(&params, "error") {
        let detail = lookup(&params, "error_description").unwrap_or_else(|| error.clone());
        return Some(Session::errored(detail));
    }

    let access_token = lookup(&params, "access_token")?;
    let (given_name, family_name) = lookup(&params, "id_token")
        .and_then(|t| decode_profile_claims(&t))
        .unwrap_or_default();

    Some(Session::signed_in(SessionUser {
        access_token,
        given_name,
        family_name,
    }))
}

/// Split a `#key=value&key=value` fragment into decoded pairs.
pub(crate) fn parse_fragment(fragment: &str) -> Vec<(String, String)> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((percent_decode(key), percent_decode(value)))
        })
        .collect()
}

fn lookup(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn percent_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

#[derive(Debug, Default, Deserialize)]
struct ProfileClaims {
    #[serde(default)]
    given_name: String,
    #[serde(default)]
    family_name: String,
}

/// Decode the profile claims from a JWT payload without verifying the
/// signature; the client displays the names, nothing more.
pub(crate) fn decode_profile_claims(id_token: &str) -> Option<(String, String)> {
    let payload = id_token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: ProfileClaims = serde_json::from_slice(&bytes).ok()?;
    Some((claims.given_name, claims.family_name))
}

/// The provider's authorization endpoint with our client parameters.
pub(crate) fn authorize_url(oidc: &OidcConfig, redirect_uri: &str) -> String {
    format!(
        "{}/authorize?client_id={}&redirect_uri={}&response_type={}&scope={}",
        oidc.authority.trim_end_matches('/'),
        urlencoding::encode(&oidc.client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(&oidc.response_type),
        urlencoding::encode(&oidc.scope),
    )
}

/// The provider's end-session endpoint, returning to `/signedout`.
pub(crate) fn logout_url(oidc: &OidcConfig, origin: &str) -> String {
    format!(
        "{}/logout?client_id={}&post_logout_redirect_uri={}",
        oidc.authority.trim_end_matches('/'),
        urlencoding::encode(&oidc.client_id),
        urlencoding::encode(&format!("{origin}/signedout")),
    )
}

// ---------------------------------------------------------------------------
// Browser glue. Everything below is inert off-wasm so the pure logic above
// stays testable on the host.
// ---------------------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_fragment() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn origin() -> String {
    "http://localhost:8080".to_string()
}

#[cfg(target_arch = "wasm32")]
fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate(url: &str) {
    tracing::debug!(%url, "navigate");
}

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn store_session(user: &SessionUser) {
    if let (Some(storage), Ok(json)) = (session_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_session(_user: &SessionUser) {}

#[cfg(target_arch = "wasm32")]
fn load_stored_session() -> Option<SessionUser> {
    let storage = session_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_stored_session() -> Option<SessionUser> {
    None
}

#[cfg(target_arch = "wasm32")]
fn clear_stored_session() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_stored_session() {}

/// Read the stored return path once, clear it, and navigate there; absent a
/// stored path, reset the URL to its bare pathname so the callback fragment
/// is not replayed.
#[cfg(target_arch = "wasm32")]
fn restore_return_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let stored = session_storage().and_then(|storage| {
        let url = storage.get_item(RETURN_URL_KEY).ok()??;
        let _ = storage.remove_item(RETURN_URL_KEY);
        Some(url)
    });

    match stored {
        Some(url) => {
            let _ = window.location().replace(&url);
        }
        None => {
            if let (Ok(history), Ok(pathname)) = (window.history(), window.location().pathname()) {
                let _ = history.replace_state_with_url(
                    &web_sys::wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&pathname),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn restore_return_url() {}
