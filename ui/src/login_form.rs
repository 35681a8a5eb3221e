//! Login form with client-side validation.

use dioxus::prelude::*;

use api::LoginRequest;

use crate::validate::{validate_login, FieldErrors};
use crate::{make_client, use_app_config, use_session};

#[component]
pub fn LoginForm() -> Element {
    let config = use_app_config();
    let session = use_session();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut request_error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let validated = validate_login(email().trim(), &password());
        if !validated.is_empty() {
            errors.set(validated);
            return;
        }
        errors.set(FieldErrors::new());

        spawn(async move {
            request_error.set(None);
            pending.set(true);

            let client = make_client(&config, &session);
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match client.login(&request).await {
                Ok(response) => {
                    tracing::info!("Login succeeded");
                    pending.set(false);
                    if !response.success {
                        request_error.set(Some(response.message));
                    }
                }
                Err(e) => {
                    tracing::error!(%e, "Login failed");
                    pending.set(false);
                    request_error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h1 { class: "auth-title", "Welcome Back!" }
            p { class: "auth-subtitle", "Login to your account" }

            if let Some(err) = request_error() {
                div { class: "form-banner form-banner-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "text",
                        placeholder: "Enter your email",
                        value: email(),
                        class: if errors().get("email").is_some() { "input-invalid" } else { "" },
                        oninput: move |evt| {
                            email.set(evt.value());
                            errors.write().clear("email");
                        },
                    }
                    if let Some(msg) = errors().get("email").map(str::to_string) {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        value: password(),
                        class: if errors().get("password").is_some() { "input-invalid" } else { "" },
                        oninput: move |evt| {
                            password.set(evt.value());
                            errors.write().clear("password");
                        },
                    }
                    if let Some(msg) = errors().get("password").map(str::to_string) {
                        p { class: "field-error", "{msg}" }
                    }
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Logging in..." } else { "Log in" }
                }
            }

            p {
                class: "auth-footer",
                "Don't have an account? "
                a { href: "/signup", "Sign Up" }
            }
        }
    }
}
