//! Signup form with client-side validation.

use dioxus::prelude::*;

use api::RegisterRequest;

use crate::validate::{validate_signup, FieldErrors, SignupFields};
use crate::{make_client, use_app_config, use_session};

#[component]
pub fn SignupForm() -> Element {
    let config = use_app_config();
    let session = use_session();

    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut request_error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);
    let mut registered = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let validated = validate_signup(SignupFields {
            email: email().trim(),
            first_name: first_name().trim(),
            last_name: last_name().trim(),
            password: &password(),
            confirm_password: &confirm_password(),
        });
        if !validated.is_empty() {
            errors.set(validated);
            return;
        }
        errors.set(FieldErrors::new());

        spawn(async move {
            request_error.set(None);
            pending.set(true);

            let client = make_client(&config, &session);
            let request = RegisterRequest {
                email: email().trim().to_string(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                password: password(),
            };
            match client.register(&request).await {
                Ok(_) => {
                    tracing::info!("Registration succeeded");
                    pending.set(false);
                    registered.set(true);
                }
                Err(e) => {
                    tracing::error!(%e, "Registration failed");
                    pending.set(false);
                    request_error.set(Some(e.to_string()));
                }
            }
        });
    };

    if registered() {
        return rsx! {
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Account created" }
                p { class: "auth-subtitle", "You can now log in to Stone Notes." }
                a { class: "button-primary", href: "/login", "Go to login" }
            }
        };
    }

    rsx! {
        div {
            class: "auth-card",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Create a Stone Notes account" }

            if let Some(err) = request_error() {
                div { class: "form-banner form-banner-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                SignupField {
                    id: "email",
                    label: "Email",
                    input_type: "email",
                    placeholder: "m@example.com",
                    value: email,
                    errors: errors,
                }
                SignupField {
                    id: "firstName",
                    label: "First Name",
                    input_type: "text",
                    placeholder: "John",
                    value: first_name,
                    errors: errors,
                }
                SignupField {
                    id: "lastName",
                    label: "Last Name",
                    input_type: "text",
                    placeholder: "Doe",
                    value: last_name,
                    errors: errors,
                }
                SignupField {
                    id: "password",
                    label: "Password",
                    input_type: "password",
                    placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                    value: password,
                    errors: errors,
                }
                SignupField {
                    id: "confirmPassword",
                    label: "Confirm Password",
                    input_type: "password",
                    placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                    value: confirm_password,
                    errors: errors,
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                a { href: "/login", "Login" }
            }
        }
    }
}

/// One labelled input wired to its signal and its slot in the error map.
#[component]
fn SignupField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    errors: Signal<FieldErrors>,
) -> Element {
    let mut value = value;
    let mut errors = errors;

    rsx! {
        div {
            class: "form-field",
            label { r#for: id, "{label}" }
            input {
                id: id,
                r#type: input_type,
                placeholder: placeholder,
                value: value(),
                class: if errors().get(id).is_some() { "input-invalid" } else { "" },
                oninput: move |evt| {
                    value.set(evt.value());
                    errors.write().clear(id);
                },
            }
            if let Some(msg) = errors().get(id).map(str::to_string) {
                p { class: "field-error", "{msg}" }
            }
        }
    }
}
