//! Create/edit dialog for a note.

use dioxus::prelude::*;

use api::{Note, NoteDraft};

use crate::notes::{create_note, update_note};
use crate::validate::{validate_note, FieldErrors, MAX_CONTENT_LEN, MAX_TITLE_LEN};
use crate::{make_client, push_toast, use_app_config, use_query_cache, use_session, use_toasts, ToastLevel};

/// Modal note editor. With `note: Some(_)` it edits that note, otherwise it
/// creates a new one. The parent controls visibility through `on_close`.
#[component]
pub fn NoteFormModal(note: Option<Note>, on_close: EventHandler<()>) -> Element {
    let config = use_app_config();
    let session = use_session();
    let cache = use_query_cache();
    let mut toasts = use_toasts();

    let editing = note.as_ref().map(|n| n.id);
    let mut title = use_signal(|| note.as_ref().map(|n| n.title.clone()).unwrap_or_default());
    let mut content = use_signal(|| note.as_ref().map(|n| n.content.clone()).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let validated = validate_note(title().trim(), &content());
        if !validated.is_empty() {
            errors.set(validated);
            return;
        }
        errors.set(FieldErrors::new());

        spawn(async move {
            pending.set(true);

            let client = make_client(&config, &session);
            let draft = NoteDraft {
                title: title().trim().to_string(),
                content: content(),
            };
            let result = match editing {
                Some(id) => update_note(&client, cache, id, &draft).await,
                None => create_note(&client, cache, &draft).await,
            };
            pending.set(false);

            match result {
                Ok(_) => {
                    let verb = if editing.is_some() { "updated" } else { "created" };
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        &format!("Note {verb} successfully"),
                    );
                    title.set(String::new());
                    content.set(String::new());
                    on_close.call(());
                }
                Err(e) => {
                    let verb = if editing.is_some() { "update" } else { "create" };
                    tracing::error!(%e, "Failed to {verb} note");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &format!("Failed to {verb} note. Please try again."),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",

                form {
                    onsubmit: handle_submit,

                    h2 {
                        if editing.is_some() { "Edit Note" } else { "Create New Note" }
                    }
                    p {
                        class: "modal-subtitle",
                        if editing.is_some() {
                            "Make changes to your note here."
                        } else {
                            "Add a new note to your collection."
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "title", "Title" }
                        input {
                            id: "title",
                            r#type: "text",
                            placeholder: "Enter note title",
                            maxlength: "{MAX_TITLE_LEN}",
                            value: title(),
                            class: if errors().get("title").is_some() { "input-invalid" } else { "" },
                            oninput: move |evt| {
                                title.set(evt.value());
                                errors.write().clear("title");
                            },
                        }
                        if let Some(msg) = errors().get("title").map(str::to_string) {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "content", "Content" }
                        textarea {
                            id: "content",
                            rows: "8",
                            placeholder: "Enter note content",
                            maxlength: "{MAX_CONTENT_LEN}",
                            value: content(),
                            oninput: move |evt| {
                                content.set(evt.value());
                                errors.write().clear("content");
                            },
                        }
                        if let Some(msg) = errors().get("content").map(str::to_string) {
                            p { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "button-secondary",
                            disabled: pending(),
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button-primary",
                            disabled: pending(),
                            if pending() {
                                "Saving..."
                            } else if editing.is_some() {
                                "Save Changes"
                            } else {
                                "Create Note"
                            }
                        }
                    }
                }
            }
        }
    }
}
