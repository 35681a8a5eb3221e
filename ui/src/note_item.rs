//! One note card in the listing.

use dioxus::prelude::*;

use api::Note;

#[component]
pub fn NoteItem(
    note: Note,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<i64>,
    deleting: bool,
) -> Element {
    // Two-step delete: the first click arms the confirmation.
    let mut confirming = use_signal(|| false);

    let note_id = note.id;
    let edit_note = note.clone();

    rsx! {
        div {
            class: "note-card",

            div {
                class: "note-card-header",
                h3 { class: "note-title", "{note.title}" }
                div {
                    class: "note-actions",
                    button {
                        class: "button-outline",
                        onclick: move |_| on_edit.call(edit_note.clone()),
                        "Edit"
                    }
                    if confirming() {
                        button {
                            class: "button-danger",
                            disabled: deleting,
                            onclick: move |_| {
                                confirming.set(false);
                                on_delete.call(note_id);
                            },
                            "Confirm"
                        }
                        button {
                            class: "button-secondary",
                            onclick: move |_| confirming.set(false),
                            "Cancel"
                        }
                    } else {
                        button {
                            class: "button-outline",
                            disabled: deleting,
                            onclick: move |_| confirming.set(true),
                            "Delete"
                        }
                    }
                }
            }

            if !note.content.is_empty() {
                p { class: "note-content", "{note.content}" }
            }

            p { class: "note-meta", "Created: {note.created_at}" }
        }
    }
}
