//! The notes listing: sort control, list items, and the editor modal.

use dioxus::prelude::*;

use api::{Note, NoteQuery, SortBy, SortDir};

use crate::notes::delete_note;
use crate::{
    make_client, push_toast, use_app_config, use_notes, use_query_cache, use_session, use_toasts,
    NoteFormModal, NoteItem, SortControl, ToastLevel,
};

#[component]
pub fn NotesList() -> Element {
    let config = use_app_config();
    let session = use_session();
    let cache = use_query_cache();
    let mut toasts = use_toasts();

    let mut sort_by = use_signal(|| SortBy::CreatedAt);
    let mut sort_dir = use_signal(|| SortDir::Desc);
    let query = use_memo(move || NoteQuery {
        sort_by: sort_by(),
        sort_dir: sort_dir(),
        ..NoteQuery::default()
    });
    let notes = use_notes(query.into());

    let mut show_modal = use_signal(|| false);
    let mut editing_note = use_signal(|| Option::<Note>::None);
    // Id of the delete currently in flight; disables every delete control.
    let mut deleting = use_signal(|| Option::<i64>::None);

    let handle_delete = move |id: i64| {
        spawn(async move {
            deleting.set(Some(id));
            let client = make_client(&config, &session);
            match delete_note(&client, cache, id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Note deleted successfully");
                }
                Err(e) => {
                    tracing::error!(%e, "Failed to delete note");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Failed to delete note. Please try again.",
                    );
                }
            }
            deleting.set(None);
        });
    };

    let body = match notes() {
        None | Some(None) => rsx! {
            div { class: "notes-loading", "Loading notes..." }
        },
        Some(Some(Err(_))) => rsx! {
            div {
                class: "form-banner form-banner-error",
                "Failed to load notes. Please try again later."
            }
        },
        Some(Some(Ok(list))) if list.is_empty() => rsx! {
            p { class: "notes-empty", "No notes yet. Create your first note!" }
        },
        Some(Some(Ok(list))) => rsx! {
            div {
                class: "notes-items",
                for note in list {
                    NoteItem {
                        key: "{note.id}",
                        note: note.clone(),
                        deleting: deleting().is_some(),
                        on_edit: move |n: Note| {
                            editing_note.set(Some(n));
                            show_modal.set(true);
                        },
                        on_delete: handle_delete,
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "notes-list",

            div {
                class: "notes-toolbar",
                h2 { "Your Notes" }
                div {
                    class: "notes-toolbar-actions",
                    SortControl {
                        sort_by: sort_by(),
                        sort_dir: sort_dir(),
                        on_sort_by_change: move |by| sort_by.set(by),
                        on_sort_dir_change: move |dir| sort_dir.set(dir),
                    }
                    button {
                        class: "button-primary",
                        onclick: move |_| {
                            editing_note.set(None);
                            show_modal.set(true);
                        },
                        "+ New Note"
                    }
                }
            }

            {body}

            if show_modal() {
                NoteFormModal {
                    note: editing_note(),
                    on_close: move |_| {
                        show_modal.set(false);
                        editing_note.set(None);
                    },
                }
            }
        }
    }
}
