use dioxus::prelude::*;

use ui::{use_session, NotesList, RequireAuth};

/// Protected notes page: greeting, logout, and the listing.
#[component]
pub fn Notes() -> Element {
    rsx! {
        RequireAuth {
            NotesHeader {}
        }
    }
}

#[component]
fn NotesHeader() -> Element {
    let session = use_session();
    let user = session.state().user;
    let (given, family) = user
        .map(|u| (u.given_name, u.family_name))
        .unwrap_or_default();

    rsx! {
        div {
            class: "notes-page",

            div {
                class: "notes-page-header",
                div {
                    h1 { "Stone Notes" }
                    p { class: "notes-greeting", "Welcome, {given} {family}!" }
                }
                button {
                    class: "button-primary",
                    onclick: move |_| {
                        let mut session = session;
                        session.signout_redirect();
                    },
                    "Logout"
                }
            }

            NotesList {}
        }
    }
}
