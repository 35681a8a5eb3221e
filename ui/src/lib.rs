//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

use api::AppConfig;
use store::QueryCache;

mod session;
pub use session::{use_session, Session, SessionHandle, SessionProvider, SessionUser};

mod guard;
pub use guard::{GuardState, RequireAuth};

pub mod validate;
pub use validate::FieldErrors;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastViewport, Toasts};

mod notes;
pub use notes::{create_note, delete_note, make_client, update_note, use_notes};

mod sort_control;
pub use sort_control::{sort_option, SortControl, SortOption, SORT_OPTIONS};

mod login_form;
pub use login_form::LoginForm;

mod signup_form;
pub use signup_form::SignupForm;

mod note_form;
pub use note_form::NoteFormModal;

mod note_item;
pub use note_item::NoteItem;

mod notes_list;
pub use notes_list::NotesList;

/// Application configuration from the surrounding context.
pub fn use_app_config() -> Signal<AppConfig> {
    use_context::<Signal<AppConfig>>()
}

/// The shared query cache from the surrounding context.
pub fn use_query_cache() -> Signal<QueryCache> {
    use_context::<Signal<QueryCache>>()
}
