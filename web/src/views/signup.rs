use dioxus::prelude::*;

use ui::SignupForm;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    rsx! {
        div {
            class: "page-center",
            SignupForm {}
        }
    }
}
