use dioxus::prelude::*;

use ui::LoginForm;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "page-center",
            LoginForm {}
        }
    }
}
