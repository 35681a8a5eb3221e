use dioxus::prelude::*;

use crate::Route;

/// Landing page: entry points into login and signup.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "home",
            h1 { "Stone Notes" }
            div {
                class: "home-actions",
                button {
                    class: "button-primary",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Login"
                }
                button {
                    class: "button-secondary",
                    onclick: move |_| { nav.push(Route::Signup {}); },
                    "Sign Up"
                }
            }
        }
    }
}
