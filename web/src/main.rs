use dioxus::prelude::*;

use api::AppConfig;
use store::QueryCache;
use ui::{SessionProvider, ToastViewport, Toasts};
use views::{Home, Login, Notes, SignedOut, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/notes")]
    Notes {},
    #[route("/signedout")]
    SignedOut {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Shared app state: configuration, the query cache, and notifications.
    use_context_provider(|| Signal::new(AppConfig::from_env()));
    use_context_provider(|| Signal::new(QueryCache::new()));
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
            ToastViewport {}
        }
    }
}
