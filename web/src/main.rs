use dioxus::prelude::*;

use session::SessionProvider;
use views::{HomePage, LandingPage};

mod browser;
mod callback;
mod config;
mod session;
mod storage;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    LandingPage {},
    #[route("/home")]
    HomePage {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "SoundFrame" }

        SessionProvider { Router::<Route> {} }
    }
}
