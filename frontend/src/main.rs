//! Join-request review screen of the company portal.
//!
//! Development:
//! ```bash
//! dx serve --platform web
//! ```

#![allow(non_snake_case)]

mod pages;
mod seed;

use dioxus::prelude::*;

use pages::JoinRequests;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    JoinRequests {},
}

fn main() {
    // The launcher installs the tracing subscriber for the active platform
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
