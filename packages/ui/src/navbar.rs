use dioxus::prelude::*;

use crate::session::{use_session, SignOutButton};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar. Links come from the caller; a sign-out button is appended while a
/// session is active.
#[component]
pub fn Navbar(#[props(default)] on_signed_out: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "EagleTask" }
            div {
                class: "navbar-links",
                {children}
            }
            if session().is_signed_in() {
                SignOutButton { class: "navbar-signout", on_signed_out }
            }
        }
    }
}
