use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AlertProvider, SessionProvider};
use views::{AppLayout, Dashboard, Grades, Login, NotFound, Study, Support, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/grades")]
        Grades {},
        #[route("/tasks")]
        Tasks {},
        #[route("/support")]
        Support {},
        #[route("/study")]
        Study {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "EagleTask" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            AlertProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard, or to the login page when signed out.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    if ui::use_session()().is_signed_in() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
