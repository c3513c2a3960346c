use dioxus::prelude::*;
use ui::{use_session, Navbar};

use crate::Route;

/// Shell for every signed-in view. Redirects to the login page when the
/// session is gone.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let session = use_session();

    if !session().is_signed_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Tasks {}, "Tasks" }
            Link { to: Route::Grades {}, "Grades" }
            Link { to: Route::Study {}, "Study" }
            Link { to: Route::Support {}, "Support" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
