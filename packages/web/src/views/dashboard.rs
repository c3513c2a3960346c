use dioxus::prelude::*;

use crate::Route;

const WELLNESS_URL: &str = "https://www.bc.edu/bc-web/campus-life/health-wellness.html";

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        h1 { class: "page-title", "Dashboard" }
        div {
            class: "card-grid",
            DashboardCard {
                title: "Tasks",
                blurb: "Organize what you need to do and receive quality advice",
                Link { to: Route::Tasks {}, class: "card-link", "→" }
            }
            DashboardCard {
                title: "Grades",
                blurb: "A comprehensive look at the scores you've received so far",
                Link { to: Route::Grades {}, class: "card-link", "→" }
            }
            DashboardCard {
                title: "Study",
                blurb: "Upload your notes and quiz yourself",
                Link { to: Route::Study {}, class: "card-link", "→" }
            }
            DashboardCard {
                title: "Support",
                blurb: "Ask where to find academic and wellness help on campus",
                Link { to: Route::Support {}, class: "card-link", "→" }
            }
            DashboardCard {
                title: "Resources",
                blurb: "Academic and wellness resources for Boston College students",
                a {
                    class: "card-link",
                    href: WELLNESS_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "→"
                }
            }
        }
    }
}

#[component]
fn DashboardCard(title: String, blurb: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { "{title}" }
            p { "{blurb}" }
            {children}
        }
    }
}
