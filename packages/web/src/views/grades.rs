//! Grades page: cached courses, fetched from the backend only when none are saved.

use api::{load_grades, refresh_grades, ChatTopic, Course, GradesSnapshot};
use dioxus::prelude::*;
use ui::{make_gateway, make_session_store, raise_alert, use_alerts, AlertLevel, ChatPanel};

fn format_percent(value: Option<f64>) -> String {
    value.map(|p| format!("{p:.1}%")).unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn Grades() -> Element {
    let mut grades: Signal<GradesSnapshot> =
        use_signal(|| make_session_store().grades().unwrap_or_default());
    let mut loading = use_signal(|| false);
    let mut alerts = use_alerts();

    let mut refresh = move || {
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            let store = make_session_store();
            match refresh_grades(&make_gateway(), &store).await {
                Ok(fresh) => grades.set(fresh),
                Err(e) => {
                    tracing::warn!(error = %e, "grades refresh failed");
                    raise_alert(&mut alerts, AlertLevel::Warning, e.user_message());
                }
            }
            loading.set(false);
        });
    };

    use_hook(move || {
        if make_session_store().grades().is_some() {
            return;
        }
        loading.set(true);
        spawn(async move {
            match load_grades(&make_gateway(), &make_session_store()).await {
                Ok(fresh) => grades.set(fresh),
                Err(e) => {
                    tracing::warn!(error = %e, "initial grades fetch failed");
                    raise_alert(&mut alerts, AlertLevel::Warning, e.user_message());
                }
            }
            loading.set(false);
        });
    });

    let courses = grades();
    let no_courses = courses.is_empty();

    rsx! {
        h1 { class: "page-title", "Grades" }
        div {
            class: "two-column",
            section {
                class: "panel",
                div {
                    class: "panel-header",
                    h2 { "Your Courses" }
                    button {
                        disabled: loading(),
                        onclick: move |_| refresh(),
                        if loading() { "Refreshing..." } else { "Refresh" }
                    }
                }
                if no_courses {
                    p {
                        class: "empty",
                        if loading() { "Loading your grades..." } else { "No graded assignments yet." }
                    }
                }
                for course in courses {
                    CourseCard { course }
                }
            }
            ChatPanel {
                topic: ChatTopic::Grades,
                title: "Ask about your grades",
            }
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let overall = format_percent(course.percentage());
    let rows: Vec<(String, String, String)> = course
        .assignments
        .iter()
        .map(|a| {
            (
                a.name.clone(),
                format!("{} / {}", a.score, a.possible),
                format_percent(a.percentage()),
            )
        })
        .collect();

    rsx! {
        div {
            class: "course-card",
            div {
                class: "course-header",
                h3 { "{course.name}" }
                span { class: "course-total", "{overall}" }
            }
            table {
                class: "assignment-table",
                thead {
                    tr {
                        th { "Assignment" }
                        th { "Score" }
                        th { "Percent" }
                    }
                }
                tbody {
                    for (name, score, percent) in rows {
                        tr {
                            td { "{name}" }
                            td { "{score}" }
                            td { "{percent}" }
                        }
                    }
                }
            }
        }
    }
}
