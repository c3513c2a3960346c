//! Tasks page: generated task list with a calendar view and a task chat.

use api::{refresh_tasks, ChatTopic, TaskSnapshot};
use dioxus::prelude::*;
use ui::{
    make_gateway, make_session_store, raise_alert, use_alerts, AlertLevel, ChatPanel,
    TaskCalendar, TaskCard,
};

#[derive(Clone, Copy, PartialEq)]
enum TaskView {
    List,
    Calendar,
}

#[component]
pub fn Tasks() -> Element {
    let mut tasks: Signal<TaskSnapshot> =
        use_signal(|| make_session_store().tasks().unwrap_or_default());
    let mut loading = use_signal(|| false);
    let mut view = use_signal(|| TaskView::List);
    let mut alerts = use_alerts();

    let handle_refresh = move |_| {
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            let store = make_session_store();
            match refresh_tasks(&make_gateway(), &store).await {
                Ok(fresh) => {
                    let count = fresh.len();
                    tasks.set(fresh);
                    raise_alert(&mut alerts, AlertLevel::Success, &format!("Generated {count} tasks"));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "task refresh failed");
                    raise_alert(&mut alerts, AlertLevel::Warning, e.user_message());
                }
            }
            loading.set(false);
        });
    };

    let list = tasks();

    rsx! {
        h1 { class: "page-title", "Tasks" }
        div {
            class: "toolbar",
            button {
                class: "primary",
                disabled: loading(),
                onclick: handle_refresh,
                if loading() { "Refreshing Tasks..." } else { "Refresh My Tasks" }
            }
            div {
                class: "toggle",
                button {
                    class: if view() == TaskView::List { "active" } else { "" },
                    onclick: move |_| view.set(TaskView::List),
                    "List"
                }
                button {
                    class: if view() == TaskView::Calendar { "active" } else { "" },
                    onclick: move |_| view.set(TaskView::Calendar),
                    "Calendar"
                }
            }
        }
        div {
            class: "two-column",
            section {
                class: "panel",
                if list.is_empty() {
                    p { class: "empty", "No tasks yet. Refresh to generate your task list." }
                } else if view() == TaskView::Calendar {
                    TaskCalendar { tasks: list.clone() }
                } else {
                    ul {
                        class: "task-list",
                        for task in list.clone() {
                            TaskCard { task }
                        }
                    }
                }
            }
            ChatPanel {
                topic: ChatTopic::Tasks,
                title: "Plan with your assistant",
            }
        }
    }
}
