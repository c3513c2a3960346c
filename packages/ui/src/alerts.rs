use std::time::Duration;

use dioxus::prelude::*;

/// Info and success notices disappear on their own after this long.
const AUTO_DISMISS: Duration = Duration::from_secs(6);

const ALERTS_CSS: Asset = asset!("/assets/styling/alerts.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub timestamp: String,
    pub level: AlertLevel,
    pub message: String,
}

/// Notices shown to the user, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alerts {
    entries: Vec<Alert>,
    next_id: u64,
}

impl Alerts {
    pub fn entries(&self) -> &[Alert] {
        &self.entries
    }

    pub fn push(&mut self, level: AlertLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Alert {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|a| a.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|a| a.level == AlertLevel::Error)
    }
}

pub fn use_alerts() -> Signal<Alerts> {
    use_context::<Signal<Alerts>>()
}

pub fn raise_alert(alerts: &mut Signal<Alerts>, level: AlertLevel, message: &str) {
    let id = alerts.write().push(level, message);
    if matches!(level, AlertLevel::Info | AlertLevel::Success) {
        let mut alerts = *alerts;
        spawn(async move {
            api::sleep(AUTO_DISMISS).await;
            alerts.write().dismiss(id);
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Provides the [`Alerts`] signal to its children and renders the stack.
#[component]
pub fn AlertProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Alerts::default()));

    rsx! {
        {children}
        AlertStack {}
    }
}

#[component]
pub fn AlertStack() -> Element {
    let mut alerts = use_alerts();
    let entries = alerts().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }
    let several = entries.len() > 1;

    rsx! {
        document::Stylesheet { href: ALERTS_CSS }

        div {
            class: "alert-stack",
            if several {
                button {
                    class: "alert-clear",
                    onclick: move |_| alerts.write().clear(),
                    "Dismiss all"
                }
            }
            for entry in entries.into_iter().rev() {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        AlertLevel::Error => "alert error",
                        AlertLevel::Warning => "alert warning",
                        AlertLevel::Success => "alert success",
                        AlertLevel::Info => "alert info",
                    },
                    span { class: "alert-time", "{entry.timestamp}" }
                    span { class: "alert-message", " {entry.message}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| alerts.write().dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
