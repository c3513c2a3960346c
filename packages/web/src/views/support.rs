use api::ChatTopic;
use dioxus::prelude::*;
use ui::ChatPanel;

#[component]
pub fn Support() -> Element {
    rsx! {
        h1 { class: "page-title", "Support" }
        p {
            class: "subtitle",
            "Find tutoring, counseling, accessibility services and more."
        }
        ChatPanel {
            topic: ChatTopic::Support,
            title: "Campus support",
            placeholder: "Ask about a support resource...",
        }
    }
}
