use api::{ChatContext, ChatTopic};
use dioxus::prelude::*;

use crate::platform::{make_gateway, make_session_store};
use crate::transcript::{ChatTranscript, Speaker};

const CHAT_CSS: Asset = asset!("/assets/styling/chat.css");

/// Chat box bound to one topic.
///
/// Context (grades or tasks) is read from the session store when a message is
/// sent, so a refresh that lands mid-conversation is picked up by the next turn.
#[component]
pub fn ChatPanel(
    topic: ChatTopic,
    #[props(default = "Chat".to_string())] title: String,
    #[props(default = "Type your message here...".to_string())] placeholder: String,
) -> Element {
    let mut transcript = use_signal(ChatTranscript::new);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft();
        let Some(ticket) = transcript.write().send(&text) else {
            return;
        };
        draft.set(String::new());

        spawn(async move {
            let store = make_session_store();
            let gateway = make_gateway();
            let result = match topic {
                ChatTopic::Grades => {
                    let grades = store.grades().unwrap_or_default();
                    gateway.chat(ChatContext::Grades(&grades), &text).await
                }
                ChatTopic::Tasks => {
                    let tasks = store.tasks().unwrap_or_default();
                    gateway.chat(ChatContext::Tasks(&tasks), &text).await
                }
                ChatTopic::Support => gateway.chat(ChatContext::Support, &text).await,
            };
            match result {
                Ok(reply) => {
                    transcript.write().resolve(ticket, &reply);
                }
                Err(e) => {
                    tracing::warn!(?topic, error = %e, "chat reply failed");
                    transcript.write().fail(ticket);
                }
            }
        });
    };

    let messages = transcript().messages().to_vec();
    let empty = messages.is_empty();

    rsx! {
        document::Stylesheet { href: CHAT_CSS }

        div {
            class: "chat-panel",
            div {
                class: "chat-header",
                h2 { "{title}" }
                button {
                    class: "chat-clear",
                    disabled: empty,
                    onclick: move |_| transcript.write().clear(),
                    "Clear"
                }
            }
            div {
                class: "chat-messages",
                for message in messages {
                    div {
                        class: match (message.speaker, message.pending) {
                            (Speaker::User, _) => "chat-message user",
                            (Speaker::Assistant, true) => "chat-message assistant pending",
                            (Speaker::Assistant, false) => "chat-message assistant",
                        },
                        "{message.text}"
                    }
                }
            }
            form {
                class: "chat-input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send();
                },
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: draft().trim().is_empty(),
                    "Send"
                }
            }
        }
    }
}
