//! Study page: upload notes and take the generated quiz.

use api::Upload;
use dioxus::prelude::*;
use ui::{make_gateway, raise_alert, use_alerts, AlertLevel, QuizCard, QuizSession};

#[component]
pub fn Study() -> Element {
    let mut upload = use_signal(|| Option::<Upload>::None);
    let mut generating = use_signal(|| false);
    let mut quiz = use_signal(QuizSession::default);
    let mut alerts = use_alerts();

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let mut picked = Upload::new(name, bytes.to_vec());
                if let Some(content_type) = file.content_type() {
                    picked = picked.with_content_type(content_type);
                }
                upload.set(Some(picked));
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "could not read file");
                raise_alert(&mut alerts, AlertLevel::Error, "Could not read that file.");
            }
        }
    };

    let handle_generate = move |_| {
        let Some(picked) = upload() else {
            return;
        };
        if generating() {
            return;
        }
        generating.set(true);
        spawn(async move {
            match make_gateway().generate_quiz(picked).await {
                Ok(questions) => quiz.set(QuizSession::new(questions)),
                // The previous quiz stays in place.
                Err(e) => raise_alert(&mut alerts, AlertLevel::Error, e.user_message()),
            }
            generating.set(false);
        });
    };

    let file_name = upload().map(|u| u.file_name);
    let has_quiz = !quiz().questions().is_empty();

    rsx! {
        h1 { class: "page-title", "Study Assistant" }
        section {
            class: "panel upload",
            h2 { "Upload Your Notes" }
            input {
                r#type: "file",
                accept: ".txt,.pdf",
                onchange: handle_file,
            }
            if let Some(name) = file_name {
                p { class: "hint", "Selected: {name}" }
            }
            button {
                class: "primary",
                disabled: upload().is_none() || generating(),
                onclick: handle_generate,
                if generating() { "Generating..." } else { "Quiz Me" }
            }
        }
        section {
            class: "panel",
            h2 { "Quiz Time!" }
            if has_quiz {
                QuizCard { session: quiz }
            } else {
                p { class: "empty", "Upload notes to generate a quiz." }
            }
        }
    }
}
