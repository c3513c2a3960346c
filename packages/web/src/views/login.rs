//! Login page: paste a Canvas access token.

use dioxus::prelude::*;
use ui::{sign_in, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut token = use_signal(String::new);

    if session().is_signed_in() {
        nav.replace(Route::Dashboard {});
    }

    // Start waking the backend while the user finds their token.
    use_hook(|| {
        spawn(async move {
            if let Err(e) = ui::make_gateway().wake().await {
                tracing::debug!(error = %e, "pre-warm did not reach the backend");
            }
        });
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let value = token();
        spawn(async move {
            if sign_in(session, value).await.is_ok() && session().is_signed_in() {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    let busy = session().is_busy();
    let error = session().error;

    rsx! {
        div {
            class: "page centered login",
            h1 { "EagleTask" }
            p { class: "subtitle", "Sign in with your Canvas access token" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Canvas access token",
                    autocomplete: "off",
                    disabled: busy,
                    value: token(),
                    oninput: move |evt: FormEvent| token.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: busy || token().trim().is_empty(),
                    if busy { "Validating..." } else { "Sign In" }
                }

                if busy {
                    p {
                        class: "hint",
                        "The server may take up to a minute to wake up."
                    }
                }
            }
        }
    }
}
