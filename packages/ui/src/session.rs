//! Session context and hooks for the UI.

use api::GatewayError;
use dioxus::prelude::*;
use store::{KvStore, SessionPhase, SessionStore};

use crate::platform::{make_gateway, make_session_store};

/// Login state as the views see it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user_id: Option<String>,
    /// User-facing message from the last failed sign-in.
    pub error: Option<String>,
}

impl SessionState {
    /// State persisted in `store`. Never `Authenticating`.
    pub fn from_store<S: KvStore>(store: &SessionStore<S>) -> Self {
        Self {
            phase: store.phase(),
            user_id: store.user_id(),
            error: None,
        }
    }

    fn anonymous(error: Option<String>) -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user_id: None,
            error,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// A sign-in request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == SessionPhase::Authenticating
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that loads the session from storage on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState::from_store(&make_session_store()));
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Validate `token` and persist the session on success.
///
/// Ignored while another sign-in is in flight. On failure the state returns to
/// `Anonymous` carrying the error's user message.
pub async fn sign_in(mut state: Signal<SessionState>, token: String) -> Result<(), GatewayError> {
    if state().is_busy() {
        return Ok(());
    }
    let token = token.trim().to_string();
    state.set(SessionState {
        phase: SessionPhase::Authenticating,
        user_id: None,
        error: None,
    });

    match make_gateway().validate_credential(&token).await {
        Ok(user) => {
            let store = make_session_store();
            store.sign_in(&token, &user.user_id);
            state.set(SessionState::from_store(&store));
            tracing::info!(user_id = %user.user_id, "signed in");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in failed");
            state.set(SessionState::anonymous(Some(e.user_message().to_string())));
            Err(e)
        }
    }
}

/// Forget the session and every cached snapshot.
pub fn sign_out(mut state: Signal<SessionState>) {
    make_session_store().sign_out();
    state.set(SessionState::anonymous(None));
    tracing::info!("signed out");
}

/// Button that signs the user out.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_signed_out: EventHandler<()>,
) -> Element {
    let state = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                sign_out(state);
                on_signed_out.call(());
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_state_from_empty_store() {
        let store = SessionStore::new(MemoryStore::new());
        let state = SessionState::from_store(&store);
        assert_eq!(state.phase, SessionPhase::Anonymous);
        assert!(!state.is_signed_in());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_state_from_signed_in_store() {
        let store = SessionStore::new(MemoryStore::new());
        store.sign_in("tok", "1234");
        let state = SessionState::from_store(&store);
        assert!(state.is_signed_in());
        assert_eq!(state.user_id.as_deref(), Some("1234"));
    }

    #[test]
    fn test_reload_after_sign_out() {
        let backing = MemoryStore::new();
        let store = SessionStore::new(backing.clone());
        store.sign_in("tok", "1234");
        store.sign_out();

        let reloaded = SessionState::from_store(&SessionStore::new(backing));
        assert_eq!(reloaded.phase, SessionPhase::Anonymous);
        assert_eq!(reloaded.user_id, None);
    }
}
