//! Chat transcript with per-message pending placeholders.
//!
//! Every [`send`](ChatTranscript::send) appends the user's message followed by
//! an assistant placeholder and returns a [`Ticket`] naming that placeholder.
//! Replies may arrive in any order; each one replaces only its own placeholder,
//! so the transcript always reads in send order.

/// Placeholder text shown while a reply is outstanding.
pub const PENDING_TEXT: &str = "Loading...";

/// Text that replaces a placeholder whose request failed.
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub pending: bool,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_string(),
            pending: false,
        }
    }

    fn placeholder() -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: PENDING_TEXT.to_string(),
            pending: true,
        }
    }
}

/// Handle to one outstanding placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    index: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    // Bumped by `clear` so tickets issued before it go stale.
    generation: u64,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.pending).count()
    }

    /// Append a user message and its placeholder. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<Ticket> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::placeholder());
        Some(Ticket {
            generation: self.generation,
            index: self.messages.len() - 1,
        })
    }

    /// Fill the ticket's placeholder with the reply. Returns `false` when the
    /// ticket is stale or already settled.
    pub fn resolve(&mut self, ticket: Ticket, reply: &str) -> bool {
        self.settle(ticket, reply)
    }

    /// Replace the ticket's placeholder with the apology text.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        self.settle(ticket, APOLOGY_TEXT)
    }

    /// Drop every message. Outstanding tickets are ignored afterwards.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.generation += 1;
    }

    fn settle(&mut self, ticket: Ticket, text: &str) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.messages.get_mut(ticket.index) {
            Some(message) if message.pending => {
                message.text = text.to_string();
                message.pending = false;
                true
            }
            _ => false,
        }
    }
}
