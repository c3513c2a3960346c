//! This crate contains all shared UI for the workspace.

mod platform;
pub use platform::{make_gateway, make_session_store};

mod session;
pub use session::{sign_in, sign_out, use_session, SessionProvider, SessionState, SignOutButton};

pub mod transcript;
pub use transcript::{ChatMessage, ChatTranscript, Speaker, Ticket};

mod chat_panel;
pub use chat_panel::ChatPanel;

pub mod alerts;
pub use alerts::{raise_alert, use_alerts, Alert, AlertLevel, AlertProvider, Alerts};

pub mod calendar;
pub use calendar::{group_by_day, tasks_due_on, DueDays, TaskCalendar, TaskCard};

pub mod quiz;
pub use quiz::{QuizCard, QuizSession};

mod navbar;
pub use navbar::Navbar;
