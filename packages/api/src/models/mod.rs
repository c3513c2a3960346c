//! Wire models the gateway decodes from backend responses.

mod quiz;
mod user;

pub use quiz::{QuizQuestion, QuizSet};
pub use user::ValidatedUser;
