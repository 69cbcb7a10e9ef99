//! Q&A handlers.

mod ask_question;
mod list_questions;

pub use ask_question::{AskQuestionCommand, AskQuestionHandler};
pub use list_questions::ListQuestionsHandler;
