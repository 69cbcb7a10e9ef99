//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage
//!
//! - `EntityStore` - get/list/upsert over any entity type
//!
//! ## Delivery
//!
//! - `EmailSender` - Sends one composed email
//! - `SlackNotifier` - Posts one composed Slack message
//!
//! ## Q&A
//!
//! - `QuestionAnswerer` - Produces an answer for a question

mod email_sender;
mod entity_store;
mod question_answerer;
mod slack_notifier;
mod transport_error;

pub use email_sender::EmailSender;
pub use entity_store::EntityStore;
pub use question_answerer::QuestionAnswerer;
pub use slack_notifier::SlackNotifier;
pub use transport_error::TransportError;
