//! Stub delivery transports.
//!
//! Both adapters log the outbound payload and report success with a
//! synthetic message id. A real SMTP/API or webhook client implements the
//! same ports.

mod logging_email_sender;
mod logging_slack_notifier;

pub use logging_email_sender::LoggingEmailSender;
pub use logging_slack_notifier::LoggingSlackNotifier;
