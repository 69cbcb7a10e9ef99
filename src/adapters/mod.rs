//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory entity stores
//! - `delivery` - Logging email and Slack transports
//! - `qa` - Canned question answering
//! - `fixtures` - Seed data for demo mode
//! - `http` - Axum REST surface

pub mod delivery;
pub mod fixtures;
pub mod http;
pub mod memory;
pub mod qa;

pub use delivery::{LoggingEmailSender, LoggingSlackNotifier};
pub use fixtures::SeedData;
pub use self::http::{app_router, AppState};
pub use memory::InMemoryStore;
pub use qa::CannedAnswerer;
