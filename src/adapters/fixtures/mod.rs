//! Seed fixtures loaded at start-up when `features.use_mock_data` is on.

mod seed;

pub use seed::SeedData;
