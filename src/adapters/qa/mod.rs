//! Question answering adapters.

mod canned_answerer;

pub use canned_answerer::CannedAnswerer;
