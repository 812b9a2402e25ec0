pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod listing;
pub mod sequence;
pub mod session;
pub mod ui;

pub use error::{ReleaseGapError, Result};
pub use session::{compare, CompareOptions, Comparison, Session};
