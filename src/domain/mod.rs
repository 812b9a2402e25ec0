//! Domain types - pure release data independent of any transport

pub mod rate;
pub mod release;
pub mod version;

pub use rate::RateInfo;
pub use release::{Release, ReleaseNote};
pub use version::TaggedVersion;
