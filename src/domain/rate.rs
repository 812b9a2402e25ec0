use std::fmt;

/// Rate-limit state passed through from the listing API.
///
/// Carried alongside comparison results so callers can see their remaining
/// quota; never interpreted by the comparison pipeline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateInfo {
    pub limit: u32,
    pub remaining: u32,
    pub reset: u64,
}

impl RateInfo {
    /// Create rate info from the three header values
    pub fn new(limit: u32, remaining: u32, reset: u64) -> Self {
        RateInfo {
            limit,
            remaining,
            reset,
        }
    }
}

impl fmt::Display for RateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} remaining, resets at {}",
            self.remaining, self.limit, self.reset
        )
    }
}
