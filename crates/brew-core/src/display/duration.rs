//! Duration display utilities.

use std::fmt;

/// A number of seconds displayed as `m:ss`.
///
/// Minutes are not padded and grow past 59; seconds are always two digits.
/// `MinSec(105)` displays as `1:45`, `MinSec(3600)` as `60:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSec(pub u32);

impl fmt::Display for MinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}
