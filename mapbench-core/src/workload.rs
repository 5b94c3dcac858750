//! Built-in Workloads
//!
//! | Workload | Input | Transform |
//! |----------|-------|-----------|
//! | `characters` | random draw from an alphabet | character to code point |
//! | `integers` | `0..n` | square |

use crate::generate::SequenceError;
use serde::{Deserialize, Serialize};

/// Largest integer sequence whose squares all fit in a `u64`
pub const MAX_INTEGER_COUNT: u64 = 1 << 32;

/// Input/transform pair timed under every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Random characters mapped to their code points
    Characters,
    /// Consecutive integers mapped to their squares
    Integers,
}

impl Workload {
    /// Workloads in the order they are run
    pub const ALL: [Workload; 2] = [Workload::Characters, Workload::Integers];

    /// Short identifier used in machine-readable output
    pub fn name(self) -> &'static str {
        match self {
            Workload::Characters => "characters",
            Workload::Integers => "integers",
        }
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Code point of a character
#[inline]
pub fn char_code(c: char) -> u32 {
    c as u32
}

/// Square of an integer; callers keep inputs below `MAX_INTEGER_COUNT`
#[inline]
pub fn square(x: u64) -> u64 {
    x * x
}

/// Materialize `0..count` as the integer workload input.
pub fn integer_sequence(count: usize) -> Result<Vec<u64>, SequenceError> {
    if count as u64 > MAX_INTEGER_COUNT {
        return Err(SequenceError::InvalidArgument(format!(
            "integer count {} exceeds {} (squares would overflow u64)",
            count, MAX_INTEGER_COUNT
        )));
    }
    Ok((0..count as u64).collect())
}
