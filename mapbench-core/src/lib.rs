#![warn(missing_docs)]
//! mapbench Core - Measurement Runtime
//!
//! This crate provides the building blocks of a mapping benchmark:
//! - `generate_random_sequence` for uniform sampling with replacement
//! - `time_operation` and `Timer` on top of the monotonic clock
//! - The two mapping strategies (explicit accumulation vs. iterator collection)
//! - The built-in workloads (character codes and integer squares)

mod generate;
mod measure;
mod strategy;
mod workload;

pub use generate::{SequenceError, generate_random_sequence};
pub use measure::{TimingSample, Timer, time_operation};
pub use strategy::{Strategy, map_accumulate, map_collect, map_elementwise};
pub use workload::{MAX_INTEGER_COUNT, Workload, char_code, integer_sequence, square};

/// Alphabet the character workload draws from by default
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmn";

/// Default number of characters drawn for the character workload
pub const DEFAULT_CHARACTER_COUNT: usize = 2_000_000;

/// Default length of the integer workload input
pub const DEFAULT_INTEGER_COUNT: usize = 1_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_ALPHABET.chars().count(), 14);
        assert_eq!(DEFAULT_CHARACTER_COUNT, 2_000_000);
        assert_eq!(DEFAULT_INTEGER_COUNT, 1_000_000);
    }
}
