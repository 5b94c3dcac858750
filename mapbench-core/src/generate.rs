//! Random Input Generation
//!
//! Draws benchmark input uniformly, with replacement, from a fixed alphabet.

use rand::Rng;
use thiserror::Error;

/// Errors raised while preparing benchmark input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An argument cannot produce a valid sequence
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Draw `count` elements independently and uniformly from `alphabet`.
///
/// An empty alphabet is only accepted when nothing is requested.
pub fn generate_random_sequence<T, R>(
    alphabet: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, SequenceError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if alphabet.is_empty() {
        if count == 0 {
            return Ok(Vec::new());
        }
        return Err(SequenceError::InvalidArgument(format!(
            "cannot draw {} elements from an empty alphabet",
            count
        )));
    }

    tracing::debug!(count, alphabet_len = alphabet.len(), "generating random sequence");

    let len = alphabet.len();
    Ok((0..count)
        .map(|_| alphabet[rng.gen_range(0..len)].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letters() -> Vec<char> {
        crate::DEFAULT_ALPHABET.chars().collect()
    }

    #[test]
    fn test_length_matches_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 5, 100, 10_000] {
            let seq = generate_random_sequence(&letters(), count, &mut rng).unwrap();
            assert_eq!(seq.len(), count);
        }
    }

    #[test]
    fn test_elements_come_from_alphabet() {
        let alphabet = letters();
        let mut rng = StdRng::seed_from_u64(11);
        let seq = generate_random_sequence(&alphabet, 5_000, &mut rng).unwrap();
        assert!(seq.iter().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_draws_with_replacement() {
        // More draws than symbols forces repeats
        let mut rng = StdRng::seed_from_u64(3);
        let seq = generate_random_sequence(&['x', 'y'], 50, &mut rng).unwrap();
        let unique: std::collections::HashSet<_> = seq.iter().collect();
        assert_eq!(seq.len(), 50);
        assert!(unique.len() <= 2);
    }

    #[test]
    fn test_covers_alphabet() {
        let alphabet = letters();
        let mut rng = StdRng::seed_from_u64(42);
        let seq = generate_random_sequence(&alphabet, 10_000, &mut rng).unwrap();
        for symbol in &alphabet {
            assert!(seq.contains(symbol), "symbol {} never drawn", symbol);
        }
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [char; 0] = [];
        let err = generate_random_sequence(&empty, 3, &mut rng).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidArgument(_)));
        assert!(err.to_string().contains("empty alphabet"));
    }

    #[test]
    fn test_empty_alphabet_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [u8; 0] = [];
        let seq = generate_random_sequence(&empty, 0, &mut rng).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let alphabet = letters();
        let a = generate_random_sequence(&alphabet, 256, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_random_sequence(&alphabet, 256, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
