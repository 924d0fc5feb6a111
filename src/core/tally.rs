//! Variadic summation over `f64` operands

use thiserror::Error;

/// Smallest number of operands `tally` accepts
pub const MIN_OPERANDS: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("At least two numbers are required")]
    InvalidArgumentCount { found: usize },
}

pub type TallyResult<T> = Result<T, TallyError>;

/// Sum all operands left to right, starting from zero.
///
/// Uses plain `f64` addition, so infinities and NaN propagate the way
/// IEEE-754 says they do. Fails when fewer than two operands are given.
pub fn tally(numbers: &[f64]) -> TallyResult<f64> {
    if numbers.len() < MIN_OPERANDS {
        return Err(TallyError::InvalidArgumentCount {
            found: numbers.len(),
        });
    }

    Ok(numbers.iter().fold(0.0, |total, num| total + num))
}

/// Same as [`tally`] for callers holding an iterator instead of a slice
pub fn tally_iter<I>(numbers: I) -> TallyResult<f64>
where
    I: IntoIterator<Item = f64>,
{
    let numbers: Vec<f64> = numbers.into_iter().collect();
    tally(&numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        // Integral expectations compare exactly, fractional ones with tolerance
        if expected.fract() == 0.0 {
            assert_eq!(actual, expected);
        } else {
            assert!(
                (actual - expected).abs() < 1e-9,
                "expected {} to be close to {}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_two_numbers() {
        assert_eq!(tally(&[3.0, 4.0]), Ok(7.0));
        assert_eq!(tally(&[-5.0, 17.0]), Ok(12.0));
    }

    #[test]
    fn test_many_numbers() {
        assert_eq!(tally(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(15.0));
    }

    #[test]
    fn test_fractional_numbers() {
        assert_close(tally(&[2.5, 2.5]).unwrap(), 5.0);
        assert_close(tally(&[0.1, 0.2]).unwrap(), 0.3);
        assert_close(tally(&[1.5, -0.25, 0.0]).unwrap(), 1.25);
    }

    #[test]
    fn test_zero_and_negatives() {
        assert_eq!(tally(&[0.0, 0.0]), Ok(0.0));
        assert_eq!(tally(&[-1.0, -2.0, -3.0]), Ok(-6.0));
    }

    #[test]
    fn test_too_few_operands() {
        assert_eq!(
            tally(&[]),
            Err(TallyError::InvalidArgumentCount { found: 0 })
        );
        let err = tally(&[5.0]).unwrap_err();
        assert_eq!(err, TallyError::InvalidArgumentCount { found: 1 });
        assert_eq!(err.to_string(), "At least two numbers are required");
    }

    #[test]
    fn test_special_values_propagate() {
        assert_eq!(tally(&[f64::INFINITY, 1.0]), Ok(f64::INFINITY));
        assert_eq!(tally(&[f64::NEG_INFINITY, -1.0]), Ok(f64::NEG_INFINITY));
        assert!(tally(&[f64::INFINITY, f64::NEG_INFINITY]).unwrap().is_nan());
        assert!(tally(&[f64::NAN, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_tally_iter() {
        assert_eq!(tally_iter((1..=4).map(f64::from)), Ok(10.0));
        assert_eq!(
            tally_iter(std::iter::once(1.0)),
            Err(TallyError::InvalidArgumentCount { found: 1 })
        );
    }

    fn operand() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    proptest! {
        #[test]
        fn tally_matches_independent_sum(numbers in prop::collection::vec(operand(), 2..32)) {
            let mut expected = 0.0;
            for n in &numbers {
                expected += n;
            }
            prop_assert_eq!(tally(&numbers).unwrap(), expected);
        }

        #[test]
        fn tally_commutes_within_tolerance(a in operand(), b in operand(), c in operand()) {
            let forward = tally(&[a, b, c]).unwrap();
            let backward = tally(&[c, b, a]).unwrap();
            prop_assert!((forward - backward).abs() <= 1e-6);
        }

        #[test]
        fn tally_is_deterministic(numbers in prop::collection::vec(operand(), 2..16)) {
            prop_assert_eq!(tally(&numbers), tally(&numbers));
        }

        #[test]
        fn tally_rejects_short_input(numbers in prop::collection::vec(operand(), 0..2)) {
            prop_assert_eq!(
                tally(&numbers),
                Err(TallyError::InvalidArgumentCount { found: numbers.len() })
            );
        }
    }
}
