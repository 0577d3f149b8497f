// src/integer_math/period.rs

use log::trace;
use num::{BigInt, One, Zero};

use crate::core::error::ShorError;
use crate::integer_math::gcd::GCD;

pub struct PeriodFinder;

impl PeriodFinder {
    /// Multiplicative order of x mod n: the least r > 0 with
    /// x^r = 1 (mod n).
    ///
    /// This is the classical stand-in for the quantum order-finding step:
    /// it simply tries every r in [1, n), at a cost exponential in the bit
    /// length of n. Requires x and n nonzero and coprime; without
    /// coprimality no power of x ever returns to 1.
    pub fn find_period(x: &BigInt, n: &BigInt) -> Result<BigInt, ShorError> {
        if x.is_zero() || n.is_zero() {
            return Err(ShorError::InvalidParameter(
                "the period of x^r mod n is undefined when x or n is zero".to_string(),
            ));
        }
        if !GCD::are_coprime(&[x.clone(), n.clone()]) {
            return Err(ShorError::InvalidParameter(format!(
                "{} and {} share a factor, so x^r mod n never reaches 1",
                x, n
            )));
        }

        let mut r = BigInt::one();
        while &r < n {
            if x.modpow(&r, n).is_one() {
                trace!("period of {} mod {} is {}", x, n, r);
                return Ok(r);
            }
            r += 1;
        }

        // Lagrange: the order divides phi(n) < n, so the scan above cannot
        // run dry once the coprimality precondition holds.
        Err(ShorError::InternalInvariantViolation(format!(
            "no period found for {} mod {} within [1, {})",
            x, n, n
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_period(x: u64, n: u64) -> Result<BigInt, ShorError> {
        PeriodFinder::find_period(&BigInt::from(x), &BigInt::from(n))
    }

    #[test]
    fn test_order_of_three_mod_five() {
        assert_eq!(find_period(3, 5).unwrap(), BigInt::from(4));
    }

    #[test]
    fn test_order_of_two_mod_five() {
        assert_eq!(find_period(2, 5).unwrap(), BigInt::from(4));
    }

    #[test]
    fn test_order_of_four_mod_five() {
        assert_eq!(find_period(4, 5).unwrap(), BigInt::from(2));
    }

    #[test]
    fn test_order_of_one_is_one() {
        assert_eq!(find_period(1, 7).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_non_coprime_pair_is_rejected() {
        assert!(matches!(
            find_period(3, 9),
            Err(ShorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_arguments_are_rejected() {
        assert!(matches!(
            find_period(0, 15),
            Err(ShorError::InvalidParameter(_))
        ));
        assert!(matches!(
            find_period(4, 0),
            Err(ShorError::InvalidParameter(_))
        ));
    }
}
