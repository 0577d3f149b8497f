// tests/factorization_tests.rs
//
// End-to-end properties of the classical Shor factorization engine.

use num::{BigInt, One};
use shor::algorithms::{factorize, FactorizationEngine};
use shor::core::error::ShorError;

#[cfg(test)]
mod factorization_tests {
    use super::*;

    fn sorted_factors(engine: &mut FactorizationEngine, n: u64) -> Vec<BigInt> {
        let mut factors = engine.factorize(&BigInt::from(n)).unwrap();
        factors.sort();
        factors
    }

    fn bigints(values: &[u64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_zero_is_always_rejected() {
        for seed in 0..10u64 {
            let mut engine = FactorizationEngine::with_seed(seed, false);
            let result = engine.factorize(&BigInt::from(0u64));
            assert!(
                matches!(result, Err(ShorError::InvalidParameter(_))),
                "N = 0 must be rejected regardless of the witness stream"
            );
        }
    }

    #[test]
    fn test_trivial_targets_are_returned_as_is() {
        for n in 1..=3u64 {
            let factors = factorize(&BigInt::from(n), false).unwrap();
            assert_eq!(factors, vec![BigInt::from(n)]);
        }
    }

    #[test]
    fn test_prime_targets_are_fixed_points() {
        for n in [5u64, 13, 23, 97, 101, 997] {
            let factors = factorize(&BigInt::from(n), false).unwrap();
            assert_eq!(factors, vec![BigInt::from(n)], "{} is prime", n);
        }
    }

    #[test]
    fn test_square_of_prime_keeps_multiplicity() {
        // 49 = 7 * 7
        let mut engine = FactorizationEngine::with_seed(7, false);
        assert_eq!(sorted_factors(&mut engine, 49), bigints(&[7, 7]));
    }

    #[test]
    fn test_distinct_semiprime() {
        // 299 = 13 * 23
        let mut engine = FactorizationEngine::with_seed(11, false);
        assert_eq!(sorted_factors(&mut engine, 299), bigints(&[13, 23]));
    }

    #[test]
    fn test_composite_of_three_primes() {
        // 2093 = 7 * 13 * 23
        let mut engine = FactorizationEngine::with_seed(13, false);
        assert_eq!(sorted_factors(&mut engine, 2093), bigints(&[7, 13, 23]));
    }

    #[test]
    fn test_product_invariant_over_a_range() {
        let mut engine = FactorizationEngine::with_seed(17, false);
        for n in 1..=300u64 {
            let factors = engine.factorize(&BigInt::from(n)).unwrap();
            let product = factors.iter().fold(BigInt::one(), |acc, f| acc * f);
            assert_eq!(
                product,
                BigInt::from(n),
                "factors of {} must multiply back to it",
                n
            );
        }
    }

    #[test]
    fn test_verbose_does_not_change_the_result() {
        for seed in [1u64, 2, 3, 42] {
            let mut quiet = FactorizationEngine::with_seed(seed, false);
            let mut loud = FactorizationEngine::with_seed(seed, true);
            let n = BigInt::from(2093u64);
            assert_eq!(
                quiet.factorize(&n).unwrap(),
                loud.factorize(&n).unwrap(),
                "verbosity is a pure side channel"
            );
        }
    }

    #[test]
    fn test_randomized_stability() {
        // 1155 = 3 * 5 * 7 * 11; every witness stream must land on the
        // same multiset.
        for run in 0..20u64 {
            let mut engine = FactorizationEngine::with_seed(run, false);
            assert_eq!(sorted_factors(&mut engine, 1155), bigints(&[3, 5, 7, 11]));
        }
    }

    #[test]
    fn test_entropy_seeded_engine_agrees() {
        let mut factors = factorize(&BigInt::from(221u64), false).unwrap(); // 13 * 17
        factors.sort();
        assert_eq!(factors, bigints(&[13, 17]));
    }
}
