// src/integer_math/gcd.rs

use num::{BigInt, Signed, Zero};

pub struct GCD;

impl GCD {
    pub fn find_gcd(numbers: &[BigInt]) -> BigInt {
        numbers
            .iter()
            .fold(BigInt::zero(), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    /// Iterative Euclid: while b != 0, (a, b) = (b, a mod b).
    ///
    /// gcd(a, 0) is a. Zero is the loop's own terminal modulus, not an
    /// invalid input.
    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        let mut a = left.abs();
        let mut b = right.abs();

        while !b.is_zero() {
            let remainder = &a % &b;
            a = b;
            b = remainder;
        }

        a
    }

    pub fn are_coprime(numbers: &[BigInt]) -> bool {
        Self::find_gcd(numbers) == BigInt::from(1)
    }
}
