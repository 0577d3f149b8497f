// src/integer_math/primality.rs

use num::{BigInt, Integer, One};

pub struct Primality;

impl Primality {
    /// Deterministic trial-division primality test.
    ///
    /// Divides by every odd i with i * i <= n, so the answer is exact for
    /// any n at O(sqrt(n)) cost. The engine only ever feeds it worklist
    /// entries small enough for the brute-force period search, where this
    /// is fine.
    pub fn is_prime(n: &BigInt) -> bool {
        let two = BigInt::from(2);
        let three = BigInt::from(3);

        if n <= &BigInt::one() {
            return false;
        }
        if n == &two || n == &three {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let mut divisor = three;
        loop {
            let square = &divisor * &divisor;
            if &square > n {
                break;
            }
            if n.is_multiple_of(&divisor) {
                return false;
            }
            divisor += 2;
        }

        true
    }
}
