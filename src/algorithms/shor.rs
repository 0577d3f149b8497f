// src/algorithms/shor.rs
//
// Shor's prime factorization with a classical period-finding subroutine.
//
// The engine keeps a worklist of not-yet-proven-prime components of N.
// Composite entries are split either by a lucky witness (gcd(X, N') > 1)
// or by deriving gcd(X^(r/2) ± 1, N') from the witness's multiplicative
// order r, and the parts go back on the worklist until everything left
// is prime.

use log::{debug, info};
use num::{BigInt, Integer, One, Signed, Zero};

use crate::core::error::ShorError;
use crate::core::static_random::StaticRandom;
use crate::integer_math::gcd::GCD;
use crate::integer_math::period::PeriodFinder;
use crate::integer_math::primality::Primality;

/// Ordered collection of the not-yet-fully-factored components of N.
///
/// Entries left of the cursor have been accepted as final (prime, or a
/// trivial 1 from a degenerate split). The product of all entries equals
/// the original N after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Worklist {
    entries: Vec<BigInt>,
    cursor: usize,
}

impl Worklist {
    pub fn new(n: &BigInt) -> Self {
        Worklist {
            entries: vec![n.clone()],
            cursor: 0,
        }
    }

    /// The entry under the cursor, or None once the scan is complete.
    pub fn current(&self) -> Option<&BigInt> {
        self.entries.get(self.cursor)
    }

    /// Accepts the current entry as final and moves the scan forward.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Removes the current entry so it can be split.
    pub fn take_current(&mut self) -> BigInt {
        self.entries.remove(self.cursor)
    }

    /// Appends a split result for a later scan pass.
    pub fn push(&mut self, value: BigInt) {
        self.entries.push(value);
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn entries(&self) -> &[BigInt] {
        &self.entries
    }

    /// Product over all entries. Stays equal to the original N.
    pub fn product(&self) -> BigInt {
        self.entries
            .iter()
            .fold(BigInt::one(), |acc, entry| acc * entry)
    }

    /// Ends the run: drops the trivial 1 entries and hands over the primes.
    pub fn into_factors(self) -> Vec<BigInt> {
        self.entries
            .into_iter()
            .filter(|entry| !entry.is_one())
            .collect()
    }
}

/// Factors integers by emulating Shor's algorithm with a classical
/// order-finding subroutine.
///
/// The random source is owned by the engine, so a seeded engine replays
/// the exact same witness sequence: two engines built from the same seed
/// produce identical factor sequences for the same input.
pub struct FactorizationEngine {
    rng: StaticRandom,
    verbose: bool,
}

impl FactorizationEngine {
    pub fn new(verbose: bool) -> Self {
        FactorizationEngine {
            rng: StaticRandom::new(),
            verbose,
        }
    }

    pub fn with_seed(seed: u64, verbose: bool) -> Self {
        FactorizationEngine {
            rng: StaticRandom::from_seed(seed),
            verbose,
        }
    }

    /// Prime factors of n, with multiplicity, in no promised order.
    ///
    /// The product of the returned factors equals n. Fails with
    /// `InvalidParameter` for n <= 0; n in {1, 2, 3} is returned as-is.
    pub fn factorize(&mut self, n: &BigInt) -> Result<Vec<BigInt>, ShorError> {
        if n.is_zero() {
            return Err(ShorError::InvalidParameter(
                "N = 0 has no prime factorization".to_string(),
            ));
        }
        if n.is_negative() {
            return Err(ShorError::InvalidParameter(format!(
                "N = {} is negative; only non-negative targets can be factored",
                n
            )));
        }
        if n <= &BigInt::from(3) {
            return Ok(vec![n.clone()]);
        }

        let mut worklist = Worklist::new(n);

        loop {
            let current = match worklist.current() {
                Some(entry) => entry.clone(),
                None => break,
            };

            if current.is_one() || Primality::is_prime(&current) {
                if self.verbose {
                    info!("{} is final, moving to the next entry", current);
                }
                worklist.advance();
                continue;
            }

            let target = worklist.take_current();
            self.split(&target, &mut worklist)?;

            if self.verbose {
                info!("worklist is now {:?}", worklist.entries());
            }
        }

        let factors = worklist.into_factors();
        debug!("factored {} into {:?}", n, factors);
        Ok(factors)
    }

    /// One witness trial against a composite entry. Pushes either a
    /// two-part split or, when the attempt degenerates, the entry itself
    /// back onto the worklist for a fresh witness.
    fn split(&mut self, target: &BigInt, worklist: &mut Worklist) -> Result<(), ShorError> {
        let x = self.rng.next_bigint(&BigInt::one(), &(target - 2));
        if self.verbose {
            info!("trying witness X = {} against N = {}", x, target);
        }

        let g = GCD::find_gcd_pair(&x, target);
        if !g.is_one() {
            // The witness itself shares a factor with N. No period needed.
            if self.verbose {
                info!("lucky guess: gcd({}, {}) = {}", x, target, g);
            }
            if &g == target {
                worklist.push(g);
            } else {
                let quotient = target / &g;
                worklist.push(g);
                worklist.push(quotient);
            }
            return Ok(());
        }

        let r = PeriodFinder::find_period(&x, target)?;
        if self.verbose {
            info!("period of {} mod {} is {}", x, target, r);
        }

        if r.is_odd() {
            // r/2 truncates, so an odd period cannot yield a valid split.
            debug!("period {} is odd, resampling a witness for {}", r, target);
            worklist.push(target.clone());
            return Ok(());
        }

        // X^r = 1 (mod N), so N divides (X^(r/2) - 1)(X^(r/2) + 1) and the
        // two gcds below carve N's prime powers into two camps. Only the
        // residue of X^(r/2) matters to either gcd.
        let m = x.modpow(&(&r / 2), target);
        let p = GCD::find_gcd_pair(&(&m + 1), target);
        let q = GCD::find_gcd_pair(&(&m - 1), target);

        if &p * &q != *target {
            debug!(
                "split of {} degenerated ({} * {} != {}), resampling a witness",
                target, p, q, target
            );
            worklist.push(target.clone());
            return Ok(());
        }

        if self.verbose {
            info!("split {} into {} * {}", target, p, q);
        }
        worklist.push(p);
        worklist.push(q);
        Ok(())
    }
}

/// One-shot factorization with an entropy-seeded engine.
pub fn factorize(n: &BigInt, verbose: bool) -> Result<Vec<BigInt>, ShorError> {
    let mut engine = FactorizationEngine::new(verbose);
    engine.factorize(n)
}
