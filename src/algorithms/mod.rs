// src/algorithms/mod.rs
//
// Classical emulation of Shor's algorithm.
//
// The quantum circuit in Shor's algorithm exists to find the multiplicative
// order r of a random witness X modulo N; everything around that step is
// classical bookkeeping. This module keeps the bookkeeping and swaps the
// quantum step for a brute-force order search:
//
// Step                      Component             Where
// ─────────────────────────────────────────────────────────────────────
// pick a witness X          StaticRandom          core/static_random.rs
// lucky split via gcd(X,N)  GCD                   integer_math/gcd.rs
// order of X mod N          PeriodFinder          integer_math/period.rs
// primality of entries      Primality             integer_math/primality.rs
// orchestration             FactorizationEngine   algorithms/shor.rs
//
// The result is exact but exponential-ish in the bit length of N: an
// educational reference for small N, not a cryptanalytic tool.
//
// Usage:
//   let n = BigInt::from(299);
//   let factors = factorize(&n, false)?;   // [13, 23] in some order

pub mod shor;

pub use shor::{factorize, FactorizationEngine, Worklist};
