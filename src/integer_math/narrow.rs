// src/integer_math/narrow.rs

use num::{BigInt, ToPrimitive};

use crate::core::error::ShorError;

/// Narrows an arbitrary-precision value to a machine integer.
///
/// Fails rather than truncates: a silently clipped factor is a wrong
/// factor.
pub fn to_machine_int(value: &BigInt) -> Result<i64, ShorError> {
    value
        .to_i64()
        .ok_or_else(|| ShorError::Narrowing(value.clone()))
}
