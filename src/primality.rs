//! The primality oracle: deliberate brute-force trial division.

use num_integer::Integer;
use num_traits::{FromPrimitive, NumRef, RefNum};

/// Bounds for the integers the oracle and the candidate walk operate on.
/// Satisfied by the machine-word types as well as `num_bigint::BigUint`.
pub trait CandidateBase: Integer + Clone + FromPrimitive + NumRef {}
impl<T: Integer + Clone + FromPrimitive + NumRef> CandidateBase for T {}

/// Reference-arithmetic counterpart of [`CandidateBase`].
pub trait CandidateRef<Base>: RefNum<Base> {}
impl<T, Base> CandidateRef<Base> for T where T: RefNum<Base> {}

/// Ceiling half of `n`: n/2 when n is even, (n+1)/2 when n is odd.
///
/// This is the inclusive upper bound of the trial-division loop; the
/// round-up on odd input decides whether the exact half-boundary divisor
/// gets tried.
pub fn half<T: CandidateBase>(n: &T) -> T
where
    for<'r> &'r T: CandidateRef<T>,
{
    let two = T::from_u8(2).unwrap();
    if n.is_even() {
        n / &two
    } else {
        (n + T::one()) / &two
    }
}

/// Whether `target` is prime, decided by trial division.
///
/// Shortcut ladder, applied in order: 2 and 5 accept immediately; even
/// numbers reject; numbers with trailing decimal digit 5 reject; then every
/// odd divisor from 3 through [`half`] of the target is tried in turn.
/// Pure and idempotent. Intended domain is target >= 2.
pub fn is_prime<T: CandidateBase>(target: &T) -> bool
where
    for<'r> &'r T: CandidateRef<T>,
{
    let two = T::from_u8(2).unwrap();
    let five = T::from_u8(5).unwrap();
    if target == &two || target == &five {
        return true;
    }
    if target.is_even() {
        return false;
    }
    // any integer above 5 with trailing decimal digit 5 is a multiple of 5
    let ten = T::from_u8(10).unwrap();
    if target % &ten == five {
        return false;
    }

    let bound = half(target);
    let mut divisor = T::from_u8(3).unwrap();
    while divisor <= bound {
        if target.is_multiple_of(&divisor) {
            return false;
        }
        divisor = divisor + &two;
    }
    true
}
