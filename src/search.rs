//! Walking the integer line: the ascending prime sequence and the
//! first-prime-after search.

use crate::candidate::Candidates;
use crate::primality::{is_prime, CandidateBase, CandidateRef};

/// Lazy, infinite sequence of primes in ascending order: the candidate walk
/// filtered through the oracle. A fresh [`Primes::new`] restarts from 2, so
/// a bounded prefix of the enumeration can be tested in isolation.
pub struct Primes<T> {
    candidates: Candidates<T>,
}

impl<T: CandidateBase> Primes<T> {
    pub fn new() -> Self {
        Primes {
            candidates: Candidates::new(),
        }
    }
}

impl<T: CandidateBase> Iterator for Primes<T>
where
    for<'r> &'r T: CandidateRef<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.candidates.by_ref().find(|c| is_prime(c))
    }
}

/// First prime strictly greater than `start`.
///
/// A start of 2 returns 3 without consulting the oracle. An even start is
/// first stepped back to the odd baseline below it, then candidates are
/// tested from baseline + 2 onward until the oracle accepts one; the walk
/// strictly increases and always terminates on a prime.
pub fn next_prime<T: CandidateBase>(start: &T) -> T
where
    for<'r> &'r T: CandidateRef<T>,
{
    let two = T::from_u8(2).unwrap();
    if start == &two {
        return T::from_u8(3).unwrap();
    }
    let mut base = start.clone();
    if base.is_even() && !base.is_zero() {
        // the zero check keeps the decrement inside the unsigned domain;
        // a start below 2 then searches from candidate 2
        base = base - T::one();
    }
    for candidate in Candidates::starting_at(&base + &two) {
        if is_prime(&candidate) {
            return candidate;
        }
    }
    unreachable!("the candidate walk is infinite")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{group_thousands, ordinal};
    use num_bigint::BigUint;

    const FIRST_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

    #[test]
    fn ascending_primes_prefix() {
        let first: Vec<u64> = Primes::new().take(10).collect();
        assert_eq!(first, FIRST_PRIMES);
    }

    #[test]
    fn sequence_restarts_from_two() {
        let again: Vec<u64> = Primes::new().take(3).collect();
        assert_eq!(again, [2, 3, 5]);
    }

    #[test]
    fn first_ten_terms_format_as_reported() {
        let expected = [
            "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
        ];
        for (i, prime) in Primes::<u64>::new().take(10).enumerate() {
            let term = ordinal(&group_thousands(&(i + 1).to_string()));
            assert_eq!(term, expected[i]);
            assert_eq!(prime, FIRST_PRIMES[i]);
        }
    }

    #[test]
    fn next_prime_after_two_is_three() {
        assert_eq!(next_prime(&2u64), 3);
    }

    #[test]
    fn next_prime_normalizes_even_starts() {
        assert_eq!(next_prime(&10u64), 11);
    }

    #[test]
    fn next_prime_walks_odd_starts() {
        assert_eq!(next_prime(&13u64), 17);
    }

    #[test]
    fn next_prime_large_start() {
        assert_eq!(
            next_prime(&BigUint::from(1_000_000u32)),
            BigUint::from(1_000_003u32)
        );
    }

    #[test]
    fn next_prime_below_the_domain_floor() {
        assert_eq!(next_prime(&0u64), 2);
        assert_eq!(next_prime(&1u64), 3);
    }
}
