//! The candidate walk: every integer worth testing for primality.

use crate::primality::{CandidateBase, CandidateRef};

/// Step rule for walking the integer line: 2 steps to 3, everything else
/// steps by 2, so all values produced after the first step are odd. Pure
/// and total.
pub fn next_candidate<T: CandidateBase>(current: &T) -> T
where
    for<'r> &'r T: CandidateRef<T>,
{
    let two = T::from_u8(2).unwrap();
    if current == &two {
        current + T::one()
    } else {
        current + two
    }
}

/// Lazy, infinite sequence of candidates: 2, 3, 5, 7, 9, 11, ...
///
/// Restartable: a fresh [`Candidates::new`] begins over from 2.
#[derive(Clone)]
pub struct Candidates<T> {
    next: T,
}

impl<T: CandidateBase> Candidates<T> {
    /// Start the walk from 2.
    pub fn new() -> Self {
        Candidates {
            next: T::from_u8(2).unwrap(),
        }
    }

    /// Begin the walk at an arbitrary value instead of 2.
    pub fn starting_at(start: T) -> Self {
        Candidates { next: start }
    }
}

impl<T: CandidateBase> Iterator for Candidates<T>
where
    for<'r> &'r T: CandidateRef<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.clone();
        self.next = next_candidate(&current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn walk_prefix_from_two() {
        let walk: Vec<u64> = Candidates::new().take(11).collect();
        assert_eq!(walk, [2, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21]);
    }

    #[test]
    fn step_rule() {
        assert_eq!(next_candidate(&2u64), 3);
        assert_eq!(next_candidate(&3u64), 5);
        assert_eq!(next_candidate(&9u64), 11);
        assert_eq!(next_candidate(&BigUint::from(2u8)), BigUint::from(3u8));
    }

    #[test]
    fn restart_and_arbitrary_start() {
        let again: Vec<u64> = Candidates::new().take(3).collect();
        assert_eq!(again, [2, 3, 5]);
        let from_nine: Vec<u64> = Candidates::starting_at(9).take(3).collect();
        assert_eq!(from_nine, [9, 11, 13]);
    }
}
