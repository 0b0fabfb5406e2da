//! Bag module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then generates a new bag.
//!
//! Seeded bags are fully deterministic, which the tests rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag; 7 means exhausted
    bag_index: usize,
    /// Number of completed refills
    refills: u64,
    rng: StdRng,
}

impl PieceBag {
    /// Create a bag seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a deterministic bag
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
            refills: 0,
            rng,
        }
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
        self.refills += 1;
    }

    /// Draw the next piece, refilling first when the bag is empty
    pub fn next(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// The kind [`PieceBag::next`] will return, without consuming it.
    ///
    /// When the bag is empty the next bag is shuffled on a clone of the RNG, so the
    /// preview matches the following draw and the main RNG is left untouched.
    pub fn peek(&self) -> PieceKind {
        if self.bag_index < self.bag.len() {
            return self.bag[self.bag_index];
        }

        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        next_bag.shuffle(&mut preview_rng);
        next_bag[0]
    }

    /// Kinds left in the current bag, in draw order
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index.min(self.bag.len())..]
    }

    /// How many times the bag has been refilled
    pub fn refills(&self) -> u64 {
        self.refills
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_bag_is_empty_until_first_draw() {
        let mut bag = PieceBag::with_seed(1);
        assert!(bag.remaining().is_empty());
        assert_eq!(bag.refills(), 0);

        bag.next();
        assert_eq!(bag.remaining().len(), 6);
        assert_eq!(bag.refills(), 1);
    }

    #[test]
    fn test_seeded_bags_are_deterministic() {
        let mut a = PieceBag::with_seed(12345);
        let mut b = PieceBag::with_seed(12345);
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_peek_matches_next_across_refill() {
        let mut bag = PieceBag::with_seed(7);
        for _ in 0..20 {
            let peeked = bag.peek();
            assert_eq!(peeked, bag.next());
        }
    }

    #[test]
    fn test_eighth_draw_starts_new_bag() {
        let mut bag = PieceBag::with_seed(3);
        for _ in 0..7 {
            bag.next();
        }
        assert_eq!(bag.refills(), 1);
        bag.next();
        assert_eq!(bag.refills(), 2);
        assert_eq!(bag.remaining().len(), 6);
    }
}
