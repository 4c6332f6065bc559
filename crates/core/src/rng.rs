//! RNG module - uniform random piece generation
//!
//! Each draw picks one of the seven kinds with equal probability,
//! independently of earlier draws. There is no bag: the same kind can come up
//! any number of times in a row.
//!
//! The generator is seeded so a game can be replayed from its seed.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Seeded uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    seed: u64,
}

impl PieceGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from the OS random source
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a kind uniformly at random
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::COUNT)]
    }

    /// Draw a kind and place it at its spawn position
    pub fn next_piece(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
