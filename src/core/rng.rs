//! RNG module - seedable randomness for piece selection.
//!
//! A small LCG keeps piece choice deterministic under an injected seed,
//! which is what the tests need; the binary seeds from the wall clock.

use crate::core::pieces::{PieceShape, PIECE_COUNT, SHAPES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws the shape for each spawn cycle: a uniform catalog index and an
/// independent uniform rotation count in [0, 4).
#[derive(Debug, Clone)]
pub struct PieceSelector {
    rng: SimpleRng,
}

impl PieceSelector {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// The next piece, already rotated into its spawn orientation.
    pub fn next_shape(&mut self) -> PieceShape {
        let index = self.rng.next_range(PIECE_COUNT as u32) as usize;
        let turns = self.rng.next_range(4);
        let mut shape = SHAPES[index];
        for _ in 0..turns {
            shape = shape.rotated_cw();
        }
        shape
    }
}
