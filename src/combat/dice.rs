//! Dice for combat rolls
//!
//! Combat never touches a global generator. Callers own a `Dice` and pass it
//! in, which lets tests script exact rolls with `LoadedDice`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::constants::{DIE_FACES, DIE_MIN};

/// Source of die rolls in `DIE_MIN..=DIE_FACES`
pub trait Dice {
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seed derived from the wall clock
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Uniform dice backed by a seedable generator
#[derive(Debug, Clone)]
pub struct RandomDice<R = ChaCha8Rng> {
    rng: R,
}

impl RandomDice<ChaCha8Rng> {
    /// Deterministic dice: the same seed always rolls the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDice<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(DIE_MIN..=DIE_FACES)
    }
}

/// Dice that replay a fixed script of faces, wrapping around at the end
///
/// Faces outside the die range are clamped onto it. An empty script rolls
/// the lowest face forever.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    faces: Vec<u8>,
    next: usize,
}

impl LoadedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces
                .into_iter()
                .map(|face| face.clamp(DIE_MIN, DIE_FACES))
                .collect(),
            next: 0,
        }
    }

    /// How many rolls have been made so far
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        if self.faces.is_empty() {
            return DIE_MIN;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}
