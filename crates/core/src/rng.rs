//! RNG module - where the next variant comes from
//!
//! Selection is plain uniform random: no bag, no history, no preview.
//! [`SequenceVariants`] replays a fixed list so tests and benches can script
//! exactly which pieces appear.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Variant;

/// Supplies the variant of each newly spawned piece.
pub trait VariantSource {
    fn next_variant(&mut self) -> Variant;
}

/// Uniformly random variants.
#[derive(Debug, Clone)]
pub struct RandomVariants {
    rng: StdRng,
}

impl RandomVariants {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomVariants {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantSource for RandomVariants {
    fn next_variant(&mut self) -> Variant {
        Variant::ALL[self.rng.gen_range(0..Variant::ALL.len())]
    }
}

/// Cycles through a fixed list forever.
#[derive(Debug, Clone)]
pub struct SequenceVariants {
    variants: Vec<Variant>,
    next: usize,
}

impl SequenceVariants {
    /// # Panics
    ///
    /// If `variants` is empty.
    pub fn new(variants: Vec<Variant>) -> Self {
        assert!(!variants.is_empty(), "SequenceVariants needs at least one variant");
        Self { variants, next: 0 }
    }

    /// Always the same variant.
    pub fn repeat(variant: Variant) -> Self {
        Self::new(vec![variant])
    }
}

impl VariantSource for SequenceVariants {
    fn next_variant(&mut self) -> Variant {
        let v = self.variants[self.next];
        self.next = (self.next + 1) % self.variants.len();
        v
    }
}

impl<S: VariantSource + ?Sized> VariantSource for Box<S> {
    fn next_variant(&mut self) -> Variant {
        (**self).next_variant()
    }
}
