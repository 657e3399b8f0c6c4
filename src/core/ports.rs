use anyhow::Result;

use super::digest::ShaAlgorithm;

// Randomness provider for deterministic testing.
pub trait Rng: Send + Sync {
    fn fill(&self, bytes: &mut [u8]) -> Result<()>;
}

// Platform digest primitive for the SHA family. MD5 never goes through
// here; it has its own from-scratch engine.
pub trait ShaProvider: Send + Sync {
    fn digest(&self, algo: ShaAlgorithm, data: &[u8]) -> Vec<u8>;
}

// Secret composition constraints
#[derive(Debug, Clone)]
pub struct Constraints {
    pub length: u16,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub avoid_ambiguous: bool,
    // Per-group minimums; None means 1 for an enabled group.
    pub min_letters: Option<u16>,
    pub min_digits: Option<u16>,
    pub min_symbols: Option<u16>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            length: 20,
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            avoid_ambiguous: true,
            min_letters: None,
            min_digits: None,
            min_symbols: None,
        }
    }
}
