use anyhow::{anyhow, Result};
use ring::rand::{SecureRandom, SystemRandom};

use crate::core::ports::Rng;

pub struct SystemRng;

impl Rng for SystemRng {
    fn fill(&self, bytes: &mut [u8]) -> Result<()> {
        let rng = SystemRandom::new();
        rng.fill(bytes)
            .map_err(|_| anyhow!("failed to obtain system randomness"))
    }
}

/// Uniform integer in `[0, len)` via rejection sampling on the u32 space.
/// Naive `draw % len` would bias low values whenever `len` does not divide
/// 2^32 evenly; redrawing above the zone keeps every residue equally likely.
pub fn uniform_index(rng: &dyn Rng, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(anyhow!("empty pool"));
    }
    let n = len as u32;
    let zone = (u32::MAX / n) * n;
    loop {
        let mut b = [0u8; 4];
        rng.fill(&mut b)?;
        let x = u32::from_le_bytes(b);
        if x < zone {
            return Ok((x % n) as usize);
        }
    }
}

/// In-place Fisher-Yates shuffle driven by `uniform_index`.
pub fn fy_shuffle(rng: &dyn Rng, data: &mut [u8]) -> Result<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    for i in (1..data.len()).rev() {
        let j = uniform_index(rng, i + 1)?;
        data.swap(i, j);
    }
    Ok(())
}
