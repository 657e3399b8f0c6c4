use anyhow::Result;
use std::sync::Arc;

use crate::core::assembler::assemble;
use crate::core::planner::build_plan;
use crate::core::ports::{Constraints, Rng};

pub struct SecretGenerator {
    rng: Arc<dyn Rng>,
}

impl SecretGenerator {
    pub fn new(rng: Arc<dyn Rng>) -> Self {
        Self { rng }
    }

    /// Plan, assemble, done. Plan errors carry the user-facing guidance
    /// message; randomness failure aborts the operation outright.
    pub fn generate(&self, constraints: &Constraints) -> Result<String> {
        let plan = build_plan(constraints)?;
        assemble(&*self.rng, &plan)
    }

    /// Repeated independent calls; no state is shared between secrets.
    pub fn generate_many(&self, constraints: &Constraints, count: usize) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.generate(constraints)?);
        }
        Ok(out)
    }
}
