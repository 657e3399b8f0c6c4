use thiserror::Error;

use crate::core::charset::{filter_ambiguous, LOWER, NUMBERS, SYMBOLS, UPPER};
use crate::core::ports::Constraints;

/// "Draw at least `min_count` characters from `pool`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub pool: Vec<u8>,
    pub min_count: usize,
}

/// One-shot sampling plan; built fresh per generation call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub target_length: usize,
    pub requirements: Vec<Requirement>,
    pub filler_pool: Vec<u8>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("length {length} is too small for the requested minimums (need at least {required})")]
    LengthTooSmall { required: usize, length: usize },
    #[error("no characters available with the selected options")]
    NoCharactersAvailable,
}

pub fn build_plan(c: &Constraints) -> Result<GenerationPlan, PlanError> {
    let prepare = |enabled: bool, base: &[u8]| -> Vec<u8> {
        if !enabled {
            return Vec::new();
        }
        if c.avoid_ambiguous {
            filter_ambiguous(base.to_vec())
        } else {
            base.to_vec()
        }
    };

    // A class emptied by filtering contributes nothing; registry order is
    // upper, lower, numbers, symbols.
    let upper = prepare(c.upper, UPPER);
    let lower = prepare(c.lower, LOWER);
    let numbers = prepare(c.digits, NUMBERS);
    let symbols = prepare(c.symbols, SYMBOLS);

    let mut requirements: Vec<Requirement> = Vec::new();

    let min_letters = c.min_letters.unwrap_or(1) as usize;
    match (!lower.is_empty(), !upper.is_empty()) {
        (true, true) => {
            // Mixed case: one of each is mandatory; a catch-all requirement
            // over both cases tops the alphabetic minimum up without
            // double-counting the two guaranteed draws.
            requirements.push(Requirement {
                pool: lower.clone(),
                min_count: 1,
            });
            requirements.push(Requirement {
                pool: upper.clone(),
                min_count: 1,
            });
            let mut both = lower.clone();
            both.extend_from_slice(&upper);
            requirements.push(Requirement {
                pool: both,
                min_count: min_letters.saturating_sub(2),
            });
        }
        (true, false) => requirements.push(Requirement {
            pool: lower.clone(),
            min_count: min_letters,
        }),
        (false, true) => requirements.push(Requirement {
            pool: upper.clone(),
            min_count: min_letters,
        }),
        (false, false) => {}
    }

    if !numbers.is_empty() {
        requirements.push(Requirement {
            pool: numbers.clone(),
            min_count: c.min_digits.unwrap_or(1) as usize,
        });
    }
    if !symbols.is_empty() {
        requirements.push(Requirement {
            pool: symbols.clone(),
            min_count: c.min_symbols.unwrap_or(1) as usize,
        });
    }

    let target_length = c.length as usize;
    let required: usize = requirements.iter().map(|r| r.min_count).sum();
    if required > target_length {
        return Err(PlanError::LengthTooSmall {
            required,
            length: target_length,
        });
    }

    // Classes are disjoint, so concatenating them is the set union.
    let mut filler_pool = Vec::with_capacity(
        upper.len() + lower.len() + numbers.len() + symbols.len(),
    );
    for pool in [&upper, &lower, &numbers, &symbols] {
        filler_pool.extend_from_slice(pool);
    }
    if filler_pool.is_empty() {
        return Err(PlanError::NoCharactersAvailable);
    }

    Ok(GenerationPlan {
        target_length,
        requirements,
        filler_pool,
    })
}
