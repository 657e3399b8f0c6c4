use anyhow::Result;
use zeroize::Zeroize;

use crate::core::planner::GenerationPlan;
use crate::core::ports::Rng;
use crate::core::rng::{fy_shuffle, uniform_index};

/// Draw the plan's required characters, fill up to the target length from the
/// union pool, then shuffle so composition cannot be read off positions.
/// Callers must hand in a valid plan; errored plans never reach this point.
pub fn assemble(rng: &dyn Rng, plan: &GenerationPlan) -> Result<String> {
    let mut out: Vec<u8> = Vec::with_capacity(plan.target_length);

    for req in &plan.requirements {
        // Draws are independent; repeats within a pool are fine.
        for _ in 0..req.min_count {
            let idx = uniform_index(rng, req.pool.len())?;
            out.push(req.pool[idx]);
        }
    }

    while out.len() < plan.target_length {
        let idx = uniform_index(rng, plan.filler_pool.len())?;
        out.push(plan.filler_pool[idx]);
    }

    fy_shuffle(rng, &mut out)?;
    out.truncate(plan.target_length);

    let secret = String::from_utf8(out.clone())?;
    out.zeroize();
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planner::build_plan;
    use crate::core::ports::Constraints;
    use crate::core::rng::testing::MockRng;
    use crate::core::rng::SystemRng;

    #[test]
    fn secret_has_exact_target_length() {
        let plan = build_plan(&Constraints::default()).unwrap();
        let secret = assemble(&SystemRng, &plan).unwrap();
        assert_eq!(secret.len(), 20);
    }

    #[test]
    fn per_pool_minimums_are_met() {
        let c = Constraints {
            length: 12,
            min_letters: Some(4),
            min_digits: Some(3),
            min_symbols: Some(2),
            ..Constraints::default()
        };
        let plan = build_plan(&c).unwrap();
        for _ in 0..50 {
            let secret = assemble(&SystemRng, &plan).unwrap();
            assert_eq!(secret.len(), 12);
            let letters = secret.chars().filter(|c| c.is_ascii_alphabetic()).count();
            let digits = secret.chars().filter(|c| c.is_ascii_digit()).count();
            let symbols = secret
                .chars()
                .filter(|c| !c.is_ascii_alphanumeric())
                .count();
            assert!(letters >= 4, "letters {letters} in {secret}");
            assert!(digits >= 3, "digits {digits} in {secret}");
            assert!(symbols >= 2, "symbols {symbols} in {secret}");
            assert!(secret.chars().any(|c| c.is_ascii_lowercase()));
            assert!(secret.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn ambiguous_characters_never_appear_when_avoided() {
        let c = Constraints {
            length: 32,
            avoid_ambiguous: true,
            ..Constraints::default()
        };
        let plan = build_plan(&c).unwrap();
        for _ in 0..50 {
            let secret = assemble(&SystemRng, &plan).unwrap();
            assert!(
                secret.chars().all(|c| !"O0l1".contains(c)),
                "ambiguous char in {secret}"
            );
        }
    }

    #[test]
    fn deterministic_rng_gives_deterministic_secret() {
        let plan = build_plan(&Constraints::default()).unwrap();
        let a = assemble(&MockRng::new(&[7, 7, 7, 7]), &plan).unwrap();
        let b = assemble(&MockRng::new(&[7, 7, 7, 7]), &plan).unwrap();
        assert_eq!(a, b);
    }
}
