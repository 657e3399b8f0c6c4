// Display-only strength estimate: length tops out at 60 points (64 chars),
// class variety contributes the remaining 40. Not a security guarantee.

pub fn score(length: usize, variety: usize) -> u8 {
    if length == 0 {
        return 0;
    }
    let length_score = f64::min(60.0, length as f64 / 64.0 * 60.0);
    let variety_score = variety as f64 / 4.0 * 40.0;
    (length_score + variety_score).round() as u8
}

pub fn label(score: u8) -> &'static str {
    if score >= 80 {
        "Elite"
    } else if score >= 65 {
        "Strong"
    } else if score >= 45 {
        "Balanced"
    } else {
        "Weak"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_chars_four_classes_is_balanced() {
        let s = score(16, 4);
        assert_eq!(s, 55);
        assert_eq!(label(s), "Balanced");
    }

    #[test]
    fn zero_length_scores_zero() {
        assert_eq!(score(0, 4), 0);
        assert_eq!(label(0), "Weak");
    }

    #[test]
    fn long_varied_secret_is_elite() {
        let s = score(64, 4);
        assert_eq!(s, 100);
        assert_eq!(label(s), "Elite");
    }

    #[test]
    fn length_contribution_caps_at_sixty() {
        assert_eq!(score(128, 0), 60);
        assert_eq!(label(score(128, 1)), "Strong");
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(label(80), "Elite");
        assert_eq!(label(79), "Strong");
        assert_eq!(label(65), "Strong");
        assert_eq!(label(64), "Balanced");
        assert_eq!(label(45), "Balanced");
        assert_eq!(label(44), "Weak");
    }
}
