// The four base classes, in stable registry order: upper, lower, numbers,
// symbols. The symbol set matches the original web tool byte for byte.
pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+[]{}|;:,.<>?/~-=\\";

// Visually confusable characters, optionally excluded from secrets.
pub const AMBIGUOUS: &[u8] = b"O0l1";

pub fn filter_ambiguous(mut pool: Vec<u8>) -> Vec<u8> {
    pool.retain(|c| !AMBIGUOUS.contains(c));
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_classes_are_non_empty_and_disjoint() {
        let classes = [UPPER, LOWER, NUMBERS, SYMBOLS];
        for cls in classes {
            assert!(!cls.is_empty());
        }
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert!(a.iter().all(|c| !b.contains(c)));
            }
        }
    }

    #[test]
    fn filter_removes_only_ambiguous_members() {
        let upper = filter_ambiguous(UPPER.to_vec());
        assert_eq!(upper.len(), UPPER.len() - 1); // O
        let lower = filter_ambiguous(LOWER.to_vec());
        assert_eq!(lower.len(), LOWER.len() - 1); // l
        let numbers = filter_ambiguous(NUMBERS.to_vec());
        assert_eq!(numbers.len(), NUMBERS.len() - 2); // 0 and 1
        let symbols = filter_ambiguous(SYMBOLS.to_vec());
        assert_eq!(symbols.len(), SYMBOLS.len());
        for pool in [upper, lower, numbers, symbols] {
            assert!(pool.iter().all(|c| !AMBIGUOUS.contains(c)));
        }
    }
}
