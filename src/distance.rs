//! Levenshtein edit distance over code-point sequences.

/// Unit-cost insertion/deletion/substitution distance between `a` and `b`.
///
/// Uses the standard dynamic-programming recurrence with a single rolling
/// row sized by the shorter operand: O(len(a) * len(b)) time and
/// O(min(len(a), len(b))) space.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    // Keep the shorter sequence on the row dimension.
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

    let mut row: Vec<usize> = (0..=a.len()).collect();
    for (i, &bc) in b.iter().enumerate() {
        let mut prev = i + 1;
        for (j, &ac) in a.iter().enumerate() {
            let curr = if bc == ac {
                row[j]
            } else {
                row[j].min(prev).min(row[j + 1]) + 1
            };
            row[j] = prev;
            prev = curr;
        }
        row[a.len()] = prev;
    }
    row[a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dist(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        levenshtein(&a, &b)
    }

    #[test]
    fn known_distances() {
        let cases = [
            ("", "", 0),
            ("a", "", 1),
            ("", "a", 1),
            ("a", "a", 0),
            ("a", "ab", 1),
            ("ab", "a", 1),
            ("kitten", "sitting", 3),
            ("sitting", "sitting", 0),
            ("flaw", "lawn", 2),
            ("kit", "kitten", 3),
        ];
        for (a, b, expected) in cases {
            assert_eq!(dist(a, b), expected, "distance({a:?}, {b:?})");
        }
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("", "abc"),
            ("maitreyi", "maitrei"),
        ];
        for (a, b) in pairs {
            assert_eq!(dist(a, b), dist(b, a), "distance({a:?}, {b:?}) not symmetric");
        }
    }

    #[test]
    fn zero_iff_equal() {
        let samples = ["", "a", "ab", "tara", "romania", "eliade"];
        for a in samples {
            for b in samples {
                if a == b {
                    assert_eq!(dist(a, b), 0);
                } else {
                    assert!(dist(a, b) > 0, "distance({a:?}, {b:?}) should be nonzero");
                }
            }
        }
    }

    #[test]
    fn empty_operand_costs_full_length() {
        assert_eq!(dist("", "spanzuratilor"), 13);
        assert_eq!(dist("spanzuratilor", ""), 13);
    }

    #[test]
    fn non_ascii_code_points_count_as_single_edits() {
        assert_eq!(dist("țară", "tara"), 2);
        assert_eq!(dist("țară", "țară"), 0);
    }
}
