//! Normalized edit-distance similarity between two lines.

/// Default similarity a removed/added pair needs to count as one modified line
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Lines longer than this many chars are never paired as modified
pub const MAX_SIMILARITY_CHARS: usize = 4_000;

/// Classic Levenshtein distance (unit cost insert/delete/substitute) over chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the (m+1) x (n+1) matrix, row i is the prefix a[..i]
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                (prev[j - 1] + 1) // substitution
                    .min(curr[j - 1] + 1) // insertion
                    .min(prev[j] + 1) // deletion
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `[0, 1]`: `1 - distance / max(len)`.
///
/// Two empty strings are fully similar. An empty string against a non-empty
/// one scores 0.0.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    match (len1, len2) {
        (0, 0) => 1.0,
        (0, _) | (_, 0) => 0.0,
        _ => {
            let distance = levenshtein_distance(s1, s2);
            1.0 - distance as f64 / len1.max(len2) as f64
        }
    }
}

/// Whether two lines are close enough to be shown as one modified line.
///
/// An empty line is never similar to a non-empty one, whatever the threshold.
/// Neither is a line over [`MAX_SIMILARITY_CHARS`], since the distance is
/// quadratic in line length.
pub fn is_similar(s1: &str, s2: &str, threshold: f64) -> bool {
    if s1.is_empty() != s2.is_empty() {
        return false;
    }

    let longest = s1.chars().count().max(s2.chars().count());
    if longest > MAX_SIMILARITY_CHARS {
        tracing::debug!("Skipping similarity of a {} char line", longest);
        return false;
    }

    similarity(s1, s2) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        // "爱" is three bytes but one char
        assert_eq!(levenshtein_distance("我爱你", "我不爱你"), 1);
        assert!(approx_eq(similarity("我爱你", "我恨你"), 1.0 - 1.0 / 3.0));
    }

    #[test]
    fn similarity_boundaries() {
        assert!(approx_eq(similarity("abc", "abd"), 1.0 - 1.0 / 3.0));
        assert!(approx_eq(similarity("abc", "xyz"), 0.0));
        assert!(approx_eq(similarity("foo_bar", "foo_baz"), 1.0 - 1.0 / 7.0));
        assert!(approx_eq(similarity("", ""), 1.0));
        assert!(approx_eq(similarity("", "x"), 0.0));
    }

    #[test]
    fn is_similar_with_default_threshold() {
        assert!(is_similar("abc", "abd", DEFAULT_SIMILARITY_THRESHOLD));
        assert!(!is_similar("abc", "xyz", DEFAULT_SIMILARITY_THRESHOLD));
        assert!(!is_similar("b", "x", DEFAULT_SIMILARITY_THRESHOLD));
        assert!(is_similar("", "", DEFAULT_SIMILARITY_THRESHOLD));
    }

    #[test]
    fn empty_never_matches_non_empty() {
        assert!(!is_similar("", "abc", 0.0));
        assert!(!is_similar("abc", "", 0.0));
        // a zero threshold accepts anything else
        assert!(is_similar("abc", "xyz", 0.0));
    }

    #[test]
    fn overlong_lines_are_never_similar() {
        let base = "x".repeat(MAX_SIMILARITY_CHARS);
        let edited = format!("{}y", &base[1..]);
        assert!(is_similar(&base, &edited, DEFAULT_SIMILARITY_THRESHOLD));

        let long = format!("{}a", base);
        let long_edited = format!("{}b", base);
        assert!(!is_similar(&long, &long_edited, 0.0));
    }
}
