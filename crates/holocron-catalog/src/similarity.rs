//! String similarity for fuzzy name matching.
//!
//! Scores are normalized Levenshtein similarity in `0.0..=1.0` computed on
//! case-folded, punctuation-stripped text. A query may match the whole name
//! or any single word of it; word matches are weighted slightly below a
//! whole-name match so an exact full name always ranks first.

/// Weight applied to a single-word match.
const WORD_MATCH_WEIGHT: f64 = 0.95;

/// Levenshtein edit distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// `1 - distance / max_len`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Lowercase, replace punctuation with spaces, collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a query against a canonical name.
pub fn name_score(query: &str, name: &str) -> f64 {
    if query == name {
        return 1.0;
    }
    let q = normalize(query);
    let n = normalize(name);
    if q.is_empty() || n.is_empty() {
        return 0.0;
    }
    let whole = ratio(&q, &n);
    let word = n
        .split(' ')
        .map(|w| ratio(&q, w) * WORD_MATCH_WEIGHT)
        .fold(0.0, f64::max);
    whole.max(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("\u{0440}\u{0435}\u{0439}", "\u{0440}\u{0435}\u{0438}"), 1);
    }

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("revan", "revan"), 1.0);
        assert!((ratio("revn", "revan") - 0.8).abs() < 1e-9);
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("CT-7567 \"Rex\""), "ct 7567 rex");
        assert_eq!(normalize("  Darth   REVAN "), "darth revan");
    }

    #[test]
    fn test_exact_name_is_maximal() {
        assert_eq!(name_score("Darth Revan", "Darth Revan"), 1.0);
        assert_eq!(name_score("darth revan", "Darth Revan"), 1.0);
    }

    #[test]
    fn test_word_match_ranks_below_full_match() {
        let word = name_score("revan", "Darth Revan");
        assert!(word < 1.0);
        assert!(word > 0.9);
        assert!(name_score("revan", "Revan") > word);
    }

    #[test]
    fn test_typo_in_word() {
        let score = name_score("revn", "Darth Revan");
        assert!((score - 0.76).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(name_score("", "Darth Revan"), 0.0);
        assert_eq!(name_score("!!!", "Darth Revan"), 0.0);
    }
}
