//! Jaro–Winkler similarity between the sent and the received text.

/// Prefix weight of the Winkler adjustment.
const PREFIX_SCALE: f64 = 0.1;
/// Longest common prefix that earns a bonus.
const MAX_PREFIX: usize = 4;
/// Jaro score above which the prefix bonus applies.
const BOOST_THRESHOLD: f64 = 0.7;

/// Jaro similarity of two strings, in `[0, 1]`.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = half_transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro–Winkler similarity: Jaro boosted by a common prefix of up to four characters.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let score = jaro(a, b);
    if score <= BOOST_THRESHOLD {
        return score;
    }
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    score + prefix as f64 * PREFIX_SCALE * (1.0 - score)
}

/// Mean Jaro–Winkler score of word pairs, words split on whitespace.
///
/// Words are paired in order and the longer text's surplus words are ignored. Two texts
/// without words score 1.0; when only one has words the score is 0.0.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    let scores: Vec<f64> = a
        .split_whitespace()
        .zip(b.split_whitespace())
        .map(|(x, y)| jaro_winkler(x, y))
        .collect();

    if scores.is_empty() {
        let has_words = |s: &str| s.split_whitespace().next().is_some();
        return if has_words(a) || has_words(b) { 0.0 } else { 1.0 };
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_jaro_classic_pairs() {
        assert_relative_eq!(jaro("MARTHA", "MARHTA"), 0.944444, epsilon = 1e-5);
        assert_relative_eq!(jaro("DIXON", "DICKSONX"), 0.766667, epsilon = 1e-5);
        assert_relative_eq!(jaro("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaro_winkler_classic_pairs() {
        assert_relative_eq!(jaro_winkler("MARTHA", "MARHTA"), 0.961111, epsilon = 1e-5);
        assert_relative_eq!(jaro_winkler("DIXON", "DICKSONX"), 0.813333, epsilon = 1e-5);
        assert_relative_eq!(jaro_winkler("DWAYNE", "DUANE"), 0.84, epsilon = 1e-5);
    }

    #[test]
    fn test_identical_and_empty() {
        assert_relative_eq!(jaro_winkler("метод", "метод"), 1.0);
        assert_relative_eq!(jaro_winkler("", ""), 1.0);
        assert_relative_eq!(jaro_winkler("", "a"), 0.0);
    }

    #[test]
    fn test_word_similarity() {
        assert_relative_eq!(word_similarity("branch and bound", "branch and bound"), 1.0);
        assert_relative_eq!(word_similarity("", "  "), 1.0);
        assert_relative_eq!(word_similarity("word", ""), 0.0);

        let score = word_similarity("branch and bound", "branch and bounD extra");
        assert!(score < 1.0 && score > 0.9);
    }
}
