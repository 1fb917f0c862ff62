use std::collections::HashMap;

use ahash::RandomState;

/// Counts case-insensitive word occurrences in `text`.
///
/// `-` splits words apart. Any other character that is neither alphanumeric
/// nor whitespace is dropped, so `don't` counts as `dont`.
pub fn count_word_frequency(text: &str) -> HashMap<String, usize, RandomState> {
    let cleaned: String = text
        .chars()
        .filter_map(|c| {
            if c == '-' {
                Some(' ')
            } else if c.is_alphanumeric() || c.is_whitespace() {
                Some(c)
            } else {
                None
            }
        })
        .flat_map(char::to_lowercase)
        .collect();

    let mut counts = HashMap::default();
    for word in cleaned.split_whitespace() {
        *counts.entry(word.to_owned()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize, RandomState> {
        pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
    }

    #[test]
    fn pangram() {
        assert_eq!(
            count_word_frequency("The quick brown fox jumps over the lazy dog."),
            counts(&[
                ("the", 2),
                ("quick", 1),
                ("brown", 1),
                ("fox", 1),
                ("jumps", 1),
                ("over", 1),
                ("lazy", 1),
                ("dog", 1),
            ])
        );
    }

    #[test]
    fn hyphens_split_and_apostrophes_join() {
        assert_eq!(
            count_word_frequency("Well-known facts aren't WELL known"),
            counts(&[("well", 2), ("known", 2), ("facts", 1), ("arent", 1)])
        );
    }

    #[test]
    fn digits_are_words() {
        assert_eq!(
            count_word_frequency("Route 66, route 66!"),
            counts(&[("route", 2), ("66", 2)])
        );
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert!(count_word_frequency("").is_empty());
        assert!(count_word_frequency(" ... !!! ").is_empty());
    }
}
