//! Entropy of generated and user-supplied secrets
//!
//! For a secret drawn uniformly with replacement from a fixed alphabet the
//! entropy is `length * log2(alphabet_size)` bits; for a passphrase it is
//! `word_count * log2(word_list_size)` bits. Degenerate inputs (zero length,
//! empty alphabet) yield `0.0` rather than an error, and the minimum-entropy
//! gate rejects them.

use crate::codepoint::{string_to_codepoints, Codepoint, CodepointSet};
use crate::wordlist::WordList;
use std::cmp::Reverse;
use std::collections::HashSet;
use zeroize::Zeroizing;

#[allow(clippy::cast_precision_loss)]
fn bits(count: usize, symbols: usize) -> f64 {
    if count == 0 || symbols == 0 {
        return 0.0;
    }
    count as f64 * (symbols as f64).log2()
}

/// Entropy of a uniformly random fixed-alphabet secret
#[must_use]
pub fn password_entropy(secret_length: usize, alphabet_size: usize) -> f64 {
    bits(secret_length, alphabet_size)
}

/// Entropy of a passphrase drawn from a word list, independent of separator
#[must_use]
pub fn passphrase_entropy(word_count: usize, word_list_size: usize) -> f64 {
    bits(word_count, word_list_size)
}

/// Number of distinct codepoints across `alphabets`
///
/// Overlapping alphabets count shared symbols once, so this can be smaller
/// than the sum of alphabet sizes.
pub fn realized_alphabet_size<'a>(alphabets: impl IntoIterator<Item = &'a CodepointSet>) -> usize {
    alphabets
        .into_iter()
        .flat_map(|set| set.codepoints.iter().copied())
        .collect::<HashSet<Codepoint>>()
        .len()
}

/// Estimate the entropy of an existing secret, e.g. one typed by a user
///
/// Every known alphabet touched by the secret contributes all of its symbols
/// to the keyspace and each unknown symbol contributes itself. Returns
/// `Some(0.0)` for an empty secret or no alphabets and `None` when no symbol
/// of the secret belongs to a known alphabet.
#[must_use]
pub fn estimate_secret_entropy(secret: &[Codepoint], alphabets: &[CodepointSet]) -> Option<f64> {
    if secret.is_empty() || alphabets.is_empty() {
        return Some(0.0);
    }

    let mut known = HashSet::new();
    let mut unknown = HashSet::new();

    for codepoint in secret {
        match alphabets.iter().find(|set| set.contains(*codepoint)) {
            Some(set) => known.extend(set.codepoints.iter().copied()),
            None => {
                unknown.insert(*codepoint);
            }
        }
    }

    if known.is_empty() {
        return None;
    }

    Some(password_entropy(secret.len(), known.len() + unknown.len()))
}

/// Estimate the entropy of an existing secret that may be a passphrase
///
/// Words of `word_list` found in the secret are removed longest first, each
/// distinct word counting once. When at least two words were found and the
/// rest splits into `words - 1` identical separators, the secret is scored as
/// a passphrase of that many words. Anything else falls back to
/// [`estimate_secret_entropy`] over `alphabets`.
#[must_use]
pub fn estimate_secret_entropy_with_word_list(
    secret: &str,
    word_list: &WordList,
    alphabets: &[CodepointSet],
) -> Option<f64> {
    match passphrase_word_count(secret, word_list) {
        Some(words) => Some(passphrase_entropy(words, word_list.len())),
        None => estimate_secret_entropy(&string_to_codepoints(secret), alphabets),
    }
}

fn passphrase_word_count(secret: &str, word_list: &WordList) -> Option<usize> {
    let mut words: Vec<&str> = word_list.iter().collect();
    words.sort_by_key(|word| Reverse(word.chars().count()));

    let mut rest = Zeroizing::new(secret.to_string());
    let mut found = 0;
    for word in words {
        if rest.contains(word) {
            rest = Zeroizing::new(rest.replace(word, ""));
            found += 1;
        }
    }
    if found < 2 {
        return None;
    }

    let separators = Zeroizing::new(rest.chars().collect::<Vec<char>>());
    let width = separators.len() / (found - 1);
    if width == 0 {
        return None;
    }
    let mut chunks = separators.chunks(width);
    let first = chunks.next()?;
    chunks.all(|chunk| chunk == first).then_some(found)
}
