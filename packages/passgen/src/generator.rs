//! Random password and passphrase generators
//!
//! Both generators produce a codepoint sequence so downstream consumers do not
//! care which path produced a secret. Draws are independent, uniform and with
//! replacement.

use crate::codepoint::{string_to_codepoints, Codepoint, CodepointSet};
use crate::error::{PassgenError, Result};
use crate::settings::PassphraseGeneratorSettings;
use crate::wordlist::WordList;
use keyward_common::CaseType;
use rand::Rng;
use zeroize::Zeroizing;

/// Flatten alphabets into one draw list
///
/// Symbols present in several alphabets appear several times. This changes
/// their draw probability and must not be deduplicated.
pub fn union_alphabet<'a>(alphabets: impl IntoIterator<Item = &'a CodepointSet>) -> Vec<Codepoint> {
    alphabets
        .into_iter()
        .flat_map(|set| set.codepoints.iter().copied())
        .collect()
}

/// Draw `length` codepoints uniformly from `alphabet`
///
/// # Errors
///
/// Returns [`PassgenError::EmptyAlphabet`] if `alphabet` is empty.
pub fn generate_password<R: Rng + ?Sized>(
    length: usize,
    alphabet: &[Codepoint],
    rng: &mut R,
) -> Result<Zeroizing<Vec<Codepoint>>> {
    if alphabet.is_empty() {
        return Err(PassgenError::EmptyAlphabet);
    }

    let mut secret = Zeroizing::new(Vec::with_capacity(length));
    while secret.len() < length {
        secret.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    Ok(secret)
}

/// Draw `settings.word_count` words and join them with the separator
pub fn generate_passphrase<R: Rng + ?Sized>(
    settings: &PassphraseGeneratorSettings,
    word_list: &WordList,
    rng: &mut R,
) -> Zeroizing<Vec<Codepoint>> {
    let mut phrase = Zeroizing::new(String::new());
    for i in 0..settings.word_count {
        if i > 0 {
            phrase.push_str(&settings.separator);
        }
        let word = word_list
            .get(rng.random_range(0..word_list.len()))
            .unwrap_or_default();
        phrase.push_str(&apply_case(word, settings.case));
    }
    Zeroizing::new(string_to_codepoints(&phrase))
}

fn apply_case(word: &str, case: CaseType) -> String {
    match case {
        CaseType::Lowercase => word.to_lowercase(),
        CaseType::Uppercase => word.to_uppercase(),
        CaseType::Camelcase => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
