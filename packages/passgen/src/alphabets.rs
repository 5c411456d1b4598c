//! Built-in alphabet catalog

use crate::codepoint::{Codepoint, CodepointSet};
use crate::settings::PasswordGeneratorSettings;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// `A-Z`
pub const MASK_UPPER: &str = "upper";
/// `a-z`
pub const MASK_LOWER: &str = "lower";
/// `0-9`
pub const MASK_DIGIT: &str = "digit";
/// Brackets and pipe
pub const MASK_PARENTHESIS: &str = "parenthesis";
/// `# $ % & @ ^ ~`
pub const MASK_SPECIAL_CHAR1: &str = "special_char1";
/// `. , : ;`
pub const MASK_SPECIAL_CHAR2: &str = "special_char2";
/// Quotes and backtick
pub const MASK_SPECIAL_CHAR3: &str = "special_char3";
/// `/ \ _ -`
pub const MASK_SPECIAL_CHAR4: &str = "special_char4";
/// `< * + ! ? =`
pub const MASK_SPECIAL_CHAR5: &str = "special_char5";
/// Emoticons block
pub const MASK_EMOJI: &str = "emoji";

const EMOJI_FIRST: u32 = 0x1F600;
const EMOJI_LAST: u32 = 0x1F64F;

static ALL: Lazy<Vec<CodepointSet>> = Lazy::new(|| {
    vec![
        CodepointSet::from_chars(MASK_UPPER, "A-Z", 'A'..='Z'),
        CodepointSet::from_chars(MASK_LOWER, "a-z", 'a'..='z'),
        CodepointSet::from_chars(MASK_DIGIT, "0-9", '0'..='9'),
        CodepointSet::from_chars(
            MASK_PARENTHESIS,
            "{ [ ( | ) ] }",
            ['{', '(', '[', '|', ']', ')', '}'],
        ),
        CodepointSet::from_chars(
            MASK_SPECIAL_CHAR1,
            "# $ % & @ ^ ~",
            ['#', '$', '%', '&', '@', '^', '~'],
        ),
        CodepointSet::from_chars(MASK_SPECIAL_CHAR2, ". , : ;", ['.', ',', ':', ';']),
        CodepointSet::from_chars(MASK_SPECIAL_CHAR3, "' \" `", ['\'', '"', '`']),
        CodepointSet::from_chars(MASK_SPECIAL_CHAR4, "/ \\ _ -", ['/', '\\', '_', '-']),
        CodepointSet::from_chars(
            MASK_SPECIAL_CHAR5,
            "< * + ! ? =",
            ['<', '*', '+', '!', '?', '='],
        ),
        CodepointSet {
            name: MASK_EMOJI.to_string(),
            label: "\u{1F618}".to_string(),
            codepoints: (EMOJI_FIRST..=EMOJI_LAST).map(Codepoint).collect(),
        },
    ]
});

/// Every built-in alphabet, in catalog order
#[must_use]
pub fn all_alphabets() -> &'static [CodepointSet] {
    &ALL
}

/// Look up a built-in alphabet by name
#[must_use]
pub fn alphabet(name: &str) -> Option<&'static CodepointSet> {
    ALL.iter().find(|set| set.name == name)
}

/// The alphabets whose flag is enabled in `settings`
#[must_use]
pub fn alphabets_for_settings(settings: &PasswordGeneratorSettings) -> BTreeSet<CodepointSet> {
    let selected = [
        (settings.mask_upper, MASK_UPPER),
        (settings.mask_lower, MASK_LOWER),
        (settings.mask_digit, MASK_DIGIT),
        (settings.mask_parenthesis, MASK_PARENTHESIS),
        (settings.mask_char1, MASK_SPECIAL_CHAR1),
        (settings.mask_char2, MASK_SPECIAL_CHAR2),
        (settings.mask_char3, MASK_SPECIAL_CHAR3),
        (settings.mask_char4, MASK_SPECIAL_CHAR4),
        (settings.mask_char5, MASK_SPECIAL_CHAR5),
        (settings.mask_emoji, MASK_EMOJI),
    ];

    selected
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .filter_map(|(_, name)| alphabet(name))
        .map(|set| set.with_look_alike_excluded(settings.exclude_look_alike))
        .collect()
}
