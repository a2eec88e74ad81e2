//! Ordinal formatting for exit numbers and waypoint counts

use std::collections::HashMap;

/// Formats `n` as an ordinal.
///
/// The language's `ordinalWords` constants win when they carry an entry for
/// `n` (language data typically covers 1 through 10). Otherwise the English
/// suffix form is used, so large exit counts still read as "11th" rather
/// than a bare number.
pub fn ordinalize(n: u32, words: &HashMap<String, String>) -> String {
    if let Some(word) = words.get(&n.to_string()) {
        return word.clone();
    }
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}
