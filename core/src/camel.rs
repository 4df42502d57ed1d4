//! `camelCase`.

use std::sync::LazyLock;

use regex::Regex;

use crate::guard::trim;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("camel separator pattern"));

/// Splits the text into ASCII alphanumeric words and joins them with the
/// first word lowercased and every later word capitalized.
///
/// Only non-alphanumeric runs separate words. Existing humps are lowercased
/// away, so `"userName"` becomes `"username"`.
pub fn to_camel_case(text: &str) -> String {
    let mut words = NON_ALPHANUMERIC_RUN
        .split(trim(text))
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase);

    let Some(first) = words.next() else {
        return String::new();
    };

    words.fold(first, |mut out, word| {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.push(head.to_ascii_uppercase());
            out.extend(chars);
        }
        out
    })
}
