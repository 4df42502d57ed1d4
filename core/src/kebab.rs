//! `kebab-case`.

use std::sync::LazyLock;

use regex::Regex;

use crate::guard::trim;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("kebab separator pattern"));
static EDGE_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("kebab edge pattern"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("kebab hyphen run pattern"));

/// Lowercases the text, then replaces every run of characters outside
/// `[a-z0-9]` with a single hyphen.
///
/// Boundaries are found on the lowercased text only, so `"userName"` stays a
/// single word.
pub fn to_kebab_case(text: &str) -> String {
    let lowered = trim(text).to_lowercase();
    let hyphenated = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let stripped = EDGE_HYPHENS.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&stripped, "-").into_owned()
}
