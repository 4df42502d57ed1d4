use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary pattern"));

/// Inserts `separator` wherever a lowercase letter or digit is directly
/// followed by an uppercase letter.
///
/// Matches do not overlap, so `"aBC"` becomes `"a_BC"` and `"aBcD"` becomes
/// `"a_Bc_D"`.
pub(crate) fn split_camel_boundaries(text: &str, separator: char) -> Cow<'_, str> {
    CAMEL_BOUNDARY.replace_all(text, |caps: &Captures| {
        format!("{}{}{}", &caps[1], separator, &caps[2])
    })
}
