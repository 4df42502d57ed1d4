//! `dot.case`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    boundary::split_camel_boundaries,
    guard::{SPACE_CLASS, trim},
};

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[{}_-]+", SPACE_CLASS)).expect("dot separator pattern")
});
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9.]+").expect("dot disallowed pattern"));
static DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("dot run pattern"));
static EDGE_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.+|\.+$").expect("dot edge pattern"));

pub fn to_dot_case(text: &str) -> String {
    let humps = split_camel_boundaries(trim(text), '.');
    let dotted = SEPARATOR_RUN.replace_all(&humps, ".");
    let lowered = DISALLOWED.replace_all(&dotted, "").to_lowercase();
    let collapsed = DOT_RUN.replace_all(&lowered, ".");
    EDGE_DOTS.replace_all(&collapsed, "").into_owned()
}
