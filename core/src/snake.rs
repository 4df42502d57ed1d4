//! `snake_case`.
//!
//! Whitespace and hyphens become underscores and camelCase humps are split.
//! Nothing else is touched: existing underscores are neither collapsed nor
//! trimmed, and punctuation passes through as-is.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    boundary::split_camel_boundaries,
    guard::{SPACE_CLASS, trim},
};

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[{}-]+", SPACE_CLASS)).expect("snake separator pattern")
});

pub fn to_snake_case(text: &str) -> String {
    let text = SEPARATOR_RUN.replace_all(trim(text), "_");
    split_camel_boundaries(&text, '_').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct TestCase<'a> {
        input: &'a str,
        snake: &'a str,
    }

    impl TestCase<'_> {
        fn assert(self) {
            assert_eq!(self.snake, to_snake_case(self.input), "input {:?}", self.input);
        }
    }

    #[test]
    fn separators_and_humps() {
        TestCase {
            input: "my-example_string test",
            snake: "my_example_string_test",
        }
        .assert();

        TestCase {
            input: "TypicalCamelCaseName",
            snake: "typical_camel_case_name",
        }
        .assert();

        TestCase {
            input: "  Mobile-Number  ",
            snake: "mobile_number",
        }
        .assert();

        TestCase {
            input: "spaces  \t between - words",
            snake: "spaces_between_words",
        }
        .assert();

        TestCase {
            input: "mixed52Case",
            snake: "mixed52_case",
        }
        .assert();

        TestCase {
            input: "getHTTPResponse",
            snake: "get_httpresponse",
        }
        .assert();

        TestCase {
            input: "SCREEN_NAME",
            snake: "screen_name",
        }
        .assert();
    }

    #[test]
    fn empty() {
        TestCase { input: "", snake: "" }.assert();
        TestCase { input: " \t\n ", snake: "" }.assert();
    }

    #[test]
    fn byte_order_mark_separates_but_nel_does_not() {
        TestCase {
            input: "first\u{feff}name",
            snake: "first_name",
        }
        .assert();

        TestCase {
            input: "a\u{85}b",
            snake: "a\u{85}b",
        }
        .assert();
    }

    #[test]
    fn underscores_and_punctuation_pass_through() {
        TestCase {
            input: "a__b",
            snake: "a__b",
        }
        .assert();

        TestCase {
            input: "_private_",
            snake: "_private_",
        }
        .assert();

        TestCase {
            input: "-edge-",
            snake: "_edge_",
        }
        .assert();

        TestCase {
            input: "hello, World!",
            snake: "hello,_world!",
        }
        .assert();

        TestCase { input: "-", snake: "_" }.assert();
    }
}
