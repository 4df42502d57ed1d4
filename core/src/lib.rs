//! Re-tokenize arbitrary text into words and join them back using one of
//! four casing conventions: `snake_case`, `kebab-case`, `camelCase` and
//! `dot.case`.
//!
//! The `&str` converters are infallible. The [`value`] entry points take a
//! possibly-missing [`serde_json::Value`] and reject anything that is not a
//! string or null.

mod boundary;
pub mod camel;
mod case;
pub mod dot;
mod guard;
pub mod kebab;
pub mod snake;

pub use camel::to_camel_case;
pub use case::{Case, Casing};
pub use dot::to_dot_case;
pub use guard::{Error, Result, guard, trim};
pub use kebab::to_kebab_case;
pub use snake::to_snake_case;

/// Converters over dynamically typed input.
///
/// `None` stands for a missing value and converts to `""`, as does
/// `Value::Null`. Every other non-string value is an
/// [`Error::InvalidArgument`].
pub mod value {
    use serde_json::Value;

    use crate::{Case, Result};

    pub fn to_snake_case(input: Option<&Value>) -> Result<String> {
        Case::Snake.convert(input)
    }

    pub fn to_kebab_case(input: Option<&Value>) -> Result<String> {
        Case::Kebab.convert(input)
    }

    pub fn to_camel_case(input: Option<&Value>) -> Result<String> {
        Case::Camel.convert(input)
    }

    pub fn to_dot_case(input: Option<&Value>) -> Result<String> {
        Case::Dot.convert(input)
    }
}
