use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input was present and not null, but not a string either.
    #[error("Input must be a string")]
    InvalidArgument { found: &'static str },

    #[error("unknown case `{0}`; expected one of snake, kebab, camel, dot")]
    UnknownCase(String),
}

/// Screens a dynamically typed input before conversion.
///
/// Returns `Ok(None)` for a missing or null value, the trimmed text for a
/// string, and [`Error::InvalidArgument`] for everything else.
pub fn guard(input: Option<&Value>) -> Result<Option<&str>> {
    match input {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(trim(text))),
        Some(other) => Err(Error::InvalidArgument {
            found: kind(other),
        }),
    }
}

/// Body of a regex character class matching the same characters as
/// [`is_space`].
pub(crate) const SPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark.
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strips leading and trailing whitespace as defined by [`is_space`].
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
