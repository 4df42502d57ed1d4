use std::{fmt::Display, str::FromStr};

use serde_json::Value;

use crate::{
    camel::to_camel_case,
    dot::to_dot_case,
    guard::{Error, Result, guard},
    kebab::to_kebab_case,
    snake::to_snake_case,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Snake,
    Kebab,
    Camel,
    Dot,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Snake, Case::Kebab, Case::Camel, Case::Dot];

    pub fn apply(self, text: &str) -> String {
        match self {
            Case::Snake => to_snake_case(text),
            Case::Kebab => to_kebab_case(text),
            Case::Camel => to_camel_case(text),
            Case::Dot => to_dot_case(text),
        }
    }

    /// Guards a dynamically typed input, then converts it.
    ///
    /// Missing and null inputs give an empty string; any other non-string
    /// input is an [`Error::InvalidArgument`].
    pub fn convert(self, input: Option<&Value>) -> Result<String> {
        Ok(match guard(input)? {
            Some(text) => self.apply(text),
            None => String::new(),
        })
    }

    /// The character placed between words, if any.
    pub fn separator(self) -> Option<char> {
        match self {
            Case::Snake => Some('_'),
            Case::Kebab => Some('-'),
            Case::Camel => None,
            Case::Dot => Some('.'),
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Case::Snake),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "camel" | "camelcase" => Ok(Case::Camel),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(Error::UnknownCase(s.to_string())),
        }
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Camel => "camel",
            Case::Dot => "dot",
        };
        write!(f, "{}", name)
    }
}

/// `text.to_case(Case::Kebab)` on anything that derefs to `str`.
pub trait Casing {
    fn to_case(&self, case: Case) -> String;
}

impl<T: AsRef<str> + ?Sized> Casing for T {
    fn to_case(&self, case: Case) -> String {
        case.apply(self.as_ref())
    }
}
