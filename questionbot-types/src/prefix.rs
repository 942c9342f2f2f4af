use std::fmt;
use std::str::FromStr;

use crate::AnswerError;

const ALPHABET_LEN: usize = 26;

/// The label scheme used to show choices and to read them back.
///
/// The same mode renders labels (`index_to_prefix`) and decodes user input
/// (`prefix_to_index`), so the two directions always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PrefixMode {
    /// Lowercase letters: `a`, `b`, ... `z`. Input is case-insensitive.
    #[default]
    Alpha,

    /// Decimal indices starting at zero: `0`, `1`, `2`, ...
    Numeric,
}

impl PrefixMode {
    /// The number of distinct labels this mode can render, if bounded.
    pub fn capacity(self) -> Option<usize> {
        match self {
            Self::Alpha => Some(ALPHABET_LEN),
            Self::Numeric => None,
        }
    }

    /// Check whether `count` choices can all be labelled in this mode.
    pub fn can_label(self, count: usize) -> bool {
        self.capacity().is_none_or(|capacity| count <= capacity)
    }

    /// Render the label for a zero-based choice index.
    ///
    /// # Panics
    ///
    /// Panics in `Alpha` mode when `index > 25`. Loaders reject definitions
    /// with more choices than the mode can label, so reaching this is a bug.
    pub fn index_to_prefix(self, index: usize) -> String {
        match self {
            Self::Alpha => {
                assert!(
                    index < ALPHABET_LEN,
                    "too many choices: alpha prefixes stop at 'z', got index {index}"
                );
                char::from(b'a' + index as u8).to_string()
            }
            Self::Numeric => index.to_string(),
        }
    }

    /// Decode a user-typed label into a zero-based choice index.
    ///
    /// Only the shape of the token is checked here. Whether the index exists
    /// on a particular question is decided by `Question::select_answer`.
    pub fn prefix_to_index(self, token: &str) -> Result<usize, AnswerError> {
        match self {
            Self::Alpha => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Ok(usize::from(c.to_ascii_lowercase() as u8 - b'a'))
                    }
                    _ => Err(AnswerError::InvalidChoice),
                }
            }
            Self::Numeric => token
                .parse::<usize>()
                .map_err(|_| AnswerError::InvalidChoice),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a prefix mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prefix mode '{0}' (expected 'alpha' or 'numeric')")]
pub struct ParsePrefixModeError(pub String);

impl FromStr for PrefixMode {
    type Err = ParsePrefixModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alpha" => Ok(Self::Alpha),
            "numeric" => Ok(Self::Numeric),
            _ => Err(ParsePrefixModeError(s.to_string())),
        }
    }
}
