use crate::error::Error;
use serde::{Deserialize, Serialize};

/// One inventory record. Never mutated in place once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Entry {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Parses user-supplied ID text. Used by both the add and delete paths.
pub fn parse_id(text: &str) -> Result<i64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidIdFormat(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integer_text() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("  -7 ").unwrap(), -7);
    }

    #[test]
    fn rejects_non_integer_text() {
        assert!(matches!(parse_id("abc"), Err(Error::InvalidIdFormat(_))));
        assert!(matches!(parse_id(""), Err(Error::InvalidIdFormat(_))));
        assert!(matches!(parse_id("1.5"), Err(Error::InvalidIdFormat(_))));
    }
}
