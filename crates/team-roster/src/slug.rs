//! URL-safe employee identifiers
//!
//! A [`Slug`] names an employee's page directory, vCard and QR image, and is
//! the last segment of the public profile URL.

use serde::{Deserialize, Deserializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Lowercase, hyphen-separated identifier
///
/// # Examples
/// - `drew-jenkins` is valid
/// - `Drew-Jenkins`, `drew--jenkins`, `-drew`, `drew/jenkins` are not
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug
    ///
    /// # Errors
    /// Returns [`SlugError`] if the value is empty, has an empty hyphen
    /// group, or contains anything other than `a-z`, `0-9` and `-`.
    pub fn parse(value: &str) -> Result<Self, SlugError> {
        if value.is_empty() {
            return Err(SlugError::Empty);
        }

        for group in value.split('-') {
            if group.is_empty() {
                return Err(SlugError::EmptyGroup(value.to_string()));
            }
            if let Some(c) = group
                .chars()
                .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
            {
                return Err(SlugError::InvalidCharacter {
                    slug: value.to_string(),
                    character: c,
                });
            }
        }

        Ok(Self(value.to_string()))
    }

    /// Borrow as `&str`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Slug validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// Empty string
    #[error("slug is empty")]
    Empty,

    /// Leading, trailing or doubled hyphen
    #[error("slug '{0}' has an empty hyphen-separated group")]
    EmptyGroup(String),

    /// Character outside `a-z0-9-`
    #[error("slug '{slug}' contains invalid character {character:?}")]
    InvalidCharacter { slug: String, character: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_lowercase() {
        let slug = Slug::parse("zovig-kelesarian").unwrap();
        assert_eq!(slug.as_str(), "zovig-kelesarian");
        assert_eq!(slug.to_string(), "zovig-kelesarian");
    }

    #[test]
    fn accepts_digits() {
        assert!(Slug::parse("jane-doe-2").is_ok());
    }

    #[test]
    fn rejects_uppercase_and_separators() {
        assert!(matches!(
            Slug::parse("Jane-doe"),
            Err(SlugError::InvalidCharacter { character: 'J', .. })
        ));
        assert!(matches!(
            Slug::parse("jane/doe"),
            Err(SlugError::InvalidCharacter { character: '/', .. })
        ));
        assert!(matches!(
            Slug::parse("jane doe"),
            Err(SlugError::InvalidCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn rejects_empty_groups() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
        assert!(matches!(Slug::parse("-jane"), Err(SlugError::EmptyGroup(_))));
        assert!(matches!(Slug::parse("jane-"), Err(SlugError::EmptyGroup(_))));
        assert!(matches!(Slug::parse("jane--doe"), Err(SlugError::EmptyGroup(_))));
    }

    #[test]
    fn deserializes_with_validation() {
        let ok: Slug = serde_json::from_str("\"mary-diaz\"").unwrap();
        assert_eq!(ok.as_str(), "mary-diaz");

        let err = serde_json::from_str::<Slug>("\"Mary\"").unwrap_err();
        assert!(err.to_string().contains("invalid character"));
    }
}
