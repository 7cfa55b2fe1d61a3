//! URL-safe product slugs.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The source name contains no usable characters.
    #[error("name produces an empty slug")]
    Empty,
    /// The input is not a valid slug.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacters,
}

/// A URL-safe identifier derived from a product's display name.
///
/// Slugs are lowercase and contain only `[a-z0-9-]`. Derivation is
/// deterministic: lowercase the name, collapse whitespace runs into single
/// hyphens, and drop every other character.
///
/// ## Examples
///
/// ```
/// use rekhali_core::Slug;
///
/// assert_eq!(Slug::derive("HEER").unwrap().as_str(), "heer");
/// assert_eq!(Slug::derive("Banarasi Silk Saree").unwrap().as_str(), "banarasi-silk-saree");
/// assert_eq!(Slug::derive("Kurti (Red) #2").unwrap().as_str(), "kurti-red-2");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a product display name.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` if nothing survives the transformation
    /// (e.g. a name made entirely of punctuation).
    pub fn derive(name: &str) -> Result<Self, SlugError> {
        let mut out = String::with_capacity(name.len());
        let mut pending_hyphen = false;

        for c in name.chars().flat_map(char::to_lowercase) {
            if c.is_whitespace() {
                // Collapse runs of whitespace; no leading hyphen
                pending_hyphen = !out.is_empty();
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                if pending_hyphen {
                    out.push('-');
                    pending_hyphen = false;
                }
                out.push(c);
            }
            // Every other character is dropped
        }

        if out.is_empty() {
            return Err(SlugError::Empty);
        }

        Ok(Self(out))
    }

    /// Parse an existing slug string, validating its character set.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains characters outside
    /// `[a-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacters);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
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

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Slug {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Slug {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Slug {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_lowercases() {
        assert_eq!(Slug::derive("HEER").unwrap().as_str(), "heer");
    }

    #[test]
    fn test_derive_hyphenates_whitespace() {
        assert_eq!(
            Slug::derive("Banarasi Silk Saree").unwrap().as_str(),
            "banarasi-silk-saree"
        );
        assert_eq!(
            Slug::derive("tabs\tand  spaces").unwrap().as_str(),
            "tabs-and-spaces"
        );
    }

    #[test]
    fn test_derive_strips_punctuation() {
        assert_eq!(Slug::derive("Kurti (Red) #2").unwrap().as_str(), "kurti-red-2");
        assert_eq!(Slug::derive("Heer's Choice!").unwrap().as_str(), "heers-choice");
    }

    #[test]
    fn test_derive_no_leading_or_double_hyphens_from_whitespace() {
        assert_eq!(Slug::derive("  padded  name  ").unwrap().as_str(), "padded-name");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = Slug::derive("Mul Cotton Kurta Set").unwrap();
        let b = Slug::derive("Mul Cotton Kurta Set").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_only_slug_safe_characters() {
        let slug = Slug::derive("Édition Spéciale — №5 ★").unwrap();
        assert!(slug
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_derive_empty_result() {
        assert!(matches!(Slug::derive("!!!"), Err(SlugError::Empty)));
        assert!(matches!(Slug::derive(""), Err(SlugError::Empty)));
    }

    #[test]
    fn test_parse_validates_charset() {
        assert!(Slug::parse("banarasi-silk-2").is_ok());
        assert!(matches!(
            Slug::parse("Not A Slug"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
    }
}
