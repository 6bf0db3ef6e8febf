//! [`SignatureDate`] definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// ISO-8601 calendar date format (`2026-03-14`), as submitted by the
/// engagement step.
const ISO: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// French calendar date format (`14/03/2026`), as printed on the contract.
const FRENCH: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year]");

/// Calendar date on which an exhibitor signed their engagement.
///
/// Parsed from ISO-8601 input and rendered in French `dd/mm/yyyy` order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignatureDate(time::Date);

impl SignatureDate {
    /// Parses a [`SignatureDate`] from its ISO-8601 representation.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a `YYYY-MM-DD` date.
    pub fn from_iso(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, ISO).map(Self).map_err(ParseError)
    }

    /// Returns this [`SignatureDate`] in its ISO-8601 representation.
    #[must_use]
    pub fn to_iso(self) -> String {
        self.0.format(ISO).unwrap_or_default()
    }

    /// Returns the current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self(time::OffsetDateTime::now_utc().date())
    }
}

impl fmt::Display for SignatureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(FRENCH).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl FromStr for SignatureDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso(s)
    }
}

/// Error of parsing a [`SignatureDate`] from a string.
#[derive(Clone, Debug, Display, Error)]
#[display("invalid signature date: {_0}")]
pub struct ParseError(time::error::Parse);

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::SignatureDate;

    impl Serialize for SignatureDate {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_iso())
        }
    }

    impl<'de> Deserialize<'de> for SignatureDate {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            Self::from_str(&raw).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::SignatureDate;

    #[test]
    fn parses_iso_and_renders_french() {
        let date = SignatureDate::from_iso("2026-03-14").unwrap();
        assert_eq!(date.to_string(), "14/03/2026");
    }

    #[test]
    fn rejects_non_iso_input() {
        assert!(SignatureDate::from_iso("14/03/2026").is_err());
        assert!(SignatureDate::from_iso("not a date").is_err());
    }
}
