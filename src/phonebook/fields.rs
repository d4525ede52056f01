//! # Validated Fields
//!
//! Every scalar a [`Record`](crate::model::Record) holds is wrapped in a
//! newtype that checks its format once, at construction, and exposes no way
//! to change the value afterwards. Editing a field means building a new one
//! and replacing the old.
//!
//! Deserialization goes through the same constructors (`serde(try_from)`),
//! so a saved book with a malformed phone or email fails to load instead of
//! producing an invalid record.

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text format accepted by [`Birthday::parse`].
pub const BIRTHDAY_FORMAT: &str = "%d/%m/%Y";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9._-]*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A contact's name. Free text, but never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BookError::Format {
                field: "name",
                expected: "Name must not be empty",
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number: exactly ten ASCII digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: &str) -> Result<Self> {
        if !PHONE_RE.is_match(phone) {
            return Err(BookError::Format {
                field: "phone",
                expected: "It must contain exactly 10 digits",
            });
        }
        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, digits: &str) -> bool {
        self.0.contains(digits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self> {
        if !EMAIL_RE.is_match(email) {
            return Err(BookError::Format {
                field: "email",
                expected: "Use pattern <name@domain.com> for email",
            });
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A calendar date without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses `DD/MM/YYYY`.
    pub fn parse(text: &str) -> Result<Self> {
        NaiveDate::parse_from_str(text.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| BookError::Format {
                field: "date",
                expected: "Use DD/MM/YYYY",
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

macro_rules! string_field_conversions {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = BookError;

                fn try_from(value: String) -> Result<Self> {
                    $ty::new(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_field_conversions!(Name, Phone, Email);

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_its_digits() {
        for raw in ["1234567890", "0000000000", "5551234567"] {
            let phone = Phone::new(raw).unwrap();
            assert_eq!(phone.as_str(), raw);
            assert_eq!(phone.to_string(), raw);
        }
    }

    #[test]
    fn phone_rejects_anything_but_ten_digits() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "1234567890x",
            "123-456-7890",
            "+123456789",
            " 1234567890",
            "abcdefghij",
        ] {
            assert!(
                matches!(Phone::new(raw), Err(BookError::Format { field: "phone", .. })),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn email_accepts_common_addresses() {
        for raw in ["john@example.com", "j.doe-1@mail.example.org", "a_b@domain.io"] {
            assert_eq!(Email::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for raw in [
            "",
            "john",
            "john@",
            "@example.com",
            "john@example",
            "1john@example.com",
            "john@ex ample.com",
        ] {
            assert!(
                matches!(Email::new(raw), Err(BookError::Format { field: "email", .. })),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn name_is_trimmed_and_must_not_be_blank() {
        assert_eq!(Name::new("  john ").unwrap().as_str(), "john");
        assert!(Name::new("   ").is_err());
    }

    #[test]
    fn birthday_parses_day_month_year() {
        let bd = Birthday::parse("01/12/1993").unwrap();
        assert_eq!(bd.date(), NaiveDate::from_ymd_opt(1993, 12, 1).unwrap());
        assert_eq!(bd.to_string(), "01/12/1993");
    }

    #[test]
    fn birthday_rejects_other_formats_and_impossible_dates() {
        for raw in ["1993-12-01", "31/02/2000", "12/1993", "tomorrow"] {
            assert!(
                matches!(Birthday::parse(raw), Err(BookError::Format { field: "date", .. })),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn deserializing_validates() {
        let ok: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(ok.as_str(), "1234567890");
        assert!(serde_json::from_str::<Phone>("\"12345\"").is_err());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
