//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! prompt text and history identifiers are checked at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

/// Rejects whitespace-only input but hands back the value untouched.
fn require_non_blank<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

macro_rules! non_blank_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a value that is not blank, keeping it verbatim.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_non_blank(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

non_blank_string_newtype!(
    PromptText,
    "Topic or details exactly as typed by the user; never blank.",
    "prompt"
);

/// Identifier of a history entry: the creation time in milliseconds since the
/// Unix epoch, bumped when needed so it stays strictly increasing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "i64")]
pub struct EntryId(i64);

impl EntryId {
    pub const MIN: Self = Self(1);

    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("entry id"))
        }
    }

    /// Returns the raw millisecond value backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The smallest identifier that is strictly greater than `self`.
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for EntryId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryId> for i64 {
    fn from(value: EntryId) -> Self {
        value.0
    }
}

impl PartialEq<i64> for EntryId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}
