//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers coming from the content API are carried as newtypes so that a
//! tag id can never be compared against a category id by accident. Foreign-key
//! fields that may arrive as a single id, a list of ids or nothing at all are
//! resolved into [`RawIds`] once, at deserialization time.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Identifier representation accepted from the content API.
///
/// Some collections use numeric ids, others use strings; both are normalized
/// into their textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Integer(i64),
}

impl From<WireId> for String {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Text(text) => text,
            WireId::Integer(number) => number.to_string(),
        }
    }
}

/// Macro to generate string identifiers for content API records.
macro_rules! string_id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps the given identifier without validation.
            pub fn new<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty identifier carries no reference.
            pub fn is_blank(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                WireId::deserialize(deserializer).map(|id| Self(id.into()))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

string_id_newtype!(EntryId, "Identifier of a content entry.");
string_id_newtype!(CategoryId, "Identifier of a category.");
string_id_newtype!(TagId, "Identifier of a tag.");
string_id_newtype!(MoodId, "Identifier of a mood.");

/// A foreign-key field that the content API may send as one id, a list of ids
/// or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIds<T> {
    /// The field held a JSON array.
    Collection(Vec<T>),
    /// The field held a single id.
    Scalar(T),
    /// The field was missing or `null`.
    Absent,
}

impl<T> Default for RawIds<T> {
    fn default() -> Self {
        Self::Absent
    }
}
