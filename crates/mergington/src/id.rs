//! Typed string keys for the Mergington application.
//!
//! Activities are addressed by their human readable name and participants by
//! their email address. Both are plain strings on the wire, but wrapping them
//! in marker-tagged types keeps an activity name from being passed where an
//! email is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around string keys.
///
/// The marker type parameter only exists at compile time; the value
/// serializes as a bare string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just the string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Creates a key with the given value.
    ///
    /// # Example
    /// ```
    /// use mergington::id::ActivityName;
    ///
    /// let name = ActivityName::from_string("Chess Club".to_string());
    /// assert_eq!(name.as_str(), "Chess Club");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the key.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the key and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantMarker;

/// The unique, human readable name of an activity.
pub type ActivityName = Id<ActivityMarker>;

/// A participant's email address. Not validated beyond emptiness checks.
pub type Email = Id<ParticipantMarker>;

impl Email {
    /// Returns true if the email is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Returns the email trimmed and lower-cased.
    ///
    /// # Example
    /// ```
    /// use mergington::id::Email;
    ///
    /// let email = Email::from("  Tester@Example.COM ");
    /// assert_eq!(email.normalized().as_str(), "tester@example.com");
    /// ```
    pub fn normalized(&self) -> Email {
        Email::from_string(self.value.trim().to_lowercase())
    }

    /// Case-insensitive match of this stored participant against an
    /// already normalized email. The stored value is not trimmed.
    pub fn matches_normalized(&self, normalized: &Email) -> bool {
        self.value.to_lowercase() == normalized.value
    }
}
