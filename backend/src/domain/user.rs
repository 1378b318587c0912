//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidationError {
    /// The username is empty or only whitespace.
    Empty,
    /// The username carries leading or trailing whitespace.
    SurroundingWhitespace,
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "username must not start or end with whitespace")
            }
        }
    }
}

impl std::error::Error for UsernameValidationError {}

/// Primary key of a user, e.g. `butter_bridge`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(example = "butter_bridge")]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    ///
    /// # Errors
    ///
    /// Rejects empty values and values with surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if value.trim() != value {
            return Err(UsernameValidationError::SurroundingWhitespace);
        }
        Ok(Self(value))
    }

    /// Borrow the username.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// A registered user. Users are read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique handle.
    pub username: Username,
    /// Display name.
    #[schema(example = "jonny")]
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}
