//! Value Objects - Immutable domain primitives with validation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FormError;

/// Form identifier (Value Object)
///
/// # Invariants
/// - Strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(i32);

impl FormId {
    /// Create a form id, rejecting zero and negative values
    pub fn new(id: i32) -> Result<Self, FormError> {
        if id <= 0 {
            return Err(FormError::InvalidArgument(
                "form id must be greater than zero".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Get inner value
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry of the field option catalog.
///
/// Seeded outside this crate and never mutated here; dropdown fields refer
/// to entries by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Catalog id
    pub id: i32,
    /// Display text
    pub text: String,
    /// Submitted value
    pub value: String,
}

impl FieldOption {
    /// Create a catalog entry
    pub fn new(id: i32, text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Sort direction forwarded to the gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    #[default]
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse. Anything that is not `asc` sorts descending.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some(dir) if dir.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// Wire form, `ASC` or `DESC`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
