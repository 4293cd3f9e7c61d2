//! Selectable area domain type.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A selectable neighborhood unit.
///
/// Opaque to the state slice beyond identity and display; the list order is
/// whatever the caller supplied.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[display("{name}")]
pub struct Area {
    /// Unique area identifier.
    pub id: u64,
    /// Human-readable area name.
    pub name: String,
}

impl Area {
    /// Creates a new area.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
