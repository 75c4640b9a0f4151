// SPDX-License-Identifier: MIT

//!
//! The table/column pair a filter is aimed at
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`FilterTarget`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterTargetError {
    #[error("Table name cannot be empty")]
    EmptyTable,

    #[error("Column name cannot be empty")]
    EmptyColumn,
}

/// Identifies the host-side field a filter restricts: a table name and a
/// column name, both non-empty once trimmed of surrounding whitespace
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilterTarget {
    table: String,
    column: String,
}

impl FilterTarget {
    /// Create a new [`FilterTarget`] if both parts will be valid
    pub fn from<T: ToString, C: ToString>(table: T, column: C) -> Result<Self, FilterTargetError> {
        let table = table.to_string().trim().to_string();
        if table.is_empty() {
            return Err(FilterTargetError::EmptyTable);
        }

        let column = column.to_string().trim().to_string();
        if column.is_empty() {
            return Err(FilterTargetError::EmptyColumn);
        }

        Ok(FilterTarget { table, column })
    }

    /// Derive a target from host dataset metadata: the table name is the
    /// prefix of the qualified `table.column` query identifier, the column
    /// name is the column's display name
    pub fn from_query_name<Q: ToString, D: ToString>(
        query_name: Q,
        display_name: D,
    ) -> Result<Self, FilterTargetError> {
        let query_name = query_name.to_string();
        let table = match query_name.split_once('.') {
            Some((table, _)) => table,
            // No qualifier, so the whole identifier names the table
            None => query_name.as_str(),
        };
        Self::from(table, display_name)
    }

    /// Get the table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get the column name
    pub fn column(&self) -> &str {
        &self.column
    }
}

#[derive(Deserialize)]
struct RawTarget {
    table: String,
    column: String,
}

impl<'de> Deserialize<'de> for FilterTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTarget::deserialize(deserializer)?;
        FilterTarget::from(raw.table, raw.column).map_err(serde::de::Error::custom)
    }
}
