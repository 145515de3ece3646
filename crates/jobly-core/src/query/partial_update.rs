// ABOUTME: Dynamic SET clause builder for partial updates
// ABOUTME: Maps application field names to columns and numbers placeholders contiguously
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SqlValue;
use crate::errors::{AppError, AppResult};

/// Lookup from application field name to storage column name
///
/// Only fields whose spelling differs need an entry; anything missing from
/// the table is used as its own column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldNameMap<'a> {
    pairs: &'a [(&'a str, &'a str)],
}

impl<'a> FieldNameMap<'a> {
    /// Map with no renames
    pub const IDENTITY: FieldNameMap<'static> = FieldNameMap { pairs: &[] };

    /// Create a map from `(field, column)` pairs
    #[must_use]
    pub const fn new(pairs: &'a [(&'a str, &'a str)]) -> Self {
        Self { pairs }
    }

    /// Resolve the column for `field`, falling back to `field` itself
    #[must_use]
    pub fn column_for<'f>(&self, field: &'f str) -> &'f str
    where
        'a: 'f,
    {
        self.pairs
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(field, |(_, column)| *column)
    }
}

/// Field name → new value, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePayload {
    fields: Vec<(String, SqlValue)>,
}

impl UpdatePayload {
    /// Create an empty payload
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set `field` to `value`
    ///
    /// Setting a field twice replaces the value but keeps its original position.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<SqlValue>) {
        let field = field.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field, value));
        }
    }

    /// Builder-style [`Self::set`]
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Set `field` only when a value was supplied
    ///
    /// `Some(None)` on a nullable field still sets it, to SQL `NULL`.
    pub fn set_present<T: Into<SqlValue>>(&mut self, field: &str, value: Option<T>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `field` is present
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// `"column"=$n` fragments plus positionally matching bind values
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    /// Comma-separated assignments, e.g. `"first_name"=$1, "age"=$2`
    pub set_cols: String,
    /// Bind values; `values[i]` belongs to placeholder `$i+1`
    pub values: Vec<SqlValue>,
}

impl SetClause {
    /// Placeholder index for the first value appended after this clause
    #[must_use]
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Finish an `UPDATE ... WHERE key_column = $n RETURNING ...` statement
    ///
    /// `key` is appended after the assignment values so its placeholder is
    /// [`Self::next_placeholder`].
    #[must_use]
    pub fn into_update(
        self,
        table: &str,
        key_column: &str,
        key: impl Into<SqlValue>,
        returning: &str,
    ) -> (String, Vec<SqlValue>) {
        let key_idx = self.next_placeholder();
        let sql = format!(
            "UPDATE {table} SET {} WHERE {key_column} = ${key_idx} RETURNING {returning}",
            self.set_cols
        );
        let mut values = self.values;
        values.push(key.into());
        (sql, values)
    }
}

/// Build the `SET` clause of a partial update
///
/// Fields are emitted in payload order; the field at position `i` becomes
/// `"<column>"=$i` with its value at `values[i - 1]`.
///
/// # Errors
///
/// Returns `InvalidInput` if the payload is empty.
pub fn sql_for_partial_update(
    payload: &UpdatePayload,
    columns: FieldNameMap<'_>,
) -> AppResult<SetClause> {
    if payload.is_empty() {
        return Err(AppError::invalid_input("No data supplied for update"));
    }

    let set_cols = payload
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| format!("\"{}\"=${}", columns.column_for(field), idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let values = payload.iter().map(|(_, value)| value.clone()).collect();

    Ok(SetClause { set_cols, values })
}
