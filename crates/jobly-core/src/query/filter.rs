// ABOUTME: Generic WHERE clause builder driven by per-entity filter descriptors
// ABOUTME: Numbers placeholders as values are pushed and fixes the result ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SqlValue;
use crate::errors::{AppError, AppResult};

/// How a present filter value restricts its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match against a column holding
    /// [`search_key`] text; binds `%key%`
    Contains,
    /// `column >= $n`
    AtLeast,
    /// `column <= $n`
    AtMost,
    /// `column > 0` when the flag is `true`; binds nothing
    Positive,
}

/// Case-folded form stored in search columns and matched by [`Predicate::Contains`]
///
/// SQLite `LIKE` only folds ASCII, so both sides are lowercased up front.
#[must_use]
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// One filterable dimension of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Request-level name (`minSalary`)
    pub name: &'static str,
    /// Storage column (`salary`)
    pub column: &'static str,
    /// Predicate applied when a value is present
    pub predicate: Predicate,
}

impl FilterField {
    /// Describe a filter field
    #[must_use]
    pub const fn new(name: &'static str, column: &'static str, predicate: Predicate) -> Self {
        Self {
            name,
            column,
            predicate,
        }
    }
}

/// A present filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Text to search for
    Text(String),
    /// Numeric threshold
    Number(i64),
    /// Boolean flag
    Flag(bool),
}

/// Typed filter criteria for one entity
///
/// `FIELDS` is processed in order, so it fixes both the predicate order and
/// the placeholder numbering of every query built from this type.
pub trait FilterCriteria {
    /// Filterable fields in processing order
    const FIELDS: &'static [FilterField];

    /// Column the result set is always sorted by
    const ORDER_BY: &'static str;

    /// Value supplied for `field`, or `None` when that dimension is unfiltered
    fn value_of(&self, field: &FilterField) -> Option<FilterValue>;

    /// Reject contradictory criteria before any clause is built
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the criteria cannot be satisfied as given.
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Predicates joined by `AND`, their bind values, and the fixed ordering
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    predicates: Vec<String>,
    values: Vec<SqlValue>,
    order_by: &'static str,
}

impl WhereClause {
    const fn new(order_by: &'static str) -> Self {
        Self {
            predicates: Vec::new(),
            values: Vec::new(),
            order_by,
        }
    }

    /// Predicates joined by ` AND `, empty when nothing is filtered
    #[must_use]
    pub fn clause(&self) -> String {
        self.predicates.join(" AND ")
    }

    /// Whether no predicate was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Bind values in placeholder order
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Consume the clause, keeping the bind values
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }

    /// Column the results are sorted by
    #[must_use]
    pub const fn order_by(&self) -> &'static str {
        self.order_by
    }

    /// Append `WHERE` (if any) and `ORDER BY` to a base `SELECT ... FROM t`
    #[must_use]
    pub fn apply(&self, base_select: &str) -> String {
        let base = base_select.trim_end();
        if self.is_empty() {
            format!("{base} ORDER BY {}", self.order_by)
        } else {
            format!("{base} WHERE {} ORDER BY {}", self.clause(), self.order_by)
        }
    }

    fn push(&mut self, field: &FilterField, value: FilterValue) -> AppResult<()> {
        let column = field.column;
        match (field.predicate, value) {
            (Predicate::Contains, FilterValue::Text(text)) => {
                self.values
                    .push(SqlValue::Text(format!("%{}%", search_key(&text))));
                self.predicates
                    .push(format!("{column} LIKE ${}", self.values.len()));
            }
            (Predicate::AtLeast, FilterValue::Number(n)) => {
                self.values.push(SqlValue::Integer(n));
                self.predicates
                    .push(format!("{column} >= ${}", self.values.len()));
            }
            (Predicate::AtMost, FilterValue::Number(n)) => {
                self.values.push(SqlValue::Integer(n));
                self.predicates
                    .push(format!("{column} <= ${}", self.values.len()));
            }
            (Predicate::Positive, FilterValue::Flag(true)) => {
                self.predicates.push(format!("{column} > 0"));
            }
            // hasEquity=false filters nothing, same as leaving it out
            (Predicate::Positive, FilterValue::Flag(false)) => {}
            (predicate, value) => {
                return Err(AppError::internal(format!(
                    "Filter {} cannot apply {predicate:?} to {value:?}",
                    field.name
                )));
            }
        }
        Ok(())
    }
}

/// Build the `WHERE` clause for a filtered listing
///
/// # Errors
///
/// Returns `InvalidInput` if `filters.validate()` rejects the criteria, and
/// `InternalError` if a field descriptor is paired with the wrong value kind.
pub fn build_filtered_query<F: FilterCriteria>(filters: &F) -> AppResult<WhereClause> {
    filters.validate()?;

    let mut clause = WhereClause::new(F::ORDER_BY);
    for field in F::FIELDS {
        if let Some(value) = filters.value_of(field) {
            clause.push(field, value)?;
        }
    }

    tracing::trace!(
        predicates = clause.predicates.len(),
        values = clause.values.len(),
        "Built filtered query"
    );

    Ok(clause)
}
