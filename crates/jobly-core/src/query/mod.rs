// ABOUTME: Parameterized SQL fragment builders for updates and filtered listings
// ABOUTME: Pure transformations from typed request data to SQL text plus bind values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query Builders
//!
//! Two builders produce SQL fragments with `$n` placeholders (1-based,
//! positional) and the bind values that go with them:
//!
//! - [`sql_for_partial_update`] turns an [`UpdatePayload`] into a `SET`
//!   clause, resolving field names to column names through a [`FieldNameMap`].
//! - [`build_filtered_query`] turns any [`FilterCriteria`] into a `WHERE`
//!   clause with a fixed `ORDER BY`.
//!
//! Neither builder executes anything. Placeholder index `n` always refers to
//! `values[n - 1]`.

mod criteria;
mod filter;
mod partial_update;
mod value;

pub use criteria::{CompanyFilter, JobFilter};
pub use filter::{
    build_filtered_query, search_key, FilterCriteria, FilterField, FilterValue, Predicate,
    WhereClause,
};
pub use partial_update::{sql_for_partial_update, FieldNameMap, SetClause, UpdatePayload};
pub use value::SqlValue;
