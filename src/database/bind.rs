// ABOUTME: Binds builder-produced value lists onto sqlx queries in placeholder order
// ABOUTME: The value at index i fills placeholder $i+1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use jobly_core::query::SqlValue;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

/// Bind `values` in order onto `query`
pub fn bind_values<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: &'q [SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    values.iter().fold(query, |query, value| match value {
        SqlValue::Null => query.bind(Option::<String>::None),
        SqlValue::Bool(flag) => query.bind(*flag),
        SqlValue::Integer(n) => query.bind(*n),
        SqlValue::Float(x) => query.bind(*x),
        SqlValue::Text(text) => query.bind(text.as_str()),
    })
}
