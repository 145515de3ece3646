// ABOUTME: Filter criteria for company and job listings
// ABOUTME: Field descriptors fix each entity's predicate order and result ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::filter::{FilterCriteria, FilterField, FilterValue, Predicate};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;

/// Query-string filters for `GET /companies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name
    pub name: Option<String>,
    /// Minimum head count (inclusive)
    pub min_employees: Option<i64>,
    /// Maximum head count (inclusive)
    pub max_employees: Option<i64>,
}

impl FilterCriteria for CompanyFilter {
    const FIELDS: &'static [FilterField] = &[
        FilterField::new("name", "name_search", Predicate::Contains),
        FilterField::new("minEmployees", "num_employees", Predicate::AtLeast),
        FilterField::new("maxEmployees", "num_employees", Predicate::AtMost),
    ];
    const ORDER_BY: &'static str = "name";

    fn value_of(&self, field: &FilterField) -> Option<FilterValue> {
        match field.name {
            "name" => self.name.clone().map(FilterValue::Text),
            "minEmployees" => self.min_employees.map(FilterValue::Number),
            "maxEmployees" => self.max_employees.map(FilterValue::Number),
            _ => None,
        }
    }

    fn validate(&self) -> AppResult<()> {
        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees) {
            if min > max {
                return Err(AppError::invalid_input(
                    "minEmployees must not exceed maxEmployees",
                ));
            }
        }
        Ok(())
    }
}

/// Query-string filters for `GET /jobs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive substring of the job title
    pub title: Option<String>,
    /// Minimum salary (inclusive); jobs without a salary never match
    pub min_salary: Option<i64>,
    /// `Some(true)` keeps only jobs with non-zero equity.
    ///
    /// `Some(false)` is treated exactly like `None`: it does not restrict to
    /// jobs *without* equity.
    pub has_equity: Option<bool>,
}

impl FilterCriteria for JobFilter {
    const FIELDS: &'static [FilterField] = &[
        FilterField::new("title", "title_search", Predicate::Contains),
        FilterField::new("minSalary", "salary", Predicate::AtLeast),
        FilterField::new("hasEquity", "equity", Predicate::Positive),
    ];
    const ORDER_BY: &'static str = "title";

    fn value_of(&self, field: &FilterField) -> Option<FilterValue> {
        match field.name {
            "title" => self.title.clone().map(FilterValue::Text),
            "minSalary" => self.min_salary.map(FilterValue::Number),
            "hasEquity" => self.has_equity.map(FilterValue::Flag),
            _ => None,
        }
    }
}
