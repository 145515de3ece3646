// ABOUTME: Job posting entity, the summary embedded in company detail, and create/update bodies
// ABOUTME: Salary and equity are nullable; equity is a fraction between 0 and 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{check_non_negative, check_slug, check_text};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use jobly_core::query::UpdatePayload;
use serde::{Deserialize, Serialize};

/// A job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Generated identifier
    pub id: i64,
    /// Job title
    pub title: String,
    /// Annual salary
    pub salary: Option<i64>,
    /// Equity fraction
    pub equity: Option<f64>,
    /// Owning company
    pub company_handle: String,
}

/// Job fields listed under a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Generated identifier
    pub id: i64,
    /// Job title
    pub title: String,
    /// Annual salary
    pub salary: Option<i64>,
    /// Equity fraction
    pub equity: Option<f64>,
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    /// Job title
    pub title: String,
    /// Annual salary
    #[serde(default)]
    pub salary: Option<i64>,
    /// Equity fraction
    #[serde(default)]
    pub equity: Option<f64>,
    /// Owning company
    pub company_handle: String,
}

impl NewJob {
    /// Check field formats and ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        check_text("title", &self.title, limits::NAME_MAX_LEN)?;
        check_slug("companyHandle", &self.company_handle, limits::HANDLE_MAX_LEN)?;
        if let Some(salary) = self.salary {
            check_non_negative("salary", salary)?;
        }
        if let Some(equity) = self.equity {
            check_equity(equity)?;
        }
        Ok(())
    }
}

/// Body of `PATCH /jobs/:id`; id and company are immutable
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJob {
    /// New title
    pub title: Option<String>,
    /// New salary; `null` clears it
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub salary: Option<Option<i64>>,
    /// New equity; `null` clears it
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub equity: Option<Option<f64>>,
}

impl UpdateJob {
    /// Check the fields that were supplied
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            check_text("title", title, limits::NAME_MAX_LEN)?;
        }
        if let Some(Some(salary)) = self.salary {
            check_non_negative("salary", salary)?;
        }
        if let Some(Some(equity)) = self.equity {
            check_equity(equity)?;
        }
        Ok(())
    }

    /// Supplied fields keyed by their JSON names
    #[must_use]
    pub fn to_payload(&self) -> UpdatePayload {
        let mut payload = UpdatePayload::new();
        payload.set_present("title", self.title.as_deref());
        payload.set_present("salary", self.salary);
        payload.set_present("equity", self.equity);
        payload
    }
}

fn check_equity(equity: f64) -> AppResult<()> {
    if (0.0..=1.0).contains(&equity) {
        Ok(())
    } else {
        Err(AppError::invalid_input("equity must be between 0 and 1"))
    }
}
