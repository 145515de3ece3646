// ABOUTME: Company entity, company detail with its jobs, and create/update bodies
// ABOUTME: Update bodies translate into ordered partial-update payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{check_non_negative, check_slug, check_text, JobSummary};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use jobly_core::query::UpdatePayload;
use serde::{Deserialize, Serialize};

/// A company that posts jobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique slug, e.g. `c1`
    pub handle: String,
    /// Display name (unique)
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Head count, when known
    pub num_employees: Option<i64>,
    /// Logo location, when known
    pub logo_url: Option<String>,
}

/// A company together with the jobs it has posted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    /// Company fields, flattened into the same JSON object
    #[serde(flatten)]
    pub company: Company,
    /// Jobs ordered by id
    pub jobs: Vec<JobSummary>,
}

/// Body of `POST /companies`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    /// Unique slug
    pub handle: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Head count
    #[serde(default)]
    pub num_employees: Option<i64>,
    /// Logo URL
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl NewCompany {
    /// Check field formats and ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        check_slug("handle", &self.handle, limits::HANDLE_MAX_LEN)?;
        check_text("name", &self.name, limits::NAME_MAX_LEN)?;
        if let Some(n) = self.num_employees {
            check_non_negative("numEmployees", n)?;
        }
        if let Some(logo_url) = &self.logo_url {
            check_logo_url(logo_url)?;
        }
        Ok(())
    }
}

/// Body of `PATCH /companies/:handle`; the handle itself is immutable
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCompany {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New head count; `null` clears it
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub num_employees: Option<Option<i64>>,
    /// New logo URL; `null` clears it
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub logo_url: Option<Option<String>>,
}

impl UpdateCompany {
    /// Check the fields that were supplied
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            check_text("name", name, limits::NAME_MAX_LEN)?;
        }
        if let Some(Some(n)) = self.num_employees {
            check_non_negative("numEmployees", n)?;
        }
        if let Some(Some(logo_url)) = &self.logo_url {
            check_logo_url(logo_url)?;
        }
        Ok(())
    }

    /// Supplied fields keyed by their JSON names
    #[must_use]
    pub fn to_payload(&self) -> UpdatePayload {
        let mut payload = UpdatePayload::new();
        payload.set_present("name", self.name.as_deref());
        payload.set_present("description", self.description.as_deref());
        payload.set_present("numEmployees", self.num_employees);
        payload.set_present("logoUrl", self.logo_url.as_ref().map(Option::as_deref));
        payload
    }
}

fn check_logo_url(value: &str) -> AppResult<()> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| AppError::invalid_input(format!("logoUrl is not a valid URL: {e}")))
}
