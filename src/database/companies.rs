// ABOUTME: Company persistence: create, filtered listing, detail with jobs, partial update, delete
// ABOUTME: Listing and update statements come from the shared query builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::bind_values;
use crate::constants::tables;
use crate::errors::{AppError, AppResult};
use crate::models::{Company, CompanyDetail, CompanyFilter, JobSummary, NewCompany, UpdateCompany};
use jobly_core::query::{build_filtered_query, search_key, sql_for_partial_update, FieldNameMap};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

/// JSON field names that differ from their columns
const COMPANY_COLUMNS: FieldNameMap<'static> = FieldNameMap::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

const COMPANY_FIELDS: &str = "handle, name, description, num_employees, logo_url";

/// Company database operations manager
pub struct CompaniesManager {
    pool: SqlitePool,
}

impl CompaniesManager {
    /// Create a new companies manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a company
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the handle is taken, or a database error.
    pub async fn create(&self, company: &NewCompany) -> AppResult<Company> {
        let existing = sqlx::query("SELECT handle FROM companies WHERE handle = $1")
            .bind(&company.handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to check company handle: {e}")))?;
        if existing.is_some() {
            return Err(AppError::invalid_input(format!(
                "Duplicate company: {}",
                company.handle
            )));
        }

        let row = sqlx::query(&format!(
            "INSERT INTO companies (handle, name, name_search, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COMPANY_FIELDS}"
        ))
        .bind(&company.handle)
        .bind(&company.name)
        .bind(search_key(&company.name))
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(&company.logo_url)
        .fetch_one(&self.pool)
        .await?;

        info!(handle = %company.handle, "Created company");
        row_to_company(&row)
    }

    /// List companies matching `filter`, ordered by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the filter is contradictory, or a database error.
    pub async fn find_all(&self, filter: &CompanyFilter) -> AppResult<Vec<Company>> {
        let clause = build_filtered_query(filter)?;
        let sql = clause.apply(&format!("SELECT {COMPANY_FIELDS} FROM {}", tables::COMPANIES));
        debug!(%sql, "Listing companies");

        let rows = bind_values(sqlx::query(&sql), clause.values())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list companies: {e}")))?;

        rows.iter().map(row_to_company).collect()
    }

    /// Get a company and its jobs
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no company has `handle`, or a database error.
    pub async fn get(&self, handle: &str) -> AppResult<CompanyDetail> {
        let row = sqlx::query(&format!(
            "SELECT {COMPANY_FIELDS} FROM companies WHERE handle = $1"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get company: {e}")))?
        .ok_or_else(|| AppError::not_found(format!("Company {handle}")))?;

        let company = row_to_company(&row)?;

        let job_rows = sqlx::query(
            r"
            SELECT id, title, salary, equity
            FROM jobs
            WHERE company_handle = $1
            ORDER BY id
            ",
        )
        .bind(handle)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get company jobs: {e}")))?;

        let jobs = job_rows
            .iter()
            .map(row_to_job_summary)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CompanyDetail { company, jobs })
    }

    /// Apply a partial update
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `update` has no fields, `ResourceNotFound`
    /// if no company has `handle`, or a database error.
    pub async fn update(&self, handle: &str, update: &UpdateCompany) -> AppResult<Company> {
        let mut payload = update.to_payload();
        if let Some(name) = &update.name {
            payload.set("name_search", search_key(name));
        }
        let (sql, values) = sql_for_partial_update(&payload, COMPANY_COLUMNS)?
            .into_update(tables::COMPANIES, "handle", handle, COMPANY_FIELDS);
        debug!(%sql, "Updating company");

        let row = bind_values(sqlx::query(&sql), &values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Company {handle}")))?;

        info!(%handle, "Updated company");
        row_to_company(&row)
    }

    /// Delete a company and, by cascade, its jobs
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no company has `handle`, or a database error.
    pub async fn remove(&self, handle: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM companies WHERE handle = $1")
            .bind(handle)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete company: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Company {handle}")));
        }

        info!(%handle, "Deleted company");
        Ok(())
    }

    /// Whether a company with `handle` exists
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails.
    pub async fn exists(&self, handle: &str) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM companies WHERE handle = $1")
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up company: {e}")))?;
        Ok(row.is_some())
    }
}

fn row_to_company(row: &SqliteRow) -> AppResult<Company> {
    Ok(Company {
        handle: row.try_get("handle")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        num_employees: row.try_get("num_employees")?,
        logo_url: row.try_get("logo_url")?,
    })
}

fn row_to_job_summary(row: &SqliteRow) -> AppResult<JobSummary> {
    Ok(JobSummary {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        salary: row.try_get("salary")?,
        equity: row.try_get("equity")?,
    })
}
