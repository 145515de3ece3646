// ABOUTME: Job posting persistence: create, filtered listing, lookup, partial update, delete
// ABOUTME: Job fields share their column names, so updates use the identity field map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{bind_values, CompaniesManager};
use crate::constants::tables;
use crate::errors::{AppError, AppResult};
use crate::models::{Job, JobFilter, NewJob, UpdateJob};
use jobly_core::query::{build_filtered_query, search_key, sql_for_partial_update, FieldNameMap};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

const JOB_FIELDS: &str = "id, title, salary, equity, company_handle";

/// Job database operations manager
pub struct JobsManager {
    pool: SqlitePool,
}

impl JobsManager {
    /// Create a new jobs manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a job posting
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the company does not exist, or a database error.
    pub async fn create(&self, job: &NewJob) -> AppResult<Job> {
        if !CompaniesManager::new(self.pool.clone())
            .exists(&job.company_handle)
            .await?
        {
            return Err(AppError::not_found(format!(
                "Company {}",
                job.company_handle
            )));
        }

        let row = sqlx::query(&format!(
            "INSERT INTO jobs (title, title_search, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {JOB_FIELDS}"
        ))
        .bind(&job.title)
        .bind(search_key(&job.title))
        .bind(job.salary)
        .bind(job.equity)
        .bind(&job.company_handle)
        .fetch_one(&self.pool)
        .await?;

        let created = row_to_job(&row)?;
        info!(id = created.id, company = %created.company_handle, "Created job");
        Ok(created)
    }

    /// List jobs matching `filter`, ordered by title
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_all(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        let clause = build_filtered_query(filter)?;
        let sql = clause.apply(&format!("SELECT {JOB_FIELDS} FROM {}", tables::JOBS));
        debug!(%sql, "Listing jobs");

        let rows = bind_values(sqlx::query(&sql), clause.values())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list jobs: {e}")))?;

        rows.iter().map(row_to_job).collect()
    }

    /// Get a job by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no job has `id`, or a database error.
    pub async fn get(&self, id: i64) -> AppResult<Job> {
        let row = sqlx::query(&format!("SELECT {JOB_FIELDS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get job: {e}")))?
            .ok_or_else(|| AppError::not_found(format!("Job {id}")))?;

        row_to_job(&row)
    }

    /// Apply a partial update to title, salary, or equity
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `update` has no fields, `ResourceNotFound`
    /// if no job has `id`, or a database error.
    pub async fn update(&self, id: i64, update: &UpdateJob) -> AppResult<Job> {
        let mut payload = update.to_payload();
        if let Some(title) = &update.title {
            payload.set("title_search", search_key(title));
        }
        let (sql, values) = sql_for_partial_update(&payload, FieldNameMap::IDENTITY)?
            .into_update(tables::JOBS, "id", id, JOB_FIELDS);
        debug!(%sql, "Updating job");

        let row = bind_values(sqlx::query(&sql), &values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job {id}")))?;

        info!(id, "Updated job");
        row_to_job(&row)
    }

    /// Delete a job
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no job has `id`, or a database error.
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete job: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job {id}")));
        }

        info!(id, "Deleted job");
        Ok(())
    }
}

fn row_to_job(row: &SqliteRow) -> AppResult<Job> {
    Ok(Job {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        salary: row.try_get("salary")?,
        equity: row.try_get("equity")?,
        company_handle: row.try_get("company_handle")?,
    })
}
