// ABOUTME: Integration tests for the jobs database manager
// ABOUTME: Covers creation, title/salary/equity filters, lookup, partial update, and removal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use jobly_api::errors::ErrorCode;
use jobly_api::models::{JobFilter, NewJob, UpdateJob};

fn titles(jobs: &[jobly_api::models::Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

#[tokio::test]
async fn test_create_job() {
    let fixtures = common::setup().await.unwrap();
    let request = NewJob {
        title: "Test".to_owned(),
        salary: Some(100),
        equity: Some(0.1),
        company_handle: "c1".to_owned(),
    };

    let job = fixtures.resources.jobs().create(&request).await.unwrap();

    assert!(job.id > fixtures.job_ids[2]);
    assert_eq!(job.title, "Test");
    assert_eq!(job.salary, Some(100));
    assert_eq!(job.equity, Some(0.1));
    assert_eq!(job.company_handle, "c1");
}

#[tokio::test]
async fn test_create_job_for_unknown_company() {
    let fixtures = common::setup().await.unwrap();
    let request = NewJob {
        title: "Test".to_owned(),
        salary: None,
        equity: None,
        company_handle: "nope".to_owned(),
    };

    let err = fixtures.resources.jobs().create(&request).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_find_all_without_filter() {
    let fixtures = common::setup().await.unwrap();

    let jobs = fixtures
        .resources
        .jobs()
        .find_all(&JobFilter::default())
        .await
        .unwrap();

    assert_eq!(titles(&jobs), ["Test Job 1", "Test Job 2", "Test Job 3"]);
    assert_eq!(jobs[2].salary, None);
    assert_eq!(jobs[2].equity, None);
}

#[tokio::test]
async fn test_find_all_min_salary_skips_null_salaries() {
    let fixtures = common::setup().await.unwrap();
    let filter = JobFilter {
        min_salary: Some(25000),
        ..JobFilter::default()
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();

    assert_eq!(titles(&jobs), ["Test Job 1", "Test Job 2"]);
}

#[tokio::test]
async fn test_find_all_has_equity() {
    let fixtures = common::setup().await.unwrap();
    let filter = JobFilter {
        has_equity: Some(true),
        ..JobFilter::default()
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();

    assert_eq!(titles(&jobs), ["Test Job 1"]);
}

#[tokio::test]
async fn test_find_all_equity_false_returns_everything() {
    let fixtures = common::setup().await.unwrap();
    let filter = JobFilter {
        has_equity: Some(false),
        ..JobFilter::default()
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();

    assert_eq!(jobs.len(), 3);
}

#[tokio::test]
async fn test_find_all_title_substring_any_case() {
    let fixtures = common::setup().await.unwrap();
    let filter = JobFilter {
        title: Some("ob".to_owned()),
        ..JobFilter::default()
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();
    assert_eq!(jobs.len(), 3);

    let filter = JobFilter {
        title: Some("JOB 3".to_owned()),
        ..JobFilter::default()
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();
    assert_eq!(titles(&jobs), ["Test Job 3"]);
}

#[tokio::test]
async fn test_find_all_title_folds_non_ascii_case() {
    let fixtures = common::setup().await.unwrap();
    let jobs = fixtures.resources.jobs();
    let update = UpdateJob {
        title: Some("ÉTUDE Lead".to_owned()),
        ..UpdateJob::default()
    };
    jobs.update(fixtures.job_ids[0], &update).await.unwrap();

    let filter = JobFilter {
        title: Some("étude".to_owned()),
        ..JobFilter::default()
    };
    let found = jobs.find_all(&filter).await.unwrap();

    assert_eq!(titles(&found), ["ÉTUDE Lead"]);
}

#[tokio::test]
async fn test_find_all_combined_filters() {
    let fixtures = common::setup().await.unwrap();
    let filter = JobFilter {
        title: Some("job".to_owned()),
        min_salary: Some(30000),
        has_equity: Some(true),
    };

    let jobs = fixtures.resources.jobs().find_all(&filter).await.unwrap();

    assert_eq!(titles(&jobs), ["Test Job 1"]);
}

#[tokio::test]
async fn test_get_job() {
    let fixtures = common::setup().await.unwrap();

    let job = fixtures
        .resources
        .jobs()
        .get(fixtures.job_ids[0])
        .await
        .unwrap();

    assert_eq!(job.title, "Test Job 1");
    assert_eq!(job.salary, Some(55000));
    assert_eq!(job.company_handle, "c1");
}

#[tokio::test]
async fn test_get_missing_job() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures.resources.jobs().get(0).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_job() {
    let fixtures = common::setup().await.unwrap();
    let update = UpdateJob {
        title: Some("New".to_owned()),
        salary: Some(Some(500)),
        equity: Some(Some(0.5)),
    };

    let job = fixtures
        .resources
        .jobs()
        .update(fixtures.job_ids[0], &update)
        .await
        .unwrap();

    assert_eq!(job.id, fixtures.job_ids[0]);
    assert_eq!(job.title, "New");
    assert_eq!(job.salary, Some(500));
    assert_eq!(job.equity, Some(0.5));
    assert_eq!(job.company_handle, "c1");
}

#[tokio::test]
async fn test_update_job_clears_salary() {
    let fixtures = common::setup().await.unwrap();
    let update = UpdateJob {
        salary: Some(None),
        ..UpdateJob::default()
    };

    let job = fixtures
        .resources
        .jobs()
        .update(fixtures.job_ids[1], &update)
        .await
        .unwrap();

    assert_eq!(job.salary, None);
    assert_eq!(job.title, "Test Job 2");
}

#[tokio::test]
async fn test_update_missing_job() {
    let fixtures = common::setup().await.unwrap();
    let update = UpdateJob {
        title: Some("New".to_owned()),
        ..UpdateJob::default()
    };

    let err = fixtures.resources.jobs().update(0, &update).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_job_with_no_data() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures
        .resources
        .jobs()
        .update(fixtures.job_ids[0], &UpdateJob::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_remove_job() {
    let fixtures = common::setup().await.unwrap();
    let jobs = fixtures.resources.jobs();

    jobs.remove(fixtures.job_ids[0]).await.unwrap();

    assert!(jobs.get(fixtures.job_ids[0]).await.is_err());
    assert_eq!(
        jobs.remove(fixtures.job_ids[0]).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}
