// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds in-memory resources seeded with three companies, three users, and three jobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `jobly_api`
//!
//! Fixture data:
//! - companies `c1`, `c2`, `c3` with 1, 2, and 3 employees
//! - users `u1` (admin), `u2`, `u3`, each with password `passwordN`
//! - jobs "Test Job 1" (55000, 0.91, c1), "Test Job 2" (25000, 0, c1),
//!   "Test Job 3" (no salary or equity, c3)
//! - `u2` has applied to "Test Job 1"

use anyhow::Result;
use jobly_api::{
    config::environment::ServerConfig,
    database::Database,
    models::{NewCompany, NewJob, NewUser},
    resources::ServerResources,
    routes::build_router,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Seeded test environment
pub struct Fixtures {
    /// Shared resources over an in-memory database
    pub resources: Arc<ServerResources>,
    /// Ids of "Test Job 1", "Test Job 2", "Test Job 3"
    pub job_ids: [i64; 3],
    /// Token for admin `u1`
    pub u1_token: String,
    /// Token for non-admin `u2`
    pub u2_token: String,
}

impl Fixtures {
    /// Router over these resources with all layers applied
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.resources))
    }

    /// `Authorization` header value for `u1`
    pub fn admin_bearer(&self) -> String {
        format!("Bearer {}", self.u1_token)
    }

    /// `Authorization` header value for `u2`
    pub fn user_bearer(&self) -> String {
        format!("Bearer {}", self.u2_token)
    }
}

/// Empty in-memory resources
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let config = ServerConfig::for_testing();
    let database = Database::new(&config.database.url).await?;
    Ok(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// In-memory resources seeded with the standard fixtures
pub async fn setup() -> Result<Fixtures> {
    let resources = create_test_resources().await?;

    let companies = resources.companies();
    for n in 1..=3_i64 {
        companies
            .create(&NewCompany {
                handle: format!("c{n}"),
                name: format!("C{n}"),
                description: format!("Desc{n}"),
                num_employees: Some(n),
                logo_url: Some(format!("http://c{n}.img")),
            })
            .await?;
    }

    let users = resources.users();
    let mut tokens = Vec::new();
    for n in 1..=3 {
        let user = users
            .register(&NewUser {
                username: format!("u{n}"),
                password: format!("password{n}"),
                first_name: format!("U{n}F"),
                last_name: format!("U{n}L"),
                email: format!("user{n}@user.com"),
                is_admin: n == 1,
            })
            .await?;
        tokens.push(resources.auth_manager.generate_token(&user)?);
    }

    let jobs = resources.jobs();
    let job1 = jobs
        .create(&NewJob {
            title: "Test Job 1".to_owned(),
            salary: Some(55000),
            equity: Some(0.91),
            company_handle: "c1".to_owned(),
        })
        .await?;
    let job2 = jobs
        .create(&NewJob {
            title: "Test Job 2".to_owned(),
            salary: Some(25000),
            equity: Some(0.0),
            company_handle: "c1".to_owned(),
        })
        .await?;
    let job3 = jobs
        .create(&NewJob {
            title: "Test Job 3".to_owned(),
            salary: None,
            equity: None,
            company_handle: "c3".to_owned(),
        })
        .await?;

    users.apply_to_job("u2", job1.id).await?;

    Ok(Fixtures {
        resources,
        job_ids: [job1.id, job2.id, job3.id],
        u1_token: tokens[0].clone(),
        u2_token: tokens[1].clone(),
    })
}
