// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the database, token manager, and configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::{CompaniesManager, Database, JobsManager, UsersManager};
use std::sync::Arc;

/// Resources shared by all handlers
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Token issuer and validator
    pub auth_manager: AuthManager,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from a connected database and configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        );
        Self {
            database,
            auth_manager,
            config,
        }
    }

    /// Company data access
    #[must_use]
    pub fn companies(&self) -> CompaniesManager {
        self.database.companies()
    }

    /// Job data access
    #[must_use]
    pub fn jobs(&self) -> JobsManager {
        self.database.jobs()
    }

    /// User data access at the configured bcrypt cost
    #[must_use]
    pub fn users(&self) -> UsersManager {
        self.database.users(self.config.auth.bcrypt_cost)
    }
}
