// ABOUTME: Application constants organized by domain
// ABOUTME: Table names, field length limits, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Database table names
pub mod tables {
    /// Companies table
    pub const COMPANIES: &str = "companies";
    /// Job postings table
    pub const JOBS: &str = "jobs";
    /// Registered users table
    pub const USERS: &str = "users";
    /// Job applications join table
    pub const APPLICATIONS: &str = "applications";
}

/// Field validation limits
pub mod limits {
    /// Maximum length of a company handle
    pub const HANDLE_MAX_LEN: usize = 25;
    /// Maximum length of a username
    pub const USERNAME_MAX_LEN: usize = 25;
    /// Maximum length of names and titles
    pub const NAME_MAX_LEN: usize = 255;
    /// Minimum password length
    pub const PASSWORD_MIN_LEN: usize = 5;
    /// Maximum password length (bcrypt truncates beyond 72 bytes)
    pub const PASSWORD_MAX_LEN: usize = 72;
    /// Maximum email length
    pub const EMAIL_MAX_LEN: usize = 60;
    /// Longest token lifetime accepted from configuration (one year)
    pub const JWT_EXPIRY_MAX_HOURS: i64 = 24 * 365;
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3001;
    /// Default database URL
    pub const DATABASE_URL: &str = "sqlite:./data/jobly.db";
    /// Default token lifetime in hours
    pub const JWT_EXPIRY_HOURS: i64 = 24;
    /// Default bcrypt work factor
    pub const BCRYPT_COST: u32 = 12;
    /// Development-only signing secret
    pub const DEV_JWT_SECRET: &str = "secret-dev";
    /// Default per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body size in bytes
    pub const MAX_BODY_BYTES: usize = 64 * 1024;
    /// Connection pool size for file-backed databases
    pub const DB_MAX_CONNECTIONS: u32 = 5;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Server binary name
    pub const JOBLY_SERVER: &str = "jobly-server";
}
