// ABOUTME: Re-exports the unified error types from the foundation crate
// ABOUTME: Keeps `crate::errors::AppError` as the single import path inside the API crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use jobly_core::errors::*;
