// ABOUTME: Re-exports application constants from the foundation crate
// ABOUTME: Table names, field limits, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use jobly_core::constants::*;
