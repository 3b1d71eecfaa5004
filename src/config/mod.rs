// ABOUTME: Configuration module for the weekly report run
// ABOUTME: Re-exports the environment-driven ReportConfig and display policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Pierre weekly report
//!
//! - **Environment**: run parameters from defaults, environment variables, and flags

/// Environment and run configuration
pub mod environment;

pub use environment::{DisplayMode, ReportConfig};
