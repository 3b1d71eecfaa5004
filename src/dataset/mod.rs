// ABOUTME: Dataset stage of the report pipeline: synthetic generation and derived columns
// ABOUTME: Produces the weekly FitnessTable consumed by statistics and charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Derived columns (calorie balance)
pub mod derived;
/// Seeded synthetic week generator
pub mod generator;

pub use derived::apply_calorie_balance;
pub use generator::{generate_week, round_to, SyntheticWeekGenerator};
