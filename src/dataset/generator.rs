// ABOUTME: Seeded synthetic generator for one week of daily fitness metrics
// ABOUTME: Draws each field as one batch over a single ChaCha8 stream in fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic week generator.
//!
//! One generator draws every field, one batch of `days` values per field, in this
//! order: steps, calories burned, calories consumed, water intake, sleep hours, BMI,
//! BMR, progress. Reordering the batches changes every value that follows.

use crate::constants::generation::{
    BMI_DECIMALS, BMI_RANGE, BMR_DECIMALS, BMR_RANGE, CALORIES_BURNED_RANGE,
    CALORIES_CONSUMED_RANGE, PROGRESS_PCT_DECIMALS, PROGRESS_PCT_RANGE, SLEEP_HOURS_DECIMALS,
    SLEEP_HOURS_RANGE, STEPS_RANGE, WATER_INTAKE_ML_RANGE,
};
use crate::errors::{AppError, AppResult};
use crate::models::{FitnessRecord, FitnessTable};
use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Deterministic generator of synthetic weekly fitness data
#[derive(Debug, Clone)]
pub struct SyntheticWeekGenerator {
    seed: u64,
    days: u32,
    rng: ChaCha8Rng,
}

impl SyntheticWeekGenerator {
    /// Create a generator with a deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64, days: u32) -> Self {
        Self {
            seed,
            days,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate the table of days ending on `today` (inclusive), oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the day count is zero, a sampling range is inverted,
    /// or the date span underflows the calendar
    pub fn generate(&mut self, today: NaiveDate) -> AppResult<FitnessTable> {
        if self.days == 0 {
            return Err(AppError::invalid_input(
                "Cannot generate a fitness table covering zero days",
            ));
        }

        let dates = date_span(today, self.days)?;
        let count = dates.len();
        debug!(seed = self.seed, days = self.days, %today, "Generating synthetic fitness table");

        let steps = self.draw_integers("steps", STEPS_RANGE, count)?;
        let calories_burned = self.draw_integers("calories_burned", CALORIES_BURNED_RANGE, count)?;
        let calories_consumed =
            self.draw_integers("calories_consumed", CALORIES_CONSUMED_RANGE, count)?;
        let water_intake_ml = self.draw_integers("water_intake_ml", WATER_INTAKE_ML_RANGE, count)?;
        let sleep_hours =
            self.draw_reals("sleep_hours", SLEEP_HOURS_RANGE, SLEEP_HOURS_DECIMALS, count)?;
        let bmi = self.draw_reals("bmi", BMI_RANGE, BMI_DECIMALS, count)?;
        let bmr = self.draw_reals("bmr", BMR_RANGE, BMR_DECIMALS, count)?;
        let progress_pct =
            self.draw_reals("progress_pct", PROGRESS_PCT_RANGE, PROGRESS_PCT_DECIMALS, count)?;

        let records: Vec<FitnessRecord> = dates
            .into_iter()
            .enumerate()
            .map(|(i, date)| FitnessRecord {
                date,
                steps: steps[i],
                calories_burned: calories_burned[i],
                calories_consumed: calories_consumed[i],
                water_intake_ml: water_intake_ml[i],
                sleep_hours: sleep_hours[i],
                bmi: bmi[i],
                bmr: bmr[i],
                progress_pct: progress_pct[i],
                calorie_balance: None,
            })
            .collect();

        for record in &records {
            debug!(
                date = %record.date,
                steps = record.steps,
                calories_burned = record.calories_burned,
                calories_consumed = record.calories_consumed,
                sleep_hours = record.sleep_hours,
                "Generated synthetic day"
            );
        }

        Ok(FitnessTable::new(records))
    }

    /// Draw `count` integers uniformly from `[low, high)`
    fn draw_integers(
        &mut self,
        field: &str,
        (low, high): (u32, u32),
        count: usize,
    ) -> AppResult<Vec<u32>> {
        if low >= high {
            return Err(AppError::out_of_range(format!(
                "{field}: lower bound {low} must be below upper bound {high}"
            )));
        }
        Ok((0..count).map(|_| self.rng.gen_range(low..high)).collect())
    }

    /// Draw `count` reals uniformly from `[low, high)`, rounded to `decimals`
    fn draw_reals(
        &mut self,
        field: &str,
        (low, high): (f64, f64),
        decimals: u32,
        count: usize,
    ) -> AppResult<Vec<f64>> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(AppError::out_of_range(format!(
                "{field}: lower bound {low} must be below upper bound {high}"
            )));
        }
        Ok((0..count)
            .map(|_| round_to(self.rng.gen_range(low..high), decimals))
            .collect())
    }
}

/// Generate a week with a fresh generator
///
/// # Errors
///
/// See [`SyntheticWeekGenerator::generate`]
pub fn generate_week(seed: u64, days: u32, today: NaiveDate) -> AppResult<FitnessTable> {
    SyntheticWeekGenerator::new(seed, days).generate(today)
}

/// Contiguous dates ending on `today`, oldest first
fn date_span(today: NaiveDate, days: u32) -> AppResult<Vec<NaiveDate>> {
    (0..days)
        .rev()
        .map(|offset| {
            today
                .checked_sub_days(Days::new(u64::from(offset)))
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "{days} days before {today} is outside the supported calendar"
                    ))
                })
        })
        .collect()
}

/// Round half to even at `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = f64::from(10_u32.pow(decimals));
    (value * factor).round_ties_even() / factor
}
