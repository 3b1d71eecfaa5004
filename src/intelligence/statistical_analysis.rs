// ABOUTME: Descriptive statistics and Pearson correlation for the weekly fitness table
// ABOUTME: Implements mean, sample deviation, interpolated quantiles, describe, and correlation matrix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: statistical calculations with controlled ranges

use crate::errors::{AppError, AppResult};
use crate::models::{FitnessTable, NumericColumn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Summary of one numeric column, in the order rows are printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column being summarised
    pub column: NumericColumn,
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` below two values
    pub std: Option<f64>,
    /// Smallest value
    pub min: Option<f64>,
    /// 25th percentile
    pub q25: Option<f64>,
    /// Median
    pub median: Option<f64>,
    /// 75th percentile
    pub q75: Option<f64>,
    /// Largest value
    pub max: Option<f64>,
}

/// Pairwise Pearson coefficients over a fixed column set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Row and column order
    pub columns: Vec<NumericColumn>,
    /// `values[i][j]` is the coefficient of `columns[i]` against `columns[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Number of rows (and columns)
    #[must_use]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient at `(row, col)`
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True when `values[i][j] == values[j][i]` within `tolerance` everywhere
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.size();
        self.values.len() == n
            && self.values.iter().all(|row| row.len() == n)
            && (0..n).all(|i| (0..n).all(|j| (self.values[i][j] - self.values[j][i]).abs() <= tolerance))
    }
}

/// Statistics engine for the weekly table
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Sample standard deviation with Bessel's correction
    #[must_use]
    pub fn sample_std(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let sum_sq = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>();
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    }

    /// Quantile `q` in `[0, 1]` with linear interpolation between closest ranks
    #[must_use]
    pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
        if values.is_empty() || !(0.0..=1.0).contains(&q) {
            return None;
        }
        let sorted = Self::sorted(values);
        let position = q * (sorted.len() - 1) as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;
        Some(fraction.mul_add(sorted[upper] - sorted[lower], sorted[lower]))
    }

    /// Summarise one series
    #[must_use]
    pub fn summarize(column: NumericColumn, values: &[f64]) -> ColumnSummary {
        let sorted = Self::sorted(values);
        ColumnSummary {
            column,
            count: values.len(),
            mean: Self::mean(values),
            std: Self::sample_std(values),
            min: sorted.first().copied(),
            q25: Self::quantile(&sorted, 0.25),
            median: Self::quantile(&sorted, 0.5),
            q75: Self::quantile(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// Summaries for every numeric column present in the table
    #[must_use]
    pub fn describe(table: &FitnessTable) -> Vec<ColumnSummary> {
        table
            .numeric_columns()
            .into_iter()
            .filter_map(|column| {
                table
                    .column(column)
                    .map(|values| Self::summarize(column, &values))
            })
            .collect()
    }

    /// Pearson correlation coefficient of two equally sized series
    ///
    /// A series with zero variance has no linear relationship; 0.0 is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the series differ in length or hold fewer than two values
    pub fn pearson(x: &[f64], y: &[f64]) -> AppResult<f64> {
        if x.len() != y.len() {
            return Err(AppError::invalid_input(format!(
                "Cannot correlate series of different lengths: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for correlation: need at least 2, got {}",
                x.len()
            )));
        }

        let mean_x = x.iter().sum::<f64>() / x.len() as f64;
        let mean_y = y.iter().sum::<f64>() / y.len() as f64;

        let (mut cov, mut var_x, mut var_y) = (0.0_f64, 0.0_f64, 0.0_f64);
        for (xi, yi) in x.iter().zip(y) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            cov = dx.mul_add(dy, cov);
            var_x = dx.mul_add(dx, var_x);
            var_y = dy.mul_add(dy, var_y);
        }

        let denominator = (var_x * var_y).sqrt();
        if denominator <= f64::EPSILON {
            return Ok(0.0);
        }
        Ok((cov / denominator).clamp(-1.0, 1.0))
    }

    /// Correlation matrix over every numeric column present in the table
    ///
    /// # Errors
    ///
    /// Returns an error if the table has fewer than two days
    pub fn correlation_matrix(table: &FitnessTable) -> AppResult<CorrelationMatrix> {
        let columns = table.numeric_columns();
        let series: Vec<Vec<f64>> = columns
            .iter()
            .map(|column| {
                table.column(*column).ok_or_else(|| {
                    AppError::internal(format!("Column {column} missing from table"))
                })
            })
            .collect::<AppResult<_>>()?;

        let n = columns.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = Self::pearson(&series[i], &series[j])?;
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(CorrelationMatrix { columns, values })
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted
    }
}
