// ABOUTME: Console formatting for the dataset dump, descriptive statistics, and weekly summary
// ABOUTME: Tables are right-aligned with a row index; the summary can also be emitted as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Console Output Formatting
//!
//! The report prints three blocks to standard output: the raw dataset, a
//! descriptive-statistics table, and the weekly summary. Reals are printed to
//! two decimals in tables; the summary rounds each average as documented on
//! [`WeeklySummary`].

use crate::errors::{AppError, AppResult};
use crate::intelligence::{ColumnSummary, StatisticalAnalyzer};
use crate::models::{FitnessTable, NumericColumn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heading printed above the dataset dump
pub const DATASET_HEADING: &str = "=== FITNESS DATA SAMPLE ===";
/// Heading printed above the descriptive statistics
pub const STATISTICS_HEADING: &str = "Basic statistics:";
/// Heading printed above the weekly summary
pub const SUMMARY_HEADING: &str = "=== WEEKLY SUMMARY ===";
/// Final confirmation line
pub const SAVED_CONFIRMATION: &str = "All plots saved as high-resolution PNG files.";

const COLUMN_GAP: &str = "  ";
const MISSING: &str = "NaN";

/// How the weekly summary is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object
    Json,
}

impl OutputFormat {
    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown summary format '{other}' (expected text or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-aligned text table with a leading index column
#[derive(Debug, Clone, Default)]
struct TextTable {
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
}

impl TextTable {
    fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, index: impl Into<String>, cells: Vec<String>) {
        self.rows.push((index.into(), cells));
    }

    fn column_widths(&self) -> (usize, Vec<usize>) {
        let index_width = self
            .rows
            .iter()
            .map(|(index, _)| index.len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|(_, cells)| cells.get(col).map(String::len))
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        (index_width, widths)
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (index_width, widths) = self.column_widths();
        write!(f, "{:index_width$}", "")?;
        for (header, width) in self.headers.iter().zip(&widths) {
            write!(f, "{COLUMN_GAP}{header:>width$}")?;
        }
        for (index, cells) in &self.rows {
            write!(f, "\n{index:<index_width$}")?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, "{COLUMN_GAP}{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

fn real(value: f64) -> String {
    format!("{value:.2}")
}

fn optional_real(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), real)
}

/// Every record with its row index; whole-number columns plain, reals to two decimals
#[must_use]
pub fn format_dataset(table: &FitnessTable) -> String {
    let columns = table.numeric_columns();
    let headers = std::iter::once("Date".to_owned())
        .chain(columns.iter().map(|column| column.display_name().to_owned()))
        .collect();
    let mut text = TextTable::new(headers);
    for (index, record) in table.records().iter().enumerate() {
        let cells = std::iter::once(record.date_label())
            .chain(columns.iter().map(|column| {
                column.value(record).map_or_else(
                    || MISSING.to_owned(),
                    |value| {
                        if column.is_integer() {
                            format!("{value:.0}")
                        } else {
                            real(value)
                        }
                    },
                )
            }))
            .collect();
        text.push(index.to_string(), cells);
    }
    text.to_string()
}

/// `count`, `mean`, `std`, `min`, quartiles, and `max` per numeric column
#[must_use]
pub fn format_describe(summaries: &[ColumnSummary]) -> String {
    let headers = summaries
        .iter()
        .map(|summary| summary.column.display_name().to_owned())
        .collect();
    let mut text = TextTable::new(headers);
    let rows: [(&str, fn(&ColumnSummary) -> Option<f64>); 8] = [
        ("count", |s| Some(s.count as f64)),
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q25),
        ("50%", |s| s.median),
        ("75%", |s| s.q75),
        ("max", |s| s.max),
    ];
    for (name, stat) in rows {
        text.push(
            name,
            summaries
                .iter()
                .map(|summary| optional_real(stat(summary)))
                .collect(),
        );
    }
    text.to_string()
}

/// Weekly averages printed after the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Mean steps, printed as a whole number
    pub average_steps: f64,
    /// Mean sleep, printed to one decimal
    pub average_sleep_hours: f64,
    /// Mean water intake, printed as a whole number
    pub average_water_intake_ml: f64,
    /// Mean calorie balance, printed as a whole number
    pub average_calorie_balance: f64,
    /// Mean progress, printed to one decimal
    pub average_progress_pct: f64,
}

impl WeeklySummary {
    /// Averages over a derived table
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or calorie balance has not been derived
    pub fn from_table(table: &FitnessTable) -> AppResult<Self> {
        let mean_of = |column: NumericColumn| -> AppResult<f64> {
            table
                .column(column)
                .as_deref()
                .and_then(StatisticalAnalyzer::mean)
                .ok_or_else(|| {
                    AppError::invalid_input(format!("No values to average for {column}"))
                })
        };
        Ok(Self {
            average_steps: mean_of(NumericColumn::Steps)?,
            average_sleep_hours: mean_of(NumericColumn::SleepHours)?,
            average_water_intake_ml: mean_of(NumericColumn::WaterIntakeMl)?,
            average_calorie_balance: mean_of(NumericColumn::CalorieBalance)?,
            average_progress_pct: mean_of(NumericColumn::ProgressPct)?,
        })
    }

    /// Summary lines without heading or confirmation
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Average Steps: {:.0}", self.average_steps),
            format!("Average Sleep Hours: {:.1} hrs", self.average_sleep_hours),
            format!("Average Water Intake: {:.0} ml", self.average_water_intake_ml),
            format!(
                "Average Calorie Balance: {:.0} kcal",
                self.average_calorie_balance
            ),
            format!("Average Progress: {:.1}%", self.average_progress_pct),
        ]
    }

    /// Full summary block in `format`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Text => {
                let mut out = String::from(SUMMARY_HEADING);
                for line in self.lines() {
                    out.push('\n');
                    out.push_str(&line);
                }
                out.push_str("\n\n");
                out.push_str(SAVED_CONFIRMATION);
                Ok(out)
            }
            OutputFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                AppError::internal(format!("Failed to serialize summary: {e}")).with_source(e)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessRecord;
    use chrono::NaiveDate;

    fn table() -> FitnessTable {
        let record = |day: u32, steps: u32, sleep: f64| FitnessRecord {
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            steps,
            calories_burned: 2000,
            calories_consumed: 2300,
            water_intake_ml: 2500,
            sleep_hours: sleep,
            bmi: 22.25,
            bmr: 1500.5,
            progress_pct: 75.0,
            calorie_balance: None,
        };
        FitnessTable::new(vec![record(18, 5000, 7.0), record(19, 10001, 8.5)])
    }

    #[test]
    fn test_dataset_table_layout() {
        let text = format_dataset(&table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Date"));
        assert!(lines[0].contains("Water_Intake(ml)"));
        assert!(!lines[0].contains("Calorie_Balance"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].contains("18-Oct"));
        assert!(lines[2].contains("10001"));
        assert!(lines[2].contains("8.50"));
        assert!(lines[2].contains("1500.50"));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn test_text_table_right_aligns_cells() {
        let mut text = TextTable::new(vec!["A".to_owned(), "Longer".to_owned()]);
        text.push("0", vec!["12345".to_owned(), "1".to_owned()]);
        text.push("10", vec!["7".to_owned(), "22".to_owned()]);
        assert_eq!(
            text.to_string(),
            "        A  Longer\n0   12345       1\n10      7      22"
        );
    }

    #[test]
    fn test_describe_rows() {
        let summaries = StatisticalAnalyzer::describe(&table());
        let text = format_describe(&summaries);
        let names: Vec<&str> = text
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(
            names,
            ["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
        assert!(text.lines().nth(1).unwrap().contains("2.00"));
        assert!(text.lines().nth(2).unwrap().contains("7500.50"));
    }

    #[test]
    fn test_summary_requires_calorie_balance() {
        assert!(WeeklySummary::from_table(&table()).is_err());
    }

    #[test]
    fn test_summary_text_block() {
        let summary = WeeklySummary {
            average_steps: 7_500.6,
            average_sleep_hours: 7.26,
            average_water_intake_ml: 2_499.4,
            average_calorie_balance: -120.2,
            average_progress_pct: 81.04,
        };
        let text = summary.render(OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "=== WEEKLY SUMMARY ===\n\
             Average Steps: 7501\n\
             Average Sleep Hours: 7.3 hrs\n\
             Average Water Intake: 2499 ml\n\
             Average Calorie Balance: -120 kcal\n\
             Average Progress: 81.0%\n\
             \n\
             All plots saved as high-resolution PNG files."
        );
    }

    #[test]
    fn test_summary_json() {
        let summary = WeeklySummary {
            average_steps: 1.0,
            average_sleep_hours: 2.0,
            average_water_intake_ml: 3.0,
            average_calorie_balance: 4.0,
            average_progress_pct: 5.0,
        };
        let json = summary.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["average_calorie_balance"], 4.0);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("toon".parse::<OutputFormat>().is_err());
    }
}
