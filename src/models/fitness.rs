// ABOUTME: Daily fitness record and the ordered weekly table built from it
// ABOUTME: Exposes numeric columns by name for statistics, charts, and console output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// `strftime` pattern for day labels, e.g. `19-Oct`
pub const DATE_LABEL_FORMAT: &str = "%d-%b";

/// One day of synthetic fitness metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessRecord {
    /// Calendar day this record describes
    pub date: NaiveDate,
    /// Steps walked
    pub steps: u32,
    /// Calories burned (kcal)
    pub calories_burned: u32,
    /// Calories consumed (kcal)
    pub calories_consumed: u32,
    /// Water intake (ml)
    pub water_intake_ml: u32,
    /// Hours slept, one decimal
    pub sleep_hours: f64,
    /// Body mass index, two decimals
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day), two decimals
    pub bmr: f64,
    /// Goal progress percentage, one decimal
    pub progress_pct: f64,
    /// Consumed minus burned; `None` until derived metrics have been applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_balance: Option<i64>,
}

impl FitnessRecord {
    /// Day label used on chart axes and in console tables
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format(DATE_LABEL_FORMAT).to_string()
    }

    /// Consumed minus burned calories, computed from the source columns
    #[must_use]
    pub fn net_calories(&self) -> i64 {
        i64::from(self.calories_consumed) - i64::from(self.calories_burned)
    }
}

/// Numeric columns of the weekly table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericColumn {
    /// Steps walked
    Steps,
    /// Calories burned
    CaloriesBurned,
    /// Calories consumed
    CaloriesConsumed,
    /// Water intake in ml
    WaterIntakeMl,
    /// Hours of sleep
    SleepHours,
    /// Body mass index
    Bmi,
    /// Basal metabolic rate
    Bmr,
    /// Progress percentage
    ProgressPct,
    /// Derived calorie balance
    CalorieBalance,
}

impl NumericColumn {
    /// Every numeric column, derived ones last
    pub const ALL: [Self; 9] = [
        Self::Steps,
        Self::CaloriesBurned,
        Self::CaloriesConsumed,
        Self::WaterIntakeMl,
        Self::SleepHours,
        Self::Bmi,
        Self::Bmr,
        Self::ProgressPct,
        Self::CalorieBalance,
    ];

    /// Column header as shown in tables and on the heatmap axes
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::CaloriesBurned => "Calories_Burned",
            Self::CaloriesConsumed => "Calories_Consumed",
            Self::WaterIntakeMl => "Water_Intake(ml)",
            Self::SleepHours => "Sleep_Hours",
            Self::Bmi => "BMI",
            Self::Bmr => "BMR",
            Self::ProgressPct => "Progress(%)",
            Self::CalorieBalance => "Calorie_Balance",
        }
    }

    /// Whether values are whole numbers (printed without decimals)
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Steps
                | Self::CaloriesBurned
                | Self::CaloriesConsumed
                | Self::WaterIntakeMl
                | Self::CalorieBalance
        )
    }

    /// Read this column from a record; `None` for an underived calorie balance
    #[must_use]
    pub fn value(self, record: &FitnessRecord) -> Option<f64> {
        match self {
            Self::Steps => Some(f64::from(record.steps)),
            Self::CaloriesBurned => Some(f64::from(record.calories_burned)),
            Self::CaloriesConsumed => Some(f64::from(record.calories_consumed)),
            Self::WaterIntakeMl => Some(f64::from(record.water_intake_ml)),
            Self::SleepHours => Some(record.sleep_hours),
            Self::Bmi => Some(record.bmi),
            Self::Bmr => Some(record.bmr),
            Self::ProgressPct => Some(record.progress_pct),
            Self::CalorieBalance => record.calorie_balance.map(|balance| balance as f64),
        }
    }
}

impl Display for NumericColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

/// Ordered table of daily records, oldest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FitnessTable {
    records: Vec<FitnessRecord>,
}

impl FitnessTable {
    /// Wrap records that are already in chronological order
    #[must_use]
    pub const fn new(records: Vec<FitnessRecord>) -> Self {
        Self { records }
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[FitnessRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [FitnessRecord] {
        &mut self.records
    }

    /// Number of days in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent day
    #[must_use]
    pub fn latest(&self) -> Option<&FitnessRecord> {
        self.records.last()
    }

    /// Axis labels, one per day
    #[must_use]
    pub fn date_labels(&self) -> Vec<String> {
        self.records.iter().map(FitnessRecord::date_label).collect()
    }

    /// True once every record carries a calorie balance
    #[must_use]
    pub fn has_calorie_balance(&self) -> bool {
        !self.records.is_empty()
            && self
                .records
                .iter()
                .all(|record| record.calorie_balance.is_some())
    }

    /// Numeric columns currently present in the table
    #[must_use]
    pub fn numeric_columns(&self) -> Vec<NumericColumn> {
        let derived = self.has_calorie_balance();
        NumericColumn::ALL
            .into_iter()
            .filter(|column| derived || *column != NumericColumn::CalorieBalance)
            .collect()
    }

    /// Values of one column in day order; `None` if the column is not present
    #[must_use]
    pub fn column(&self, column: NumericColumn) -> Option<Vec<f64>> {
        self.records
            .iter()
            .map(|record| column.value(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, burned: u32, consumed: u32) -> FitnessRecord {
        FitnessRecord {
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            steps: 8000,
            calories_burned: burned,
            calories_consumed: consumed,
            water_intake_ml: 2100,
            sleep_hours: 7.5,
            bmi: 22.5,
            bmr: 1600.0,
            progress_pct: 80.0,
            calorie_balance: None,
        }
    }

    #[test]
    fn test_date_label_format() {
        assert_eq!(record(3, 2000, 2500).date_label(), "03-Oct");
    }

    #[test]
    fn test_net_calories_can_be_negative() {
        assert_eq!(record(1, 2700, 2100).net_calories(), -600);
    }

    #[test]
    fn test_balance_column_absent_until_derived() {
        let mut table = FitnessTable::new(vec![record(1, 2000, 2500), record(2, 2100, 2000)]);
        assert!(!table.numeric_columns().contains(&NumericColumn::CalorieBalance));
        assert!(table.column(NumericColumn::CalorieBalance).is_none());

        for row in table.records_mut() {
            row.calorie_balance = Some(row.net_calories());
        }
        assert_eq!(table.numeric_columns().len(), NumericColumn::ALL.len());
        assert_eq!(
            table.column(NumericColumn::CalorieBalance),
            Some(vec![500.0, -100.0])
        );
    }
}
