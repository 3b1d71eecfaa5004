// ABOUTME: Derived metric columns computed from generated source columns
// ABOUTME: Adds the daily calorie balance in place, once, before any chart reads it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::FitnessTable;

/// Set `calorie_balance = calories_consumed - calories_burned` on every record
///
/// Reapplying recomputes the same values.
pub fn apply_calorie_balance(table: &mut FitnessTable) {
    for record in table.records_mut() {
        record.calorie_balance = Some(record.net_calories());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_week;
    use chrono::NaiveDate;

    #[test]
    fn test_balance_matches_source_columns() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let mut table = generate_week(7, 7, today).unwrap();
        apply_calorie_balance(&mut table);

        for record in table.records() {
            let expected =
                i64::from(record.calories_consumed) - i64::from(record.calories_burned);
            assert_eq!(record.calorie_balance, Some(expected));
        }
    }

    #[test]
    fn test_reapplying_is_stable() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let mut table = generate_week(7, 7, today).unwrap();
        apply_calorie_balance(&mut table);
        let once = table.clone();
        apply_calorie_balance(&mut table);
        assert_eq!(once, table);
    }
}
