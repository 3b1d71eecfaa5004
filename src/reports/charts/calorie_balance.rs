// ABOUTME: Chart 8, daily calorie balance as diverging bars around a zero line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    bars, column, day_chart, draw_day_mesh, draw_reference_line, integer_ticks,
    zero_based_range, DayAxis,
};
use crate::constants::charts::CALORIE_BALANCE_NEUTRAL;
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, COOLWARM, INK};
use crate::reports::ChartKind;

/// Draw the calorie balance bar chart
///
/// # Errors
///
/// Returns an error if calorie balance has not been derived or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let balance = column(table, NumericColumn::CalorieBalance)?;
    let palette = COOLWARM.palette(days.len());

    let y_range = zero_based_range(&balance, 0.1);
    let mut chart = day_chart(area, ChartKind::CalorieBalance, &days, y_range, style)?;
    draw_day_mesh(&mut chart, &days, "Calorie Balance (kcal)", &integer_ticks, style)?;
    chart.draw_series(bars(&balance, |i| palette[i]))?;
    draw_reference_line(&mut chart, &days, CALORIE_BALANCE_NEUTRAL, INK, None, style)
}
