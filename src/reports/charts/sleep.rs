// ABOUTME: Chart 4, nightly sleep as bars with the recommended eight hours marked
// ABOUTME: Bars are labelled with their hours, e.g. "7.4h"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    bars, column, day_chart, draw_day_mesh, draw_legend, draw_reference_line, one_decimal_ticks,
    value_labels, zero_based_range, DayAxis,
};
use crate::constants::charts::{SLEEP_LABEL_OFFSET, SLEEP_RECOMMENDED_HOURS};
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, ORANGE, REFERENCE_RED};
use crate::reports::ChartKind;

/// Draw the sleep bar chart
///
/// # Errors
///
/// Returns an error if the table is empty or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let sleep = column(table, NumericColumn::SleepHours)?;

    let mut ceiling = sleep.clone();
    ceiling.push(SLEEP_RECOMMENDED_HOURS);
    let y_range = zero_based_range(&ceiling, 0.15);

    let mut chart = day_chart(area, ChartKind::Sleep, &days, y_range, style)?;
    draw_day_mesh(&mut chart, &days, "Hours of Sleep", &one_decimal_ticks, style)?;
    chart.draw_series(bars(&sleep, |_| ORANGE))?;
    draw_reference_line(
        &mut chart,
        &days,
        SLEEP_RECOMMENDED_HOURS,
        REFERENCE_RED,
        Some("Recommended 8 hrs"),
        style,
    )?;
    chart.draw_series(value_labels(
        &sleep,
        SLEEP_LABEL_OFFSET,
        hours_label,
        style,
    ))?;
    draw_legend(&mut chart, style)
}

/// Hours printed above a bar, one decimal with an "h" suffix
#[must_use]
pub fn hours_label(hours: f64) -> String {
    format!("{hours:.1}h")
}
