// ABOUTME: Chart 5, BMI and BMR trends on independent left and right axes
// ABOUTME: Each axis is colored to match its series so the two scales are not confused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{column, padded_range, DayAxis};
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, BMI_GREEN, BMR_PURPLE, INK};
use crate::reports::ChartKind;
use plotters::prelude::*;
use plotters::style::TRANSPARENT;

/// Draw the dual-axis BMI/BMR chart
///
/// # Errors
///
/// Returns an error if the table is empty or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let bmi = column(table, NumericColumn::Bmi)?;
    let bmr = column(table, NumericColumn::Bmr)?;

    let mut chart = ChartBuilder::on(area)
        .caption(ChartKind::BmiBmr.title(), style.title_font())
        .margin(style.px_u32(12.0))
        .x_label_area_size(style.px_u32(40.0))
        .y_label_area_size(style.px_u32(56.0))
        .right_y_label_area_size(style.px_u32(72.0))
        .build_cartesian_2d(days.range(), padded_range(&bmi, &[], 0.1))?
        .set_secondary_coord(days.range(), padded_range(&bmr, &[], 0.1));

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(INK.mix(0.15).stroke_width(1))
        .light_line_style(TRANSPARENT.stroke_width(1))
        .x_labels(days.len())
        .x_label_formatter(&|x| days.label(*x))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .x_desc("Date")
        .y_desc("BMI")
        .axis_desc_style(style.axis_font())
        .x_label_style(style.tick_font())
        .y_label_style(style.tick_text(BMI_GREEN))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("BMR (kcal/day)")
        .y_label_formatter(&|v| format!("{v:.0}"))
        .axis_desc_style(style.axis_font())
        .label_style(style.tick_text(BMR_PURPLE))
        .draw()?;

    let line_width = style.line_width();
    let radius = style.marker_radius();

    let bmi_points: Vec<(f64, f64)> = bmi
        .iter()
        .enumerate()
        .map(|(i, value)| (DayAxis::position(i), *value))
        .collect();
    chart.draw_series(LineSeries::new(
        bmi_points.iter().copied(),
        BMI_GREEN.stroke_width(line_width),
    ))?;
    chart.draw_series(
        bmi_points
            .iter()
            .map(|point| Circle::new(*point, radius, BMI_GREEN.filled())),
    )?;

    let bmr_points: Vec<(f64, f64)> = bmr
        .iter()
        .enumerate()
        .map(|(i, value)| (DayAxis::position(i), *value))
        .collect();
    chart.draw_secondary_series(LineSeries::new(
        bmr_points.iter().copied(),
        BMR_PURPLE.stroke_width(line_width),
    ))?;
    chart.draw_secondary_series(bmr_points.iter().map(|point| {
        EmptyElement::at(*point)
            + Rectangle::new([(-radius, -radius), (radius, radius)], BMR_PURPLE.filled())
    }))?;
    Ok(())
}
