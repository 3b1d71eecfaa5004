// ABOUTME: Chart painters for the weekly report plus the day-axis helpers they share
// ABOUTME: Each painter draws one chart onto a canvas and reads the table without mutating it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Chart 5, BMI and BMR on twin axes
pub mod body_composition;
/// Chart 8, daily surplus or deficit
pub mod calorie_balance;
/// Chart 2, calories burned against consumed
pub mod calories;
/// Chart 7, correlation heatmap across every metric
pub mod correlation;
/// Chart 6, latest progress as a pie
pub mod progress;
/// Chart 4, sleep bars with the recommended level
pub mod sleep;
/// Chart 1, steps bars
pub mod steps;
/// Chart 3, water intake against the recommended minimum
pub mod water;

use super::figure::Canvas;
use super::style::{ChartStyle, INK};
use super::ChartKind;
use crate::errors::{AppError, AppResult};
use crate::models::{FitnessTable, NumericColumn};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::TRANSPARENT;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

/// Fraction of each day slot covered by a bar
const BAR_WIDTH: f64 = 0.8;

/// Dashes drawn across the full width of a reference line
const DASHES_PER_LINE: usize = 40;

/// Length of the legend sample line, in points
const LEGEND_SAMPLE_PT: f64 = 14.0;

/// Width reserved for the legend sample before the label text, in points
const LEGEND_AREA_PT: f64 = 20.0;

/// Chart whose x axis is the day index and y axis is a real value
pub type DayChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Paint `kind` onto `area`
///
/// # Errors
///
/// Returns an error if a required column is missing or the backend fails
pub fn draw(
    kind: ChartKind,
    area: &Canvas<'_>,
    table: &FitnessTable,
    style: &ChartStyle,
) -> AppResult<()> {
    match kind {
        ChartKind::Steps => steps::draw(area, table, style),
        ChartKind::Calories => calories::draw(area, table, style),
        ChartKind::WaterIntake => water::draw(area, table, style),
        ChartKind::Sleep => sleep::draw(area, table, style),
        ChartKind::BmiBmr => body_composition::draw(area, table, style),
        ChartKind::Progress => progress::draw(area, table, style),
        ChartKind::Correlation => correlation::draw(area, table, style),
        ChartKind::CalorieBalance => calorie_balance::draw(area, table, style),
    }
}

/// Categorical x axis with one slot per day, centred on integer positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAxis {
    labels: Vec<String>,
}

impl DayAxis {
    /// Axis for every day in `table`
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty
    pub fn new(table: &FitnessTable) -> AppResult<Self> {
        if table.is_empty() {
            return Err(AppError::invalid_input("Cannot chart an empty table"));
        }
        Ok(Self {
            labels: table.date_labels(),
        })
    }

    /// Number of days
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; an axis is never built over an empty table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Coordinate range with half a slot of padding either side
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        -0.5..(self.labels.len() as f64 - 0.5)
    }

    /// Centre of the slot for day `index`
    #[must_use]
    pub fn position(index: usize) -> f64 {
        index as f64
    }

    /// Label for a tick at `x`; blank unless `x` is a slot centre
    #[must_use]
    pub fn label(&self, x: f64) -> String {
        let nearest = x.round();
        if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }
        self.labels
            .get(nearest as usize)
            .cloned()
            .unwrap_or_default()
    }
}

/// Values of `column`, or an error naming the missing column
///
/// # Errors
///
/// Returns an error if the column has not been populated
pub fn column(table: &FitnessTable, column: NumericColumn) -> AppResult<Vec<f64>> {
    table.column(column).ok_or_else(|| {
        AppError::invalid_input(format!("Column {column} is not available for charting"))
    })
}

/// Value range that always contains zero, widened by `headroom` of the span
#[must_use]
pub fn zero_based_range(values: &[f64], headroom: f64) -> Range<f64> {
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    let span = if hi - lo > 0.0 { hi - lo } else { 1.0 };
    let bottom = if lo < 0.0 { span.mul_add(-headroom, lo) } else { 0.0 };
    let top = if hi > 0.0 { span.mul_add(headroom, hi) } else { 0.0 };
    bottom..top
}

/// Value range around `values` and any `extra` reference levels
#[must_use]
pub fn padded_range(values: &[f64], extra: &[f64], headroom: f64) -> Range<f64> {
    let all = values.iter().chain(extra).copied();
    let lo = all.clone().fold(f64::INFINITY, f64::min);
    let hi = all.fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = if hi - lo > 0.0 { hi - lo } else { lo.abs().max(1.0) };
    span.mul_add(-headroom, lo)..span.mul_add(headroom, hi)
}

/// Build a titled chart over the day axis
///
/// # Errors
///
/// Returns an error if the backend fails
pub fn day_chart<'a, 'b>(
    area: &'a Canvas<'b>,
    kind: ChartKind,
    days: &DayAxis,
    y_range: Range<f64>,
    style: &ChartStyle,
) -> AppResult<DayChart<'a, 'b>> {
    let chart = ChartBuilder::on(area)
        .caption(kind.title(), style.title_font())
        .margin(style.px_u32(12.0))
        .x_label_area_size(style.px_u32(40.0))
        .y_label_area_size(style.px_u32(64.0))
        .build_cartesian_2d(days.range(), y_range)?;
    Ok(chart)
}

/// Axes, grid, and day labels
///
/// # Errors
///
/// Returns an error if the backend fails
pub fn draw_day_mesh(
    chart: &mut DayChart<'_, '_>,
    days: &DayAxis,
    y_desc: &str,
    y_format: &dyn Fn(&f64) -> String,
    style: &ChartStyle,
) -> AppResult<()> {
    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(INK.mix(0.15).stroke_width(1))
        .light_line_style(TRANSPARENT.stroke_width(1))
        .x_labels(days.len())
        .x_label_formatter(&|x| days.label(*x))
        .y_label_formatter(y_format)
        .x_desc("Date")
        .y_desc(y_desc)
        .axis_desc_style(style.axis_font())
        .label_style(style.tick_font())
        .draw()?;
    Ok(())
}

/// Legend box in the upper right corner
///
/// # Errors
///
/// Returns an error if the backend fails
pub fn draw_legend<'a, 'b: 'a>(
    chart: &mut DayChart<'a, 'b>,
    style: &ChartStyle,
) -> AppResult<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .margin(style.px_u32(8.0))
        .legend_area_size(style.px_u32(LEGEND_AREA_PT))
        .background_style(WHITE.mix(0.85).filled())
        .border_style(INK.mix(0.3).stroke_width(1))
        .label_font(style.legend_font())
        .draw()?;
    Ok(())
}

/// One bar per day, from zero to the value
pub fn bars<F>(values: &[f64], color_of: F) -> Vec<Rectangle<(f64, f64)>>
where
    F: Fn(usize) -> RGBColor,
{
    let half = BAR_WIDTH / 2.0;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = DayAxis::position(i);
            Rectangle::new([(x - half, 0.0), (x + half, *value)], color_of(i).filled())
        })
        .collect()
}

/// Label text and anchor for each value, `offset` data units above it
pub fn label_anchors<F>(values: &[f64], offset: f64, format: F) -> Vec<(String, (f64, f64))>
where
    F: Fn(f64) -> String,
{
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (format(*value), (DayAxis::position(i), value + offset)))
        .collect()
}

/// Text centred above each value, `offset` data units higher
pub fn value_labels<F>(
    values: &[f64],
    offset: f64,
    format: F,
    style: &ChartStyle,
) -> Vec<Text<'static, (f64, f64), String>>
where
    F: Fn(f64) -> String,
{
    let text_style =
        TextStyle::from(style.tick_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    label_anchors(values, offset, format)
        .into_iter()
        .map(|(text, anchor)| Text::new(text, anchor, text_style.clone()))
        .collect()
}

/// Legend sample line from the glyph origin, kept inside the legend area
fn legend_sample(style: &ChartStyle) -> impl Fn((i32, i32)) -> Vec<(i32, i32)> {
    let length = style.px_i32(LEGEND_SAMPLE_PT);
    move |(x, y)| vec![(x, y), (x + length, y)]
}

/// Line segments making up a dashed horizontal line at `y`
#[must_use]
pub fn dashed_hline(x_range: &Range<f64>, y: f64) -> Vec<Vec<(f64, f64)>> {
    let step = (x_range.end - x_range.start) / DASHES_PER_LINE as f64;
    (0..DASHES_PER_LINE)
        .map(|i| {
            let start = step.mul_add(i as f64, x_range.start);
            vec![(start, y), (step.mul_add(0.6, start), y)]
        })
        .collect()
}

/// Draw a dashed horizontal reference line, with a legend entry when `label` is given
///
/// # Errors
///
/// Returns an error if the backend fails
pub fn draw_reference_line(
    chart: &mut DayChart<'_, '_>,
    days: &DayAxis,
    y: f64,
    color: RGBColor,
    label: Option<&str>,
    style: &ChartStyle,
) -> AppResult<()> {
    let line_style = color.stroke_width(style.line_width());
    let series = chart.draw_series(
        dashed_hline(&days.range(), y)
            .into_iter()
            .map(|points| PathElement::new(points, line_style)),
    )?;
    if let Some(label) = label {
        let sample = legend_sample(style);
        series
            .label(label)
            .legend(move |origin| PathElement::new(sample(origin), line_style));
    }
    Ok(())
}

/// Line with circle markers, with a legend entry when `label` is given
///
/// # Errors
///
/// Returns an error if the backend fails
pub fn draw_marked_line(
    chart: &mut DayChart<'_, '_>,
    values: &[f64],
    color: RGBColor,
    label: Option<&str>,
    style: &ChartStyle,
) -> AppResult<()> {
    let line_style = color.stroke_width(style.line_width());
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, value)| (DayAxis::position(i), *value))
        .collect();
    let series = chart.draw_series(LineSeries::new(points.iter().copied(), line_style))?;
    if let Some(label) = label {
        let sample = legend_sample(style);
        series
            .label(label)
            .legend(move |origin| PathElement::new(sample(origin), line_style));
    }
    let radius = style.marker_radius();
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, radius, color.filled())),
    )?;
    Ok(())
}

/// Whole-number tick labels
#[must_use]
pub fn integer_ticks(value: &f64) -> String {
    format!("{value:.0}")
}

/// One-decimal tick labels
#[must_use]
pub fn one_decimal_ticks(value: &f64) -> String {
    format!("{value:.1}")
}
