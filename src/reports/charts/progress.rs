// ABOUTME: Chart 6, latest day's goal progress as an achieved/remaining pie
// ABOUTME: Slice geometry is computed separately from drawing so it can be checked directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::charts::{PIE_EXPLODE, PIE_START_ANGLE_DEG};
use crate::constants::units::PERCENT;
use crate::errors::{AppError, AppResult};
use crate::models::FitnessTable;
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, ACHIEVED_GREEN, INK, REMAINING_GREY};
use crate::reports::ChartKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

/// Share of the pie radius used, leaving room for outside labels
const RADIUS_FRACTION: f64 = 0.36;

/// Distance of slice labels from the centre, in radii
const LABEL_DISTANCE: f64 = 1.1;

/// Distance of percentage labels from the centre, in radii
const PERCENT_DISTANCE: f64 = 0.6;

/// Latest progress split into achieved and remaining percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressBreakdown {
    achieved: f64,
    remaining: f64,
}

impl ProgressBreakdown {
    /// Split `progress_pct` into itself and its complement to 100
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage is not within `[0, 100]`
    pub fn new(progress_pct: f64) -> AppResult<Self> {
        if !progress_pct.is_finite() || !(0.0..=PERCENT).contains(&progress_pct) {
            return Err(AppError::out_of_range(format!(
                "Progress must be within 0-100%, got {progress_pct}"
            )));
        }
        Ok(Self {
            achieved: progress_pct,
            remaining: PERCENT - progress_pct,
        })
    }

    /// Breakdown for the most recent day of `table`
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or the progress is out of range
    pub fn from_table(table: &FitnessTable) -> AppResult<Self> {
        let latest = table
            .latest()
            .ok_or_else(|| AppError::invalid_input("Cannot chart progress of an empty table"))?;
        Self::new(latest.progress_pct)
    }

    /// Achieved percentage
    #[must_use]
    pub const fn achieved(&self) -> f64 {
        self.achieved
    }

    /// Remaining percentage
    #[must_use]
    pub const fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Sum of both slices
    #[must_use]
    pub fn total(&self) -> f64 {
        self.achieved + self.remaining
    }

    /// Achieved then remaining, laid out counter-clockwise from the start angle
    #[must_use]
    pub fn slices(&self) -> Vec<PieSlice> {
        layout_pie(
            &[
                (
                    format!("Achieved {:.1}%", self.achieved),
                    self.achieved,
                    ACHIEVED_GREEN,
                    PIE_EXPLODE,
                ),
                ("Remaining".to_owned(), self.remaining, REMAINING_GREY, 0.0),
            ],
            PIE_START_ANGLE_DEG,
        )
    }
}

/// One wedge of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Text placed outside the wedge
    pub label: String,
    /// Raw value
    pub value: f64,
    /// Share of the whole pie
    pub fraction: f64,
    /// Start angle, degrees counter-clockwise from 3 o'clock
    pub start_deg: f64,
    /// Angular size in degrees
    pub sweep_deg: f64,
    /// Outward offset as a fraction of the radius
    pub explode: f64,
    /// Fill color
    pub color: RGBColor,
}

impl PieSlice {
    /// Angle bisecting the wedge
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        self.sweep_deg.mul_add(0.5, self.start_deg)
    }

    /// Share printed inside the wedge, one decimal
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * PERCENT)
    }
}

/// Lay `(label, value, color, explode)` entries out counter-clockwise from `start_deg`
#[must_use]
pub fn layout_pie(entries: &[(String, f64, RGBColor, f64)], start_deg: f64) -> Vec<PieSlice> {
    let total: f64 = entries.iter().map(|(_, value, _, _)| value.max(0.0)).sum();
    let mut angle = start_deg;
    entries
        .iter()
        .map(|(label, value, color, explode)| {
            let fraction = if total > 0.0 { value.max(0.0) / total } else { 0.0 };
            let sweep_deg = fraction * 360.0;
            let slice = PieSlice {
                label: label.clone(),
                value: *value,
                fraction,
                start_deg: angle,
                sweep_deg,
                explode: *explode,
                color: *color,
            };
            angle += sweep_deg;
            slice
        })
        .collect()
}

/// Pixel point at `radius` along `angle_deg` from `center` (screen y grows downward)
fn polar(center: (f64, f64), radius: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (
        radius.mul_add(theta.cos(), center.0),
        radius.mul_add(-theta.sin(), center.1),
    )
}

fn to_pixel(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

/// Draw the progress pie
///
/// # Errors
///
/// Returns an error if the table is empty, progress is out of range, or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let breakdown = ProgressBreakdown::from_table(table)?;
    let body = area.titled(ChartKind::Progress.title(), style.title_font())?;
    let (width, height) = body.dim_in_pixel();
    let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) * RADIUS_FRACTION;

    let slices = breakdown.slices();
    for slice in &slices {
        if slice.sweep_deg <= 0.0 {
            continue;
        }
        let apex = polar(center, slice.explode * radius, slice.mid_deg());
        let steps = slice.sweep_deg.ceil().max(1.0) as usize;
        let mut outline = Vec::with_capacity(steps + 2);
        outline.push(to_pixel(apex));
        for step in 0..=steps {
            let angle = (slice.sweep_deg / steps as f64).mul_add(step as f64, slice.start_deg);
            outline.push(to_pixel(polar(apex, radius, angle)));
        }
        body.draw(&Polygon::new(outline, slice.color.filled()))?;
    }

    for slice in &slices {
        let apex = polar(center, slice.explode * radius, slice.mid_deg());
        let mid = slice.mid_deg();
        let h_pos = if mid.to_radians().cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        let outside = style
            .tick_font()
            .color(&INK)
            .pos(Pos::new(h_pos, VPos::Center));
        body.draw(&Text::new(
            slice.label.clone(),
            to_pixel(polar(apex, radius * LABEL_DISTANCE, mid)),
            outside,
        ))?;

        let inside = style
            .tick_font()
            .color(&INK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        body.draw(&Text::new(
            slice.percent_label(),
            to_pixel(polar(apex, radius * PERCENT_DISTANCE, mid)),
            inside,
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_sums_to_exactly_one_hundred() {
        for tenths in 600..=1000 {
            let progress = f64::from(tenths) / 10.0;
            let breakdown = ProgressBreakdown::new(progress).unwrap();
            assert_eq!(breakdown.total(), 100.0);
        }
    }

    #[test]
    fn test_breakdown_rejects_out_of_range() {
        assert!(ProgressBreakdown::new(100.5).is_err());
        assert!(ProgressBreakdown::new(-1.0).is_err());
        assert!(ProgressBreakdown::new(f64::NAN).is_err());
    }

    #[test]
    fn test_slices_start_at_twelve_and_run_counter_clockwise() {
        let slices = ProgressBreakdown::new(75.0).unwrap().slices();
        assert_eq!(slices.len(), 2);
        assert!((slices[0].start_deg - 90.0).abs() < 1e-9);
        assert!((slices[0].sweep_deg - 270.0).abs() < 1e-9);
        assert!((slices[1].start_deg - 360.0).abs() < 1e-9);
        assert!((slices[0].explode - PIE_EXPLODE).abs() < f64::EPSILON);
        assert!(slices[1].explode.abs() < f64::EPSILON);
    }

    #[test]
    fn test_slice_labels() {
        let slices = ProgressBreakdown::new(87.3).unwrap().slices();
        assert_eq!(slices[0].label, "Achieved 87.3%");
        assert_eq!(slices[1].label, "Remaining");
        assert_eq!(slices[0].percent_label(), "87.3%");
        assert_eq!(slices[1].percent_label(), "12.7%");
    }

    #[test]
    fn test_slices_follow_latest_day() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let table = crate::dataset::generate_week(42, 7, today).unwrap();
        let latest = table.latest().unwrap().progress_pct;

        let slices = ProgressBreakdown::from_table(&table).unwrap().slices();
        assert_eq!(slices[0].label, format!("Achieved {latest:.1}%"));
        assert!((slices[0].value - latest).abs() < f64::EPSILON);
        assert!((slices[0].fraction + slices[1].fraction - 1.0).abs() < 1e-12);
        assert!(ProgressBreakdown::from_table(&FitnessTable::default()).is_err());
    }

    #[test]
    fn test_polar_measures_angles_counter_clockwise() {
        let (x, y) = polar((100.0, 100.0), 10.0, 90.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 90.0).abs() < 1e-9);
    }
}
