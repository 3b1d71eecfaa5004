// ABOUTME: Chart 7, Pearson correlation heatmap over every numeric column
// ABOUTME: Cells are colored on a fixed [-1, 1] coolwarm scale and annotated to two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_wrap)] // Safe: pixel sizes and a nine-column grid fit in i32

use crate::constants::charts::TICK_LABEL_PT;
use crate::errors::AppResult;
use crate::intelligence::{CorrelationMatrix, StatisticalAnalyzer};
use crate::models::FitnessTable;
use crate::reports::figure::Canvas;
use crate::reports::style::{contrasting_ink, ChartStyle, COOLWARM, INK};
use crate::reports::ChartKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

/// Room for row labels, in points
const ROW_LABEL_PT: f64 = 110.0;
/// Room for rotated column labels, in points
const COLUMN_LABEL_PT: f64 = 110.0;
/// Room for the colorbar and its ticks, in points
const COLORBAR_AREA_PT: f64 = 60.0;
/// Colorbar width, in points
const COLORBAR_WIDTH_PT: f64 = 14.0;
/// Gap between the grid and the labels, in points
const LABEL_GAP_PT: f64 = 4.0;
/// Cell separator width, in points
const SEPARATOR_PT: f64 = 0.5;
/// Vertical resolution of the colorbar gradient
const COLORBAR_STEPS: i32 = 100;
/// Labelled colorbar values
const COLORBAR_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// Map a coefficient in `[-1, 1]` onto the colormap position
#[must_use]
pub fn scale_position(coefficient: f64) -> f64 {
    (coefficient.clamp(-1.0, 1.0) + 1.0) / 2.0
}

/// Coefficient printed inside a heatmap cell
#[must_use]
pub fn cell_label(coefficient: f64) -> String {
    format!("{coefficient:.2}")
}

/// Draw the correlation heatmap
///
/// # Errors
///
/// Returns an error if the matrix cannot be computed or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let matrix = StatisticalAnalyzer::correlation_matrix(table)?;
    let body = area.titled(ChartKind::Correlation.title(), style.title_font())?;
    draw_matrix(&body, &matrix, style)
}

fn draw_matrix(
    body: &Canvas<'_>,
    matrix: &CorrelationMatrix,
    style: &ChartStyle,
) -> AppResult<()> {
    let n = matrix.size();
    if n == 0 {
        return Ok(());
    }
    let (width, height) = body.dim_in_pixel();
    let left = style.px_i32(ROW_LABEL_PT);
    let bottom = style.px_i32(COLUMN_LABEL_PT);
    let right = style.px_i32(COLORBAR_AREA_PT);
    let gap = style.px_i32(LABEL_GAP_PT);

    let avail_w = (width as i32 - left - right).max(n as i32);
    let avail_h = (height as i32 - bottom - gap).max(n as i32);
    let cell = (avail_w.min(avail_h) / n as i32).max(1);
    let grid = cell * n as i32;
    let x0 = left + (avail_w - grid) / 2;
    let y0 = gap;

    let separator = WHITE.stroke_width(style.px_u32(SEPARATOR_PT));
    let cell_font = style.tick_font();

    for (row, values) in matrix.values.iter().enumerate() {
        for (col, coefficient) in values.iter().enumerate() {
            let cx = x0 + col as i32 * cell;
            let cy = y0 + row as i32 * cell;
            let fill = COOLWARM.sample(scale_position(*coefficient));
            body.draw(&Rectangle::new([(cx, cy), (cx + cell, cy + cell)], fill.filled()))?;
            body.draw(&Rectangle::new([(cx, cy), (cx + cell, cy + cell)], separator))?;
            body.draw(&Text::new(
                cell_label(*coefficient),
                (cx + cell / 2, cy + cell / 2),
                cell_font
                    .color(&contrasting_ink(fill))
                    .pos(Pos::new(HPos::Center, VPos::Center)),
            ))?;
        }
    }

    let row_style = style
        .tick_font()
        .color(&INK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let column_style = style
        .tick_font()
        .transform(FontTransform::Rotate90)
        .color(&INK);
    let font_px = style.px_i32(TICK_LABEL_PT);
    for (index, column) in matrix.columns.iter().enumerate() {
        let offset = index as i32 * cell + cell / 2;
        body.draw(&Text::new(
            column.display_name(),
            (x0 - gap, y0 + offset),
            row_style.clone(),
        ))?;
        body.draw(&Text::new(
            column.display_name(),
            (x0 + offset + font_px / 2, y0 + grid + gap),
            column_style.clone(),
        ))?;
    }

    draw_colorbar(body, (x0 + grid + gap * 2, y0), grid, style)
}

fn draw_colorbar(
    body: &Canvas<'_>,
    origin: (i32, i32),
    length: i32,
    style: &ChartStyle,
) -> AppResult<()> {
    let bar_width = style.px_i32(COLORBAR_WIDTH_PT);
    let (x, y) = origin;
    for step in 0..COLORBAR_STEPS {
        let top = y + length * step / COLORBAR_STEPS;
        let bottom = y + length * (step + 1) / COLORBAR_STEPS;
        // Top of the bar is +1
        let t = 1.0 - (f64::from(step) + 0.5) / f64::from(COLORBAR_STEPS);
        body.draw(&Rectangle::new(
            [(x, top), (x + bar_width, bottom)],
            COOLWARM.sample(t).filled(),
        ))?;
    }
    body.draw(&Rectangle::new(
        [(x, y), (x + bar_width, y + length)],
        INK.stroke_width(1),
    ))?;

    let tick_style = style
        .tick_font()
        .color(&INK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let gap = style.px_i32(LABEL_GAP_PT);
    for tick in COLORBAR_TICKS {
        let ty = y + ((1.0 - scale_position(tick)) * f64::from(length)).round() as i32;
        body.draw(&PathElement::new(
            vec![(x + bar_width, ty), (x + bar_width + gap, ty)],
            INK.stroke_width(1),
        ))?;
        body.draw(&Text::new(
            format!("{tick:.1}"),
            (x + bar_width + gap * 2, ty),
            tick_style.clone(),
        ))?;
    }
    Ok(())
}
