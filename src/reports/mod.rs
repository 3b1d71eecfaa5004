// ABOUTME: Report renderer that draws, saves, and displays the eight weekly charts in order
// ABOUTME: Each chart gets its own figure, released as soon as its PNG has been written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Chart Reports
//!
//! [`ReportRenderer`] turns a derived [`FitnessTable`] into eight standalone PNG
//! files. Charts are independent read-only passes over the table, rendered
//! strictly in [`ChartKind::ALL`] order; the first failure aborts the run.

/// The eight chart painters and their shared day-axis helpers
pub mod charts;
/// Optional hand-off of saved charts to a system image viewer
pub mod display;
/// Pixel buffer lifecycle and 300 DPI PNG encoding
pub mod figure;
/// Fonts, colors, and colormaps sized for the output resolution
pub mod style;

pub use display::ChartViewer;
pub use figure::{Canvas, Figure};
pub use style::ChartStyle;

use crate::config::{DisplayMode, ReportConfig};
use crate::constants::charts::{files, HEATMAP_FIGURE_IN, LANDSCAPE_FIGURE_IN, SQUARE_FIGURE_IN};
use crate::errors::{AppError, AppResult};
use crate::models::FitnessTable;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// The charts in a weekly report, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Steps per day bars
    Steps,
    /// Calories burned vs consumed lines
    Calories,
    /// Water intake line with recommended minimum
    WaterIntake,
    /// Sleep bars with recommended hours
    Sleep,
    /// BMI and BMR on dual axes
    BmiBmr,
    /// Latest progress pie
    Progress,
    /// Correlation heatmap
    Correlation,
    /// Calorie balance bars
    CalorieBalance,
}

impl ChartKind {
    /// Every chart, in render order
    pub const ALL: [Self; 8] = [
        Self::Steps,
        Self::Calories,
        Self::WaterIntake,
        Self::Sleep,
        Self::BmiBmr,
        Self::Progress,
        Self::Correlation,
        Self::CalorieBalance,
    ];

    /// Output file name
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Steps => files::STEPS,
            Self::Calories => files::CALORIES,
            Self::WaterIntake => files::WATER,
            Self::Sleep => files::SLEEP,
            Self::BmiBmr => files::BMI_BMR,
            Self::Progress => files::PROGRESS,
            Self::Correlation => files::CORRELATION,
            Self::CalorieBalance => files::CALORIE_BALANCE,
        }
    }

    /// Title drawn above the chart
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Steps => "Steps Walked Per Day",
            Self::Calories => "Calories Burned vs Consumed",
            Self::WaterIntake => "Daily Water Intake",
            Self::Sleep => "Sleep Duration Pattern",
            Self::BmiBmr => "BMI vs BMR Comparison",
            Self::Progress => "Overall Fitness Progress",
            Self::Correlation => "Correlation Between Fitness Parameters",
            Self::CalorieBalance => "Daily Caloric Balance (Consumed - Burned)",
        }
    }

    /// Figure size in inches (width, height)
    #[must_use]
    pub const fn figure_inches(self) -> (f64, f64) {
        match self {
            Self::Progress => SQUARE_FIGURE_IN,
            Self::Correlation => HEATMAP_FIGURE_IN,
            _ => LANDSCAPE_FIGURE_IN,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A chart written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedChart {
    /// Which chart
    pub kind: ChartKind,
    /// Where it was saved
    pub path: PathBuf,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Renders, saves, and optionally displays report charts
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    output_dir: PathBuf,
    style: ChartStyle,
    viewer: ChartViewer,
}

impl ReportRenderer {
    /// Renderer writing into `output_dir` at the standard resolution
    pub fn new(output_dir: impl Into<PathBuf>, display: DisplayMode) -> Self {
        Self {
            output_dir: output_dir.into(),
            style: ChartStyle::default(),
            viewer: ChartViewer::new(display),
        }
    }

    /// Renderer configured from a report run
    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.output_dir.clone(), config.display)
    }

    /// Directory charts are written to
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a chart will be written to
    #[must_use]
    pub fn chart_path(&self, kind: ChartKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Render one chart, save it, and hand it to the viewer
    ///
    /// # Errors
    ///
    /// Returns an error if drawing, encoding, or writing the chart fails
    #[instrument(skip(self, table))]
    pub fn render_chart(&self, kind: ChartKind, table: &FitnessTable) -> AppResult<RenderedChart> {
        let started = Instant::now();
        let mut figure = Figure::from_inches(kind.figure_inches(), self.style.dpi())?;
        figure.draw(|area| charts::draw(kind, area, table, &self.style))?;
        let (width, height) = figure.dimensions();

        let path = self.chart_path(kind);
        figure.save(&path)?;
        info!(
            path = %path.display(),
            width,
            height,
            elapsed_ms = started.elapsed().as_millis(),
            "Chart saved"
        );
        self.viewer.show(&path);

        Ok(RenderedChart {
            kind,
            path,
            width,
            height,
        })
    }

    /// Render every chart in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns an error if calorie balance is missing, the output directory cannot be
    /// created, or any chart fails
    pub fn render_all(&self, table: &FitnessTable) -> AppResult<Vec<RenderedChart>> {
        if !table.has_calorie_balance() {
            return Err(AppError::invalid_input(
                "Derived metrics must be applied before rendering the report",
            ));
        }
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            AppError::storage(format!(
                "Cannot create output directory {}: {e}",
                self.output_dir.display()
            ))
            .with_source(e)
        })?;

        ChartKind::ALL
            .iter()
            .map(|kind| self.render_chart(*kind, table))
            .collect()
    }
}
