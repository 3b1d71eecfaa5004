// ABOUTME: Typography, colors, and colormaps shared by every chart
// ABOUTME: Converts point sizes to pixels at the output DPI so all figures share one look
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::charts::{
    AXIS_LABEL_PT, DPI, LEGEND_PT, LINE_WIDTH_PT, MARKER_RADIUS_PT, TICK_LABEL_PT, TITLE_PT,
};
use crate::constants::units::POINTS_PER_INCH;
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};

/// Matplotlib `tab:blue`
pub const SERIES_BLUE: RGBColor = RGBColor(31, 119, 180);
/// Matplotlib `tab:orange`
pub const SERIES_ORANGE: RGBColor = RGBColor(255, 127, 14);
/// Water intake line
pub const DODGER_BLUE: RGBColor = RGBColor(30, 144, 255);
/// Sleep bars
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
/// Reference lines
pub const REFERENCE_RED: RGBColor = RGBColor(214, 39, 40);
/// BMI axis and series
pub const BMI_GREEN: RGBColor = RGBColor(0, 128, 0);
/// BMR axis and series
pub const BMR_PURPLE: RGBColor = RGBColor(128, 0, 128);
/// Achieved progress slice (`#4CAF50`)
pub const ACHIEVED_GREEN: RGBColor = RGBColor(0x4C, 0xAF, 0x50);
/// Remaining progress slice (`#D3D3D3`)
pub const REMAINING_GREY: RGBColor = RGBColor(0xD3, 0xD3, 0xD3);
/// Text and axis color
pub const INK: RGBColor = RGBColor(0, 0, 0);

/// Piecewise-linear colormap over `[0, 1]`
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    anchors: &'static [(f64, (u8, u8, u8))],
}

/// Perceptually uniform purple → yellow
pub const VIRIDIS: Colormap = Colormap {
    anchors: &[
        (0.0, (68, 1, 84)),
        (0.25, (59, 82, 139)),
        (0.5, (33, 145, 140)),
        (0.75, (94, 201, 98)),
        (1.0, (253, 231, 37)),
    ],
};

/// Diverging blue → grey → red
pub const COOLWARM: Colormap = Colormap {
    anchors: &[
        (0.0, (59, 76, 192)),
        (0.25, (141, 176, 254)),
        (0.5, (221, 221, 221)),
        (0.75, (244, 154, 123)),
        (1.0, (180, 4, 38)),
    ],
};

impl Colormap {
    /// Color at position `t`, clamped to `[0, 1]`
    #[must_use]
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let upper = self
            .anchors
            .iter()
            .position(|(stop, _)| *stop >= t)
            .unwrap_or(self.anchors.len() - 1);
        if upper == 0 {
            let (_, (r, g, b)) = self.anchors[0];
            return RGBColor(r, g, b);
        }
        let (lo_stop, lo) = self.anchors[upper - 1];
        let (hi_stop, hi) = self.anchors[upper];
        let span = hi_stop - lo_stop;
        let fraction = if span > 0.0 { (t - lo_stop) / span } else { 0.0 };
        RGBColor(
            lerp(lo.0, hi.0, fraction),
            lerp(lo.1, hi.1, fraction),
            lerp(lo.2, hi.2, fraction),
        )
    }

    /// `n` evenly spaced colors excluding both ends of the map
    #[must_use]
    pub fn palette(&self, n: usize) -> Vec<RGBColor> {
        (1..=n)
            .map(|i| self.sample(i as f64 / (n + 1) as f64))
            .collect()
    }
}

fn lerp(from: u8, to: u8, fraction: f64) -> u8 {
    let value = (f64::from(to) - f64::from(from)).mul_add(fraction, f64::from(from));
    value.round().clamp(0.0, 255.0) as u8
}

/// Text color that stays readable on `background`
#[must_use]
pub fn contrasting_ink(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance =
        0.0722_f64.mul_add(f64::from(b), 0.2126_f64.mul_add(f64::from(r), 0.7152 * f64::from(g)))
            / 255.0;
    if luminance > 0.408 {
        INK
    } else {
        RGBColor(255, 255, 255)
    }
}

/// Point-to-pixel conversion and fonts at a fixed resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    dpi: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::new(DPI)
    }
}

impl ChartStyle {
    /// Style for the given output resolution
    #[must_use]
    pub const fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Output resolution
    #[must_use]
    pub const fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Points to pixels
    #[must_use]
    pub fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }

    /// Points to whole pixels, at least one
    #[must_use]
    pub fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }

    /// Points to signed whole pixels
    #[must_use]
    pub fn px_i32(&self, points: f64) -> i32 {
        self.px(points).round() as i32
    }

    /// Chart titles
    #[must_use]
    pub fn title_font(&self) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(TITLE_PT), FontStyle::Bold)
    }

    /// Axis descriptions
    #[must_use]
    pub fn axis_font(&self) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(AXIS_LABEL_PT), FontStyle::Bold)
    }

    /// Tick labels and value annotations
    #[must_use]
    pub fn tick_font(&self) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(TICK_LABEL_PT), FontStyle::Normal)
    }

    /// Tick labels in a given color
    #[must_use]
    pub fn tick_text(&self, color: RGBColor) -> TextStyle<'static> {
        self.tick_font().color(&color)
    }

    /// Legend entries
    #[must_use]
    pub fn legend_font(&self) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(LEGEND_PT), FontStyle::Normal)
    }

    /// Width of plotted lines
    #[must_use]
    pub fn line_width(&self) -> u32 {
        self.px_u32(LINE_WIDTH_PT)
    }

    /// Radius of series markers
    #[must_use]
    pub fn marker_radius(&self) -> i32 {
        self.px_i32(MARKER_RADIUS_PT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_dpi() {
        let style = ChartStyle::new(300);
        assert!((style.px(18.0) - 75.0).abs() < 1e-9);
        assert_eq!(ChartStyle::new(72).px_u32(10.0), 10);
    }

    #[test]
    fn test_colormap_endpoints_and_midpoint() {
        assert_eq!(COOLWARM.sample(0.0), RGBColor(59, 76, 192));
        assert_eq!(COOLWARM.sample(0.5), RGBColor(221, 221, 221));
        assert_eq!(COOLWARM.sample(1.0), RGBColor(180, 4, 38));
        assert_eq!(COOLWARM.sample(7.0), COOLWARM.sample(1.0));
    }

    #[test]
    fn test_palette_excludes_extremes() {
        let palette = VIRIDIS.palette(3);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[1], VIRIDIS.sample(0.5));
        assert_ne!(palette[0], VIRIDIS.sample(0.0));
    }

    #[test]
    fn test_contrasting_ink() {
        assert_eq!(contrasting_ink(RGBColor(250, 250, 250)), INK);
        assert_eq!(contrasting_ink(RGBColor(59, 76, 192)), RGBColor(255, 255, 255));
    }
}
