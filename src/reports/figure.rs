// ABOUTME: In-memory RGB canvas that charts draw into and that is saved as a PNG
// ABOUTME: Saving consumes the figure, so each canvas is released once its file is written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::METERS_PER_INCH;
use crate::errors::{AppError, AppResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Drawing surface handed to chart painters
pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const BYTES_PER_PIXEL: usize = 3;

/// A single chart image being composed
#[derive(Debug)]
pub struct Figure {
    width: u32,
    height: u32,
    dpi: u32,
    pixels: Vec<u8>,
}

impl Figure {
    /// Blank canvas of `width` × `height` pixels at `dpi`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32, dpi: u32) -> AppResult<Self> {
        if width == 0 || height == 0 || dpi == 0 {
            return Err(AppError::invalid_input(format!(
                "Figure needs non-zero size and resolution, got {width}x{height} at {dpi} dpi"
            )));
        }
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Ok(Self {
            width,
            height,
            dpi,
            pixels: vec![u8::MAX; len],
        })
    }

    /// Canvas sized in inches
    ///
    /// # Errors
    ///
    /// Returns an error if the size rounds to zero pixels
    pub fn from_inches(size_in: (f64, f64), dpi: u32) -> AppResult<Self> {
        let to_px = |inches: f64| (inches * f64::from(dpi)).round().max(0.0) as u32;
        Self::new(to_px(size_in.0), to_px(size_in.1), dpi)
    }

    /// Pixel dimensions
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resolution written into the saved image
    #[must_use]
    pub const fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Raw RGB pixels, row-major
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the canvas to white and run `paint` on it
    ///
    /// # Errors
    ///
    /// Returns whatever `paint` returns, or a render error from the backend
    pub fn draw<F>(&mut self, paint: F) -> AppResult<()>
    where
        F: FnOnce(&Canvas<'_>) -> AppResult<()>,
    {
        let root =
            BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;
        paint(&root)?;
        root.present()?;
        Ok(())
    }

    /// Encode the canvas as an 8-bit RGB PNG carrying its physical resolution
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects the image
    pub fn encode_png(&self) -> AppResult<Vec<u8>> {
        let pixels_per_meter = (f64::from(self.dpi) / METERS_PER_INCH).round() as u32;
        let mut bytes = Vec::with_capacity(self.pixels.len() / 4);
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: pixels_per_meter,
                yppu: pixels_per_meter,
                unit: png::Unit::Meter,
            }));
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(bytes)
    }

    /// Write the PNG to `path`, replacing any existing file, and release the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written
    pub fn save(self, path: &Path) -> AppResult<()> {
        let bytes = self.encode_png()?;
        fs::write(path, &bytes).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })?;
        debug!(
            path = %path.display(),
            width = self.width,
            height = self.height,
            bytes = bytes.len(),
            "Figure saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(Figure::new(0, 10, 300).is_err());
        assert!(Figure::from_inches((0.0, 1.0), 300).is_err());
    }

    #[test]
    fn test_inches_convert_at_dpi() {
        let figure = Figure::from_inches((10.0, 6.0), 300).unwrap();
        assert_eq!(figure.dimensions(), (3000, 1800));
        assert_eq!(figure.pixels().len(), 3000 * 1800 * 3);
    }

    #[test]
    fn test_draw_paints_shapes_onto_white_canvas() {
        let mut figure = Figure::new(40, 20, 72).unwrap();
        figure
            .draw(|area| {
                area.draw(&Rectangle::new([(0, 0), (9, 9)], RED.filled()))?;
                Ok(())
            })
            .unwrap();
        assert_eq!(&figure.pixels()[..3], &[255, 0, 0]);
        let last = figure.pixels().len() - 3;
        assert_eq!(&figure.pixels()[last..], &[255, 255, 255]);
    }

    #[test]
    fn test_png_header_carries_resolution() {
        let figure = Figure::new(8, 4, 300).unwrap();
        let bytes = figure.encode_png().unwrap();
        let decoder = png::Decoder::new(bytes.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (8, 4));
        let dims = info.pixel_dims.unwrap();
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.unit, png::Unit::Meter);
    }
}
