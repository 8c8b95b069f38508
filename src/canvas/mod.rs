//! Pixel canvas and its plain-text PPM encoding.
//!
//! The canvas is a fixed `width x height` grid of [`Color`]s, black when
//! created. `(0, 0)` is the top-left pixel.

use crate::color::Color;

/// Errors that can occur when creating or addressing a canvas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a black canvas.
    ///
    /// # Errors
    /// * `CanvasError::InvalidDimensions` - `width` or `height` is zero
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` addresses a pixel of this canvas.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), CanvasError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color, CanvasError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Packed RGB bytes, row-major, three per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb8()).collect()
    }

    /// Encode as a plain-text (`P3`) PPM image: a three-line header followed
    /// by one line per pixel row. Every line ends with a newline.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);
        for row in self.rows() {
            let line = row
                .iter()
                .flat_map(|c| c.to_rgb8())
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_initialization() {
        let canvas = Canvas::new(10, 20).unwrap();
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 20);
        assert_eq!(canvas.rows().count(), 20);
        assert!(canvas.rows().all(|row| row.len() == 10));
        assert!(canvas.rows().flatten().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        assert_eq!(
            Canvas::new(0, 5),
            Err(CanvasError::InvalidDimensions { width: 0, height: 5 })
        );
    }

    #[test]
    fn test_write_pixel() {
        let mut canvas = Canvas::new(10, 20).unwrap();
        canvas.write_pixel(5, 10, Color::RED).unwrap();
        canvas.write_pixel(9, 15, Color::new(0.0, 1.0, 0.0)).unwrap();

        assert_eq!(canvas.pixel_at(5, 10).unwrap(), Color::RED);
        assert_eq!(canvas.pixel_at(9, 15).unwrap(), Color::new(0.0, 1.0, 0.0));
        assert_eq!(canvas.pixel_at(5, 9).unwrap(), Color::BLACK);
        assert_eq!(canvas.pixel_at(0, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_write_pixel_out_of_bounds() {
        let mut canvas = Canvas::new(10, 20).unwrap();
        assert_eq!(
            canvas.write_pixel(10, 0, Color::RED),
            Err(CanvasError::OutOfBounds { x: 10, y: 0, width: 10, height: 20 })
        );
        assert!(canvas.pixel_at(0, 20).is_err());
        assert_eq!(
            canvas.pixel_at(10, 5),
            Err(CanvasError::OutOfBounds { x: 10, y: 5, width: 10, height: 20 })
        );
    }

    #[test]
    fn test_ppm_header() {
        let canvas = Canvas::new(5, 3).unwrap();
        assert!(canvas.to_ppm().starts_with("P3\n5 3\n255\n"));
    }

    #[test]
    fn test_ppm_pixel_data() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        canvas.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0)).unwrap();
        canvas.write_pixel(2, 1, Color::new(0.0, 0.5, 0.0)).unwrap();
        canvas.write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0)).unwrap();

        let expected = "P3\n5 3\n255\n\
            255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
            0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n";
        assert_eq!(canvas.to_ppm(), expected);
    }

    #[test]
    fn test_ppm_ends_with_newline() {
        let canvas = Canvas::new(1, 1).unwrap();
        assert!(canvas.to_ppm().ends_with('\n'));
        assert_eq!(canvas.to_rgb8(), vec![0, 0, 0]);
    }
}
