//! Writing canvases to disk.
//!
//! PPM output is the canvas's own text encoding; PNG goes through the `image`
//! crate.

use std::fs;
use std::path::Path;

use crate::canvas::Canvas;

/// Errors that can occur while exporting a canvas.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Canvas of {width}x{height} is too large to encode")]
    TooLarge { width: usize, height: usize },
}

/// Write `canvas` as a plain-text PPM file.
pub fn write_ppm(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    fs::write(path, canvas.to_ppm())?;
    tracing::debug!(path = %path.display(), "wrote PPM");
    Ok(())
}

/// Write `canvas` as an 8-bit RGB PNG file.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let too_large = || ExportError::TooLarge {
        width: canvas.width(),
        height: canvas.height(),
    };
    let width = u32::try_from(canvas.width()).map_err(|_| too_large())?;
    let height = u32::try_from(canvas.height()).map_err(|_| too_large())?;

    image::save_buffer(
        path,
        &canvas.to_rgb8(),
        width,
        height,
        image::ColorType::Rgb8,
    )?;
    tracing::debug!(path = %path.display(), width, height, "wrote PNG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_write_ppm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");

        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.write_pixel(1, 1, Color::WHITE).unwrap();
        write_ppm(&canvas, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n0 0 0 0 0 0\n0 0 0 255 255 255\n");
    }

    #[test]
    fn test_save_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.write_pixel(2, 0, Color::RED).unwrap();
        save_png(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(0, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.ppm");
        let canvas = Canvas::new(1, 1).unwrap();
        assert!(matches!(write_ppm(&canvas, &path), Err(ExportError::Io(_))));
    }
}
