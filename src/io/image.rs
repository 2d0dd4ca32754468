//! Loading sketches and saving rasters as PNG images

use std::path::Path;

use image::{GrayImage, RgbImage};
use ndarray::Array2;

use crate::io::error::{CleanerError, Result, invalid_input};
use crate::spatial::{Coordinate, Raster};

/// Load an image as an 8-bit grayscale grid indexed `(row, col)`
///
/// Color images are converted to luma; any format the `image` crate can
/// decode is accepted.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has zero width or height
pub fn load_sketch(path: &Path) -> Result<Array2<u8>> {
    let gray = image::open(path)
        .map_err(|e| CleanerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_luma8();

    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_input(&format!(
            "image '{}' has no pixels",
            path.display()
        )));
    }

    log::debug!("Loaded {} ({width}x{height})", path.display());
    Ok(luma_to_array(&gray))
}

/// Convert a grayscale image buffer into a `(row, col)` grid
pub fn luma_to_array(gray: &GrayImage) -> Array2<u8> {
    let (width, height) = gray.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        gray.get_pixel_checked(col as u32, row as u32)
            .map_or(0, |pixel| pixel.0[0])
    })
}

/// Convert a raster into a grayscale image with foreground at 255
pub fn raster_to_luma(raster: &Raster) -> GrayImage {
    GrayImage::from_fn(raster.width() as u32, raster.height() as u32, |x, y| {
        let foreground = raster.get(Coordinate::from_xy(x as usize, y as usize));
        image::Luma([if foreground { 255 } else { 0 }])
    })
}

/// Save a raster as a black and white PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    raster_to_luma(raster)
        .save(path)
        .map_err(|e| CleanerError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save an RGB image as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|e| CleanerError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CleanerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}
