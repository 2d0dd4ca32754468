//! Boolean raster storage with row-major pixel coordinates
//!
//! All rasters are stored as `(row, col)` arrays. The `(x, y)` convention of
//! image files only appears at the boundary through [`Coordinate::from_xy`],
//! [`Coordinate::x`] and [`Coordinate::y`].

use std::fmt;

use ndarray::{Array2, ArrayView2};
use num_traits::ToPrimitive;

use crate::io::error::{Result, invalid_input};
use crate::math::geometry::euclidean_distance;

/// A pixel position in row-major order
///
/// Ordering is row first, then column, so ordered collections of coordinates
/// iterate in the same order as the underlying storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index (the image `y`)
    pub row: usize,
    /// Column index (the image `x`)
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a coordinate from image-space `(x, y)`
    pub const fn from_xy(x: usize, y: usize) -> Self {
        Self { row: y, col: x }
    }

    /// Image-space horizontal position
    pub const fn x(self) -> usize {
        self.col
    }

    /// Image-space vertical position
    pub const fn y(self) -> usize {
        self.row
    }

    /// Move by a signed offset, returning `None` on underflow
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Straight-line distance to another coordinate
    pub fn distance_to(self, other: Self) -> f64 {
        euclidean_distance([self.row, self.col], [other.row, other.col])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", self.col, self.row)
    }
}

/// Binary raster with non-zero dimensions
///
/// `true` is foreground (road), `false` is background. Dimensions are fixed
/// once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Array2<bool>,
}

impl Raster {
    /// Wrap a boolean array as a raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn new(pixels: Array2<bool>) -> Result<Self> {
        let (height, width) = pixels.dim();
        if height == 0 || width == 0 {
            return Err(invalid_input(&format!(
                "raster must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self { pixels })
    }

    /// Create an all-background raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn background(height: usize, width: usize) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), false))
    }

    /// Create a raster with the given coordinates set to foreground
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero or a coordinate
    /// lies outside the raster
    pub fn from_coordinates<I>(height: usize, width: usize, coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut raster = Self::background(height, width)?;
        for coordinate in coordinates {
            if !raster.set(coordinate, true) {
                return Err(invalid_input(&format!(
                    "{coordinate} lies outside the {width}x{height} raster"
                )));
            }
        }
        Ok(raster)
    }

    /// Threshold a single-channel grid into a raster
    ///
    /// Values strictly greater than `threshold` become foreground. Values that
    /// cannot be represented as `f64` are treated as background.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the grid is empty
    pub fn from_grayscale<T>(grid: &ArrayView2<'_, T>, threshold: f64) -> Result<Self>
    where
        T: ToPrimitive,
    {
        Self::new(grid.map(|value| value.to_f64().is_some_and(|v| v > threshold)))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Check whether a coordinate lies inside the raster
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height() && coordinate.col < self.width()
    }

    /// Read a pixel; out-of-range coordinates read as background
    pub fn get(&self, coordinate: Coordinate) -> bool {
        self.pixels
            .get([coordinate.row, coordinate.col])
            .copied()
            .unwrap_or(false)
    }

    /// Write a pixel, returning whether the coordinate was in range
    ///
    /// Out-of-range writes are skipped.
    pub fn set(&mut self, coordinate: Coordinate, value: bool) -> bool {
        self.pixels
            .get_mut([coordinate.row, coordinate.col])
            .map(|pixel| *pixel = value)
            .is_some()
    }

    /// Count foreground pixels
    pub fn count_foreground(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }

    /// Iterate over foreground coordinates in row-major order
    pub fn foreground(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pixels
            .indexed_iter()
            .filter(|&(_, &pixel)| pixel)
            .map(|((row, col), _)| Coordinate::new(row, col))
    }

    /// Borrow the underlying array
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Consume the raster and return the underlying array
    pub fn into_pixels(self) -> Array2<bool> {
        self.pixels
    }

    /// Render as an 8-bit grid with foreground at 255
    pub fn to_luma(&self) -> Array2<u8> {
        self.pixels.map(|&pixel| if pixel { 255 } else { 0 })
    }
}
