//! Side-by-side comparison images for inspecting a cleaning run

use image::{GenericImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use ndarray::ArrayView2;

use crate::analysis::topology::{NetworkPoints, classify};
use crate::io::configuration::{ENDPOINT_COLOR, INTERSECTION_COLOR, ROAD_COLOR};
use crate::io::error::{Result, invalid_input};
use crate::spatial::Raster;

/// Render the original sketch next to the cleaned raster
///
/// The left panel is the grayscale sketch. The right panel draws the cleaned
/// raster white on black, then marks its endpoints with red discs and its
/// intersections with green discs of `marker_radius`. The cleaned raster is
/// classified afresh, so markers describe the result rather than the input.
///
/// # Errors
///
/// Returns `InvalidInput` if the two inputs differ in size
pub fn compose_comparison(
    original: &ArrayView2<'_, u8>,
    cleaned: &Raster,
    marker_radius: u32,
) -> Result<RgbImage> {
    if original.dim() != cleaned.dimensions() {
        let (orig_h, orig_w) = original.dim();
        return Err(invalid_input(&format!(
            "original is {orig_w}x{orig_h} but cleaned raster is {}x{}",
            cleaned.width(),
            cleaned.height()
        )));
    }

    let (height, width) = cleaned.dimensions();
    let mut canvas = RgbImage::new((width * 2) as u32, height as u32);

    for ((row, col), &value) in original.indexed_iter() {
        canvas.put_pixel(col as u32, row as u32, Rgb([value, value, value]));
    }

    for coordinate in cleaned.foreground() {
        canvas.put_pixel(
            (coordinate.col + width) as u32,
            coordinate.row as u32,
            Rgb(ROAD_COLOR),
        );
    }

    let points = classify(cleaned);
    draw_markers(&mut canvas, &points, width as u32, marker_radius);

    Ok(canvas)
}

// Markers are drawn through a view of the right panel, so discs near its
// left edge are clipped at the seam instead of bleeding into the sketch.
fn draw_markers(canvas: &mut RgbImage, points: &NetworkPoints, panel_offset: u32, radius: u32) {
    let (canvas_width, canvas_height) = canvas.dimensions();
    let mut panel = canvas.sub_image(
        panel_offset,
        0,
        canvas_width.saturating_sub(panel_offset),
        canvas_height,
    );

    let markers = points
        .endpoints
        .iter()
        .map(|&center| (center, ENDPOINT_COLOR))
        .chain(
            points
                .intersections
                .iter()
                .map(|&center| (center, INTERSECTION_COLOR)),
        );

    for (center, color) in markers {
        draw_filled_circle_mut(
            &mut *panel,
            (center.col as i32, center.row as i32),
            radius as i32,
            Rgb(color),
        );
    }
}
