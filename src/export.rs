//! Scalar field export for debugging and tuning
//!
//! Renders the intermediate generation fields (noise map, falloff map,
//! combined map) as grayscale images so parameter changes can be inspected
//! visually.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::tilemap::Tilemap;

/// Render a scalar field as grayscale, normalized over the field's own
/// value range (a constant field renders black).
pub fn render_scalar_map(map: &Tilemap<f32>) -> RgbImage {
    let mut min_v = f32::MAX;
    let mut max_v = f32::MIN;
    for (_, _, &v) in map.iter() {
        if v < min_v {
            min_v = v;
        }
        if v > max_v {
            max_v = v;
        }
    }
    let range = (max_v - min_v).max(f32::EPSILON);

    let mut img: RgbImage = ImageBuffer::new(map.width as u32, map.height as u32);
    for (x, y, &v) in map.iter() {
        let t = ((v - min_v) / range).clamp(0.0, 1.0);
        let gray = (t * 255.0) as u8;
        img.put_pixel(x as u32, y as u32, Rgb([gray, gray, gray]));
    }

    img
}

/// Render and save a scalar field as a grayscale PNG.
pub fn export_scalar_map(map: &Tilemap<f32>, path: &str) -> Result<(), image::ImageError> {
    render_scalar_map(map).save(path)
}
