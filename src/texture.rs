//! Two-color classification texture
//!
//! One pixel per cell: water cells paint blue, land cells green. Pixel
//! `(x, y)` corresponds to cell `(x, y)`, so the image follows the grid's
//! row-major iteration order exactly and consumers that index the texture by
//! cell coordinate see no mirroring or rotation.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::grid::Cell;
use crate::tilemap::Tilemap;

pub const WATER_COLOR: [u8; 3] = [0, 0, 255];
pub const LAND_COLOR: [u8; 3] = [0, 255, 0];

/// Render the classified grid as a one-pixel-per-cell image.
pub fn render_classification(grid: &Tilemap<Cell>) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32, grid.height as u32);

    for (x, y, cell) in grid.iter() {
        let color = if cell.is_water {
            WATER_COLOR
        } else {
            LAND_COLOR
        };
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }

    img
}

/// Render and save the classification texture as a PNG.
pub fn export_classification(grid: &Tilemap<Cell>, path: &str) -> Result<(), image::ImageError> {
    render_classification(grid).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_follow_cell_coordinates() {
        let mut grid = Tilemap::new_with(2, 2, Cell { is_water: false });
        grid.set(1, 0, Cell { is_water: true });

        let img = render_classification(&grid);

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0).0, WATER_COLOR);
        assert_eq!(img.get_pixel(0, 0).0, LAND_COLOR);
        assert_eq!(img.get_pixel(0, 1).0, LAND_COLOR);
        assert_eq!(img.get_pixel(1, 1).0, LAND_COLOR);
    }
}
