//! Land/water grid classification
//!
//! The core synthesis step. A square-domain falloff map, shaped by the edge
//! curve and clipped by a circular cutoff, is subtracted from a Perlin noise
//! field; the result is thresholded pointwise into a land/water cell grid.
//! Elevation drops toward the map edges, so water naturally surrounds the
//! landmass.

use crate::config::IslandParams;
use crate::falloff::{radial_falloff, EdgeCurve};
use crate::noise_map;
use crate::tilemap::Tilemap;

/// One lattice point's classification. Cells are written once during
/// classification and never mutated afterwards; identity is the cell's
/// `(x, y)` position in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_water: bool,
}

/// Build the falloff map for a `size` x `size` grid: per cell, the Chebyshev
/// distance from center normalized to `[0, 1]` (a square base shape, not a
/// circular one), remapped through the edge curve, then clipped by the hard
/// radial cutoff so the extreme corners of the square are fully suppressed
/// beyond `radius`.
pub fn build_falloff_map(size: usize, curve: &EdgeCurve, radius: f32) -> Tilemap<f32> {
    let center = size as f32 / 2.0;
    let mut map = Tilemap::new_with(size, size, 0.0f32);

    for y in 0..size {
        for x in 0..size {
            let fall_a = x as f32 / size as f32 * 2.0 - 1.0;
            let fall_b = y as f32 / size as f32 * 2.0 - 1.0;
            let val = curve.evaluate(fall_a.abs().max(fall_b.abs()));
            map.set(x, y, radial_falloff(val, radius, x, y, center, center));
        }
    }

    map
}

/// Pointwise `noise - falloff`. Both maps must have the same dimensions.
pub fn combine_maps(noise: &Tilemap<f32>, falloff: &Tilemap<f32>) -> Tilemap<f32> {
    let mut combined = noise.clone();
    for (x, y, value) in combined.iter_mut() {
        *value -= *falloff.get(x, y);
    }
    combined
}

/// Threshold a combined field into cells: anything below `water_value`
/// becomes water. Purely pointwise; disconnected interior ponds are a valid
/// outcome, not a defect.
pub fn classify_field(combined: &Tilemap<f32>, water_value: f32) -> Tilemap<Cell> {
    let mut grid = Tilemap::new(combined.width, combined.height);
    for (x, y, &value) in combined.iter() {
        grid.set(
            x,
            y,
            Cell {
                is_water: value < water_value,
            },
        );
    }
    grid
}

/// Run the full classification: falloff map, noise field, combination,
/// threshold. The returned grid is fully populated; callers never observe a
/// partially classified state.
///
/// Deterministic for fixed `(params, offset_x, offset_y)`.
pub fn classify(params: &IslandParams, offset_x: i32, offset_y: i32) -> Tilemap<Cell> {
    let falloff = build_falloff_map(params.size, &params.edge_curve, params.falloff_radius);
    let noise = noise_map::generate_noise_map(
        params.size,
        params.noise_scale as f64,
        offset_x,
        offset_y,
    );
    let combined = combine_maps(&noise, &falloff);
    classify_field(&combined, params.water_value)
}
