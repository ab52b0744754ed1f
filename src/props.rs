//! Decorative prop scatter
//!
//! Picks land cells to receive a decorative prop (a tree, a rock) with one
//! uniform draw per land cell. The host application instantiates whatever
//! asset it likes at each placement; the core only decides where.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::Cell;
use crate::tilemap::Tilemap;

/// Fraction of land cells that receive a prop on average.
pub const DEFAULT_PROP_DENSITY: f32 = 0.05;

/// A single decorative prop anchored to a land cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropPlacement {
    /// Owning cell coordinates
    pub cell: (usize, usize),
    /// World-space anchor at the cell center on the ground plane
    pub position: Vec3,
}

/// Scatter props across the grid's land cells.
///
/// Cells are visited in row-major order with exactly one uniform `[0, 1)`
/// draw per land cell; water cells draw nothing. The placement list is
/// therefore a pure function of the grid and the RNG seed.
pub fn scatter_props(
    grid: &Tilemap<Cell>,
    density: f32,
    rng: &mut ChaCha8Rng,
) -> Vec<PropPlacement> {
    let mut props = Vec::new();

    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y).is_water {
                continue;
            }
            if rng.gen_range(0.0..1.0f32) < density {
                props.push(PropPlacement {
                    cell: (x, y),
                    position: Vec3::new(x as f32, 0.0, y as f32),
                });
            }
        }
    }

    props
}
