//! Island data container and generation pipeline
//!
//! Bundles everything one generation run produces into a single immutable
//! struct. Regeneration builds a whole new bundle; nothing is patched in
//! place, so downstream consumers can never observe a half-built island.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::boundary::{self, BoundaryQuad};
use crate::config::{IslandParams, ParamError};
use crate::grid::{self, Cell};
use crate::noise_map;
use crate::props::{self, PropPlacement};
use crate::seeds::IslandSeeds;
use crate::tilemap::Tilemap;

/// All data produced by one island generation run.
#[derive(Clone, Debug)]
pub struct IslandData {
    /// Parameters used for generation (allows recreation)
    pub params: IslandParams,
    /// Seeds used for generation
    pub seeds: IslandSeeds,
    /// Noise offsets drawn for this run; pinning these reproduces the field
    pub noise_offset: (i32, i32),
    /// The classified land/water grid
    pub grid: Tilemap<Cell>,
    /// Wall quads at every land/water boundary, in extraction order
    pub boundary: Vec<BoundaryQuad>,
    /// Decorative prop placements on land cells
    pub props: Vec<PropPlacement>,
}

impl IslandData {
    pub fn land_count(&self) -> usize {
        self.grid.iter().filter(|(_, _, c)| !c.is_water).count()
    }

    pub fn water_count(&self) -> usize {
        self.grid.iter().filter(|(_, _, c)| c.is_water).count()
    }

    /// Check if a cell is coastal: land with at least one in-bounds water
    /// neighbor across an orthogonal edge. Off-grid neighbors don't count.
    pub fn is_coastal(&self, x: usize, y: usize) -> bool {
        if self.grid.get(x, y).is_water {
            return false;
        }

        const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        NEIGHBORS.iter().any(|&(dx, dy)| {
            self.grid
                .get_signed(x as i32 + dx, y as i32 + dy)
                .map_or(false, |c| c.is_water)
        })
    }
}

/// Generate a complete island: validate parameters, derive per-system
/// seeds, draw the noise offsets, classify the grid, extract the boundary
/// walls, and scatter props. Runs once, synchronously, on the calling
/// thread; the returned bundle is fully populated before it is handed back.
pub fn generate_island(params: &IslandParams, seed: u64) -> Result<IslandData, ParamError> {
    params.validate()?;
    let seeds = IslandSeeds::from_master(seed);

    let mut noise_rng = ChaCha8Rng::seed_from_u64(seeds.noise);
    let noise_offset = noise_map::random_offsets(&mut noise_rng);

    let grid = grid::classify(params, noise_offset.0, noise_offset.1);
    let boundary = boundary::extract_boundary_quads(&grid);

    let mut prop_rng = ChaCha8Rng::seed_from_u64(seeds.props);
    let props = props::scatter_props(&grid, params.prop_density, &mut prop_rng);

    Ok(IslandData {
        params: *params,
        seeds,
        noise_offset,
        grid,
        boundary,
        props,
    })
}
