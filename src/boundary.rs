//! Boundary (edge) mesh extraction
//!
//! Walks the classified grid and emits one vertical wall quad wherever a
//! land cell meets a water cell across one of its four orthogonal edges.
//! The quads form the cliff face between the ground plane and the water.

use glam::Vec3;

use crate::grid::Cell;
use crate::tilemap::Tilemap;

/// How far below the ground plane the edge walls extend.
pub const EDGE_DEPTH: f32 = 1.0;

/// Which side of the owning land cell a wall quad sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Left,
    Right,
    Down,
    Up,
}

/// A vertical wall quad at a land/water boundary. Corners are ordered so
/// that the triangles `a,b,c` and `b,d,c` wind outward, away from the
/// owning land cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryQuad {
    pub direction: EdgeDirection,
    pub corners: [Vec3; 4],
}

impl BoundaryQuad {
    /// Expand into the six vertices of the quad's two triangles.
    pub fn vertices(&self) -> [Vec3; 6] {
        let [a, b, c, d] = self.corners;
        [a, b, c, b, d, c]
    }
}

/// Extract wall quads for every land/water edge in the grid.
///
/// Land cells are visited in row-major order; for each one the Left, Right,
/// Down, Up neighbors are checked in that order, and every in-bounds water
/// neighbor emits one independent quad (a cell with water on three sides
/// gets three separate quads). Neighbors past the grid edge never count as
/// water, so the grid boundary is not an implicit shoreline.
pub fn extract_boundary_quads(grid: &Tilemap<Cell>) -> Vec<BoundaryQuad> {
    let mut quads = Vec::new();

    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y).is_water {
                continue;
            }
            let fx = x as f32;
            let fy = y as f32;

            if x > 0 && grid.get(x - 1, y).is_water {
                quads.push(BoundaryQuad {
                    direction: EdgeDirection::Left,
                    corners: [
                        Vec3::new(fx - 0.5, 0.0, fy + 0.5),
                        Vec3::new(fx - 0.5, 0.0, fy - 0.5),
                        Vec3::new(fx - 0.5, -EDGE_DEPTH, fy + 0.5),
                        Vec3::new(fx - 0.5, -EDGE_DEPTH, fy - 0.5),
                    ],
                });
            }
            if x + 1 < grid.width && grid.get(x + 1, y).is_water {
                quads.push(BoundaryQuad {
                    direction: EdgeDirection::Right,
                    corners: [
                        Vec3::new(fx + 0.5, 0.0, fy - 0.5),
                        Vec3::new(fx + 0.5, 0.0, fy + 0.5),
                        Vec3::new(fx + 0.5, -EDGE_DEPTH, fy - 0.5),
                        Vec3::new(fx + 0.5, -EDGE_DEPTH, fy + 0.5),
                    ],
                });
            }
            if y > 0 && grid.get(x, y - 1).is_water {
                quads.push(BoundaryQuad {
                    direction: EdgeDirection::Down,
                    corners: [
                        Vec3::new(fx - 0.5, 0.0, fy - 0.5),
                        Vec3::new(fx + 0.5, 0.0, fy - 0.5),
                        Vec3::new(fx - 0.5, -EDGE_DEPTH, fy - 0.5),
                        Vec3::new(fx + 0.5, -EDGE_DEPTH, fy - 0.5),
                    ],
                });
            }
            if y + 1 < grid.height && grid.get(x, y + 1).is_water {
                quads.push(BoundaryQuad {
                    direction: EdgeDirection::Up,
                    corners: [
                        Vec3::new(fx + 0.5, 0.0, fy + 0.5),
                        Vec3::new(fx - 0.5, 0.0, fy + 0.5),
                        Vec3::new(fx + 0.5, -EDGE_DEPTH, fy + 0.5),
                        Vec3::new(fx - 0.5, -EDGE_DEPTH, fy + 0.5),
                    ],
                });
            }
        }
    }

    quads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_water(rows: &[&[bool]]) -> Tilemap<Cell> {
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = Tilemap::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &is_water) in row.iter().enumerate() {
                grid.set(x, y, Cell { is_water });
            }
        }
        grid
    }

    #[test]
    fn test_all_land_emits_no_quads() {
        let grid = grid_from_water(&[
            &[false, false, false],
            &[false, false, false],
            &[false, false, false],
        ]);

        assert!(extract_boundary_quads(&grid).is_empty());
    }

    #[test]
    fn test_center_water_emits_four_quads() {
        let grid = grid_from_water(&[
            &[false, false, false],
            &[false, true, false],
            &[false, false, false],
        ]);

        let quads = extract_boundary_quads(&grid);
        assert_eq!(quads.len(), 4);

        // one quad from each of the four land neighbors of the pond:
        // (1,0) sees water above it, (0,1) to its right, (2,1) to its
        // left, (1,2) below it
        let directions: Vec<EdgeDirection> = quads.iter().map(|q| q.direction).collect();
        assert!(directions.contains(&EdgeDirection::Up));
        assert!(directions.contains(&EdgeDirection::Right));
        assert!(directions.contains(&EdgeDirection::Left));
        assert!(directions.contains(&EdgeDirection::Down));
    }

    #[test]
    fn test_out_of_bounds_neighbors_never_count_as_water() {
        // a single land cell has no in-bounds neighbors at all
        let grid = grid_from_water(&[&[false]]);
        assert!(extract_boundary_quads(&grid).is_empty());

        // corner land cell: the off-grid neighbors at (-1,0) and (0,-1)
        // must not produce quads either
        let grid = grid_from_water(&[&[false, false], &[false, false]]);
        assert!(extract_boundary_quads(&grid).is_empty());
    }

    #[test]
    fn test_isolated_land_emits_quads_on_all_water_sides() {
        let grid = grid_from_water(&[
            &[true, true, true],
            &[true, false, true],
            &[true, true, true],
        ]);

        let quads = extract_boundary_quads(&grid);
        assert_eq!(quads.len(), 4);
    }

    #[test]
    fn test_left_quad_geometry() {
        let grid = grid_from_water(&[
            &[true, true, true],
            &[true, false, true],
            &[true, true, true],
        ]);

        let quads = extract_boundary_quads(&grid);
        let left = quads
            .iter()
            .find(|q| q.direction == EdgeDirection::Left)
            .unwrap();

        // the land cell is (1,1); its left wall sits at x = 0.5, spanning
        // z in [0.5, 1.5] and dropping from the ground plane to -1
        let a = Vec3::new(0.5, 0.0, 1.5);
        let b = Vec3::new(0.5, 0.0, 0.5);
        let c = Vec3::new(0.5, -EDGE_DEPTH, 1.5);
        let d = Vec3::new(0.5, -EDGE_DEPTH, 0.5);
        assert_eq!(left.corners, [a, b, c, d]);
        assert_eq!(left.vertices(), [a, b, c, b, d, c]);
    }

    #[test]
    fn test_corner_water_field_end_to_end() {
        use crate::grid::classify_field;

        // hand-computed combined field: negative only at the four corners
        let rows: [[f32; 4]; 4] = [
            [-0.2, 0.1, 0.1, -0.2],
            [0.1, 0.3, 0.3, 0.1],
            [0.1, 0.3, 0.3, 0.1],
            [-0.2, 0.1, 0.1, -0.2],
        ];
        let mut combined = Tilemap::new_with(4, 4, 0.0f32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                combined.set(x, y, v);
            }
        }

        let grid = classify_field(&combined, 0.0);

        for (x, y, cell) in grid.iter() {
            let is_corner = (x == 0 || x == 3) && (y == 0 || y == 3);
            assert_eq!(cell.is_water, is_corner, "wrong class at ({}, {})", x, y);
        }

        // each corner water cell has exactly two in-bounds land neighbors,
        // and each of those contributes one quad: 4 corners * 2 = 8
        let quads = extract_boundary_quads(&grid);
        assert_eq!(quads.len(), 8);

        let count = |dir: EdgeDirection| quads.iter().filter(|q| q.direction == dir).count();
        assert_eq!(count(EdgeDirection::Left), 2);
        assert_eq!(count(EdgeDirection::Right), 2);
        assert_eq!(count(EdgeDirection::Down), 2);
        assert_eq!(count(EdgeDirection::Up), 2);
    }

    #[test]
    fn test_three_sided_peninsula_emits_three_separate_quads() {
        // land column poking into water from the bottom edge
        let grid = grid_from_water(&[
            &[true, true, true],
            &[true, false, true],
            &[true, false, true],
        ]);

        let quads = extract_boundary_quads(&grid);
        // tip cell (1,1): left, right, down water -> 3 quads
        // stem cell (1,2): left and right water -> 2 quads
        assert_eq!(quads.len(), 5);
    }
}
