//! Mesh building adapters
//!
//! Turns the classified grid and the extracted boundary quads into plain
//! vertex buffers. No rendering-API calls happen here; the host application
//! owns upload and normal recalculation.

use glam::{Vec2, Vec3};

use crate::boundary::BoundaryQuad;
use crate::grid::Cell;
use crate::tilemap::Tilemap;

/// Plain vertex buffers ready for upload by a host renderer. Indices are
/// sequential (vertices are not shared between triangles), matching the
/// flat-shaded look of the terrain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build the ground mesh: one horizontal unit quad at `y = 0` per land cell,
/// corners half a cell out from the cell center. Each quad's UVs map its
/// cell into `[0, 1]²` texture space so the classification texture lands on
/// the right cells. Water cells emit nothing.
pub fn build_ground_mesh(grid: &Tilemap<Cell>) -> MeshData {
    let mut mesh = MeshData::default();
    let u_scale = grid.width as f32;
    let v_scale = grid.height as f32;

    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y).is_water {
                continue;
            }
            let fx = x as f32;
            let fy = y as f32;

            let a = Vec3::new(fx - 0.5, 0.0, fy + 0.5);
            let b = Vec3::new(fx + 0.5, 0.0, fy + 0.5);
            let c = Vec3::new(fx - 0.5, 0.0, fy - 0.5);
            let d = Vec3::new(fx + 0.5, 0.0, fy - 0.5);
            let uv_a = Vec2::new(fx / u_scale, fy / v_scale);
            let uv_b = Vec2::new((fx + 1.0) / u_scale, fy / v_scale);
            let uv_c = Vec2::new(fx / u_scale, (fy + 1.0) / v_scale);
            let uv_d = Vec2::new((fx + 1.0) / u_scale, (fy + 1.0) / v_scale);

            for (v, uv) in [(a, uv_a), (b, uv_b), (c, uv_c), (b, uv_b), (d, uv_d), (c, uv_c)] {
                mesh.indices.push(mesh.positions.len() as u32);
                mesh.positions.push(v);
                mesh.uvs.push(uv);
            }
        }
    }

    mesh
}

/// Build the edge (cliff) mesh by concatenating the wall quads' triangles in
/// extraction order. Edge walls carry no UVs; the host paints them with a
/// plain material.
pub fn build_edge_mesh(quads: &[BoundaryQuad]) -> MeshData {
    let mut mesh = MeshData::default();

    for quad in quads {
        for v in quad.vertices() {
            mesh.indices.push(mesh.positions.len() as u32);
            mesh.positions.push(v);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::extract_boundary_quads;

    fn single_land_grid() -> Tilemap<Cell> {
        let mut grid = Tilemap::new_with(2, 2, Cell { is_water: true });
        grid.set(0, 0, Cell { is_water: false });
        grid
    }

    #[test]
    fn test_ground_mesh_emits_six_vertices_per_land_cell() {
        let mut grid = Tilemap::new_with(3, 3, Cell { is_water: true });
        grid.set(0, 0, Cell { is_water: false });
        grid.set(1, 2, Cell { is_water: false });

        let mesh = build_ground_mesh(&grid);

        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.uvs.len(), 12);
        // indices are sequential, one per emitted vertex
        assert_eq!(mesh.indices, (0..12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_all_water_grid_builds_empty_mesh() {
        let grid = Tilemap::new_with(4, 4, Cell { is_water: true });
        let mesh = build_ground_mesh(&grid);

        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_ground_quad_geometry_and_uvs() {
        let mesh = build_ground_mesh(&single_land_grid());

        // cell (0,0) in a 2x2 grid: corners half a unit around the origin
        assert_eq!(mesh.positions[0], Vec3::new(-0.5, 0.0, 0.5));
        assert_eq!(mesh.positions[1], Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(mesh.positions[2], Vec3::new(-0.5, 0.0, -0.5));
        // second triangle reuses b and c around the new corner d
        assert_eq!(mesh.positions[3], mesh.positions[1]);
        assert_eq!(mesh.positions[4], Vec3::new(0.5, 0.0, -0.5));
        assert_eq!(mesh.positions[5], mesh.positions[2]);

        assert_eq!(mesh.uvs[0], Vec2::new(0.0, 0.0));
        assert_eq!(mesh.uvs[4], Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_edge_mesh_concatenates_quads_in_order() {
        let mut grid = Tilemap::new_with(2, 1, Cell { is_water: true });
        grid.set(0, 0, Cell { is_water: false });

        let quads = extract_boundary_quads(&grid);
        assert_eq!(quads.len(), 1);

        let mesh = build_edge_mesh(&quads);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.positions, quads[0].vertices().to_vec());
        assert!(mesh.uvs.is_empty());
        assert_eq!(mesh.indices, (0..6).collect::<Vec<u32>>());
    }
}
