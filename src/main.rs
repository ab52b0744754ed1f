use clap::Parser;
use serde::Serialize;

use island_generator::config::IslandParams;
use island_generator::island::{self, IslandData};
use island_generator::mesh;
use island_generator::texture;

#[derive(Parser, Debug)]
#[command(name = "island_generator")]
#[command(about = "Generate a procedural island: land/water grid, meshes, texture, props")]
struct Args {
    /// Grid dimension (the island is SIZE x SIZE cells)
    #[arg(short = 'n', long, default_value = "100")]
    size: usize,

    /// Noise sampling step per cell (lower = larger landforms)
    #[arg(long, default_value = "0.1")]
    noise_scale: f32,

    /// Water threshold: combined values below it classify as water
    #[arg(long, default_value = "0.2")]
    water_value: f32,

    /// Radius of the circular falloff cutoff
    #[arg(long, default_value = "90")]
    falloff_radius: f32,

    /// Per-land-cell probability of receiving a prop
    #[arg(long, default_value = "0.05")]
    prop_density: f32,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output path for the classification texture
    #[arg(short, long, default_value = "island_texture.png")]
    texture: String,

    /// Write a JSON stats summary to this path
    #[arg(long)]
    stats: Option<String>,
}

#[derive(Serialize)]
struct StatsSummary {
    seed: u64,
    size: usize,
    noise_offset: (i32, i32),
    land_cells: usize,
    water_cells: usize,
    boundary_quads: usize,
    ground_vertices: usize,
    edge_vertices: usize,
    props: usize,
}

fn main() {
    let args = Args::parse();

    let params = IslandParams {
        size: args.size,
        noise_scale: args.noise_scale,
        water_value: args.water_value,
        falloff_radius: args.falloff_radius,
        prop_density: args.prop_density,
        ..Default::default()
    };
    let seed = args.seed.unwrap_or_else(|| rand::random());

    println!("Generating island with seed: {}", seed);
    println!("Grid size: {}x{}", params.size, params.size);

    let island = match island::generate_island(&params, seed) {
        Ok(island) => island,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };

    let total = params.size * params.size;
    let land = island.land_count();
    println!(
        "Classified {} cells: {} land ({:.1}%), {} water",
        total,
        land,
        100.0 * land as f64 / total as f64,
        island.water_count()
    );
    println!(
        "Noise offsets: ({}, {})",
        island.noise_offset.0, island.noise_offset.1
    );

    println!("Building meshes...");
    let ground = mesh::build_ground_mesh(&island.grid);
    let edge = mesh::build_edge_mesh(&island.boundary);
    println!(
        "Ground mesh: {} vertices, {} triangles",
        ground.vertex_count(),
        ground.triangle_count()
    );
    println!(
        "Edge mesh: {} wall quads, {} vertices",
        island.boundary.len(),
        edge.vertex_count()
    );
    println!("Scattered {} props", island.props.len());

    match texture::export_classification(&island.grid, &args.texture) {
        Ok(()) => println!("Texture saved to: {}", args.texture),
        Err(e) => {
            eprintln!("Failed to export texture: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(ref stats_path) = args.stats {
        let summary = StatsSummary {
            seed,
            size: params.size,
            noise_offset: island.noise_offset,
            land_cells: land,
            water_cells: island.water_count(),
            boundary_quads: island.boundary.len(),
            ground_vertices: ground.vertex_count(),
            edge_vertices: edge.vertex_count(),
            props: island.props.len(),
        };
        match write_stats(stats_path, &summary) {
            Ok(()) => println!("Stats saved to: {}", stats_path),
            Err(e) => {
                eprintln!("Failed to write stats: {}", e);
                std::process::exit(1);
            }
        }
    }

    print_coastline_summary(&island);
}

/// Write the run summary as pretty-printed JSON.
fn write_stats(path: &str, summary: &StatsSummary) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

fn print_coastline_summary(island: &IslandData) {
    let coastal = (0..island.params.size)
        .flat_map(|y| (0..island.params.size).map(move |x| (x, y)))
        .filter(|&(x, y)| island.is_coastal(x, y))
        .count();
    println!("Coastal cells: {}", coastal);
}
