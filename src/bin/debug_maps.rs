//! Debug tool for inspecting the intermediate generation fields
//! Exports the noise map, shaped falloff map, and combined map as grayscale
//! PNGs next to the final classification texture, all from one fixed seed.

use island_generator::config::IslandParams;
use island_generator::export;
use island_generator::grid;
use island_generator::noise_map;
use island_generator::seeds::IslandSeeds;
use island_generator::texture;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

fn main() {
    let params = IslandParams::default();
    let seeds = IslandSeeds::from_master(SEED);
    println!("Exporting debug maps for {}", seeds);

    let mut rng = ChaCha8Rng::seed_from_u64(seeds.noise);
    let (offset_x, offset_y) = noise_map::random_offsets(&mut rng);
    println!("Noise offsets: ({}, {})", offset_x, offset_y);

    let noise = noise_map::generate_noise_map(
        params.size,
        params.noise_scale as f64,
        offset_x,
        offset_y,
    );
    let falloff = grid::build_falloff_map(params.size, &params.edge_curve, params.falloff_radius);
    let combined = grid::combine_maps(&noise, &falloff);
    let cells = grid::classify_field(&combined, params.water_value);

    let fields = [
        (&noise, "debug_noise.png"),
        (&falloff, "debug_falloff.png"),
        (&combined, "debug_combined.png"),
    ];
    for (map, path) in fields {
        match export::export_scalar_map(map, path) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => eprintln!("Failed to write {}: {}", path, e),
        }
    }

    match texture::export_classification(&cells, "debug_classification.png") {
        Ok(()) => println!("Wrote debug_classification.png"),
        Err(e) => eprintln!("Failed to write debug_classification.png: {}", e),
    }
}
