//! Coherent noise field sampling
//!
//! Produces the raw elevation field the classifier starts from: 2D Perlin
//! noise sampled on the cell lattice, shifted by a per-run random offset so
//! successive runs land on different regions of the noise domain.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::tilemap::Tilemap;

/// Noise offsets are drawn from `[-OFFSET_RANGE, OFFSET_RANGE)` once per run.
pub const OFFSET_RANGE: i32 = 10_000;

/// Draw the per-run noise offsets from the caller's RNG. Pinning the RNG
/// seed pins the offsets, and with them the whole field.
pub fn random_offsets(rng: &mut ChaCha8Rng) -> (i32, i32) {
    (
        rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE),
        rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE),
    )
}

/// Sample a `size` x `size` Perlin field at `(i * scale + offset_x,
/// j * scale + offset_y)`. The noise lattice itself is fixed; all
/// run-to-run variation comes from the offsets, so identical
/// `(scale, offset_x, offset_y)` always reproduce the same field.
///
/// Output is remapped from the sampler's `[-1, 1]` range to `[0, 1]` and
/// clamped.
pub fn generate_noise_map(size: usize, scale: f64, offset_x: i32, offset_y: i32) -> Tilemap<f32> {
    let perlin = Perlin::new(0);
    let mut map = Tilemap::new_with(size, size, 0.0f32);

    for y in 0..size {
        for x in 0..size {
            let sx = x as f64 * scale + offset_x as f64;
            let sy = y as f64 * scale + offset_y as f64;
            let raw = perlin.get([sx, sy]);
            let val = ((raw + 1.0) * 0.5).clamp(0.0, 1.0) as f32;
            map.set(x, y, val);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_noise_map_is_deterministic() {
        let a = generate_noise_map(32, 0.1, 1234, -4321);
        let b = generate_noise_map(32, 0.1, 1234, -4321);

        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_map_values_are_normalized() {
        let map = generate_noise_map(48, 0.13, -271, 828);

        for (x, y, &v) in map.iter() {
            assert!(
                (0.0..=1.0).contains(&v),
                "value {} at ({}, {}) outside [0, 1]",
                v,
                x,
                y
            );
        }
    }

    #[test]
    fn test_different_offsets_change_the_field() {
        let a = generate_noise_map(16, 0.1, 0, 0);
        let b = generate_noise_map(16, 0.1, 5000, -5000);

        assert_ne!(a, b);
    }

    #[test]
    fn test_random_offsets_are_seeded_and_in_range() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);

        let offsets1 = random_offsets(&mut rng1);
        let offsets2 = random_offsets(&mut rng2);
        assert_eq!(offsets1, offsets2);

        for offset in [offsets1.0, offsets1.1] {
            assert!((-OFFSET_RANGE..OFFSET_RANGE).contains(&offset));
        }
    }
}
