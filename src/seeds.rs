//! Seed management for island generation
//!
//! Provides separate seeds for each randomized system, so noise offsets and
//! prop scatter can be varied or pinned independently of each other.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for all randomized generation systems.
///
/// Each system gets its own seed, derived deterministically from a master
/// seed. Sharing the master seed is enough to recreate a run exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IslandSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Noise field offset selection
    pub noise: u64,
    /// Prop scatter decisions
    pub props: u64,
}

impl IslandSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            noise: derive_seed(master, "noise"),
            props: derive_seed(master, "props"),
        }
    }
}

/// Derive a sub-seed from a master seed and a system name.
/// Uses hashing to ensure different systems get different but deterministic seeds.
fn derive_seed(master: u64, system: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    system.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for IslandSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IslandSeeds {{ master: {}, noise: {}, props: {} }}",
            self.master, self.noise, self.props,
        )
    }
}
