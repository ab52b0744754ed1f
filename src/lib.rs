//! Island generation library
//!
//! Synthesizes a land/water grid from layered noise and derives the meshes,
//! texture, and prop placements a host application needs to present it.
//! Re-exports modules for use by binaries and tools.

pub mod boundary;
pub mod config;
pub mod export;
pub mod falloff;
pub mod grid;
pub mod island;
pub mod mesh;
pub mod noise_map;
pub mod props;
pub mod seeds;
pub mod texture;
pub mod tilemap;
