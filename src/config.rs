//! Generation parameters and fail-fast validation

use serde::{Deserialize, Serialize};

use crate::falloff::EdgeCurve;
use crate::props::DEFAULT_PROP_DENSITY;

/// Parameters for one island generation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandParams {
    /// Grid dimension; the island is `size` x `size` cells
    pub size: usize,
    /// Noise sampling step per cell (lower = larger landforms)
    pub noise_scale: f32,
    /// Classification threshold: combined values below it become water
    pub water_value: f32,
    /// Radius of the circular cutoff applied to the square falloff map
    pub falloff_radius: f32,
    /// S-curve applied to the square falloff before combination
    pub edge_curve: EdgeCurve,
    /// Per-land-cell probability of receiving a prop
    pub prop_density: f32,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self {
            size: 100,
            noise_scale: 0.1,
            water_value: 0.2,
            falloff_radius: 90.0,
            edge_curve: EdgeCurve::default(),
            prop_density: DEFAULT_PROP_DENSITY,
        }
    }
}

impl IslandParams {
    /// Check every parameter before any generation work happens.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.size == 0 {
            return Err(ParamError::ZeroGridSize);
        }
        // negated comparisons also reject NaN
        if !(self.noise_scale > 0.0) {
            return Err(ParamError::NonPositiveNoiseScale(self.noise_scale));
        }
        if !self.water_value.is_finite() {
            return Err(ParamError::NonFiniteWaterValue(self.water_value));
        }
        if !(self.falloff_radius > 0.0) {
            return Err(ParamError::NonPositiveFalloffRadius(self.falloff_radius));
        }
        if !(self.prop_density >= 0.0 && self.prop_density <= 1.0) {
            return Err(ParamError::PropDensityOutOfRange(self.prop_density));
        }
        Ok(())
    }
}

/// Errors that reject a parameter set before generation starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    ZeroGridSize,
    NonPositiveNoiseScale(f32),
    NonFiniteWaterValue(f32),
    NonPositiveFalloffRadius(f32),
    PropDensityOutOfRange(f32),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::ZeroGridSize => write!(f, "grid size must be at least 1"),
            ParamError::NonPositiveNoiseScale(v) => {
                write!(f, "noise scale must be positive, got {}", v)
            }
            ParamError::NonFiniteWaterValue(v) => {
                write!(f, "water threshold must be finite, got {}", v)
            }
            ParamError::NonPositiveFalloffRadius(v) => {
                write!(f, "falloff radius must be positive, got {}", v)
            }
            ParamError::PropDensityOutOfRange(v) => {
                write!(f, "prop density must be within [0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ParamError {}
