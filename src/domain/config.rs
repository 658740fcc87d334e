use serde::{Deserialize, Serialize};

use crate::error::FluidError;

/// Smallest grid that still has an interior cell.
pub const MIN_GRID_SIZE: u32 = 3;

/// Simulation parameters. Fixed once a solver is built from them.
///
/// JSON uses camelCase keys and every key is optional:
/// `{"size": 128, "dt": 0.05, "fadeRate": 0.99}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidConfig {
    /// Cells per axis (the grid is square).
    pub size: u32,
    /// Density diffusion rate.
    pub diffusion: f32,
    /// Velocity diffusion rate.
    pub viscosity: f32,
    /// Time increment per step.
    pub dt: f32,
    /// Relaxation sweeps per linear solve, used by `tick`.
    pub iterations: u32,
    /// Density multiplier applied after each `tick`.
    pub fade_rate: f32,
    /// Scan the fields for NaN/Inf after every step.
    pub check_stability: bool,
}

impl Default for FluidConfig {
    fn default() -> Self {
        FluidConfig {
            size: 64,
            diffusion: 0.0001,
            viscosity: 0.0001,
            dt: 0.1,
            iterations: 4,
            fade_rate: 0.95,
            check_stability: true,
        }
    }
}

impl FluidConfig {
    /// Config with the four constructor parameters and defaults elsewhere.
    pub fn new(size: u32, diffusion: f32, viscosity: f32, dt: f32) -> Self {
        FluidConfig {
            size,
            diffusion,
            viscosity,
            dt,
            ..FluidConfig::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FluidError> {
        let config: FluidConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), FluidError> {
        if self.size < MIN_GRID_SIZE {
            return Err(FluidError::invalid(format!(
                "grid size {} is below the minimum of {}",
                self.size, MIN_GRID_SIZE
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(FluidError::invalid(format!("time step must be positive, got {}", self.dt)));
        }
        if !self.diffusion.is_finite() || self.diffusion < 0.0 {
            return Err(FluidError::invalid(format!(
                "diffusion must be non-negative, got {}",
                self.diffusion
            )));
        }
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(FluidError::invalid(format!(
                "viscosity must be non-negative, got {}",
                self.viscosity
            )));
        }
        if self.iterations == 0 {
            return Err(FluidError::invalid("iteration count must be at least 1"));
        }
        validate_fade_rate(self.fade_rate)?;
        Ok(())
    }
}

pub(crate) fn validate_fade_rate(rate: f32) -> Result<(), FluidError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(FluidError::invalid(format!("fade rate must be within [0, 1], got {}", rate)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_smoke_preset() {
        let config = FluidConfig::default();
        assert_eq!(config.size, 64);
        assert_eq!(config.iterations, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FluidConfig::from_json(r#"{"size": 10, "fadeRate": 1.0}"#).unwrap();
        assert_eq!(config.size, 10);
        assert_eq!(config.fade_rate, 1.0);
        assert_eq!(config.dt, 0.1);
        assert!(config.check_stability);
    }

    #[test]
    fn json_round_trips_through_to_json() {
        let config = FluidConfig {
            size: 32,
            iterations: 12,
            check_stability: false,
            ..FluidConfig::default()
        };
        assert_eq!(FluidConfig::from_json(&config.to_json()).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = FluidConfig::from_json("{size: ").unwrap_err();
        assert!(matches!(err, FluidError::Config(_)));
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let cases = [
            FluidConfig::new(2, 0.0, 0.0, 0.1),
            FluidConfig::new(10, 0.0, 0.0, 0.0),
            FluidConfig::new(10, 0.0, 0.0, f32::NAN),
            FluidConfig::new(10, -1.0, 0.0, 0.1),
            FluidConfig::new(10, 0.0, -0.5, 0.1),
            FluidConfig { iterations: 0, ..FluidConfig::new(10, 0.0, 0.0, 0.1) },
            FluidConfig { fade_rate: 1.5, ..FluidConfig::new(10, 0.0, 0.0, 0.1) },
        ];
        for config in cases.iter() {
            let err = config.validate().unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} should be rejected", config);
        }
    }
}
