//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the settings that never change while stepping:
//! - viewport size in character cells (`width`, `height`),
//! - gravitational constant, step size and stop time (`G`, `dt`, `t_end`),
//! - wall restitution and uniform magnetic field (`cor`, `magnetic`),
//! - fusion distance and optional softening (`fusion_radius`, `eps2`)

use crate::error::ConfigError;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub width: u32, // visible width in cells
    pub height: u32, // visible height in cells
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub cor: f64, // wall coefficient of restitution
    pub magnetic: f64, // field strength, z component only (out of the screen is positive)
    pub fusion_radius: f64, // bodies closer than this merge
    pub eps2: f64, // softening, 0 keeps the bare 1/r^2 law
    pub t_end: f64, // stop time
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: 75,
            height: 40,
            G: 1.0,
            dt: 1.0,
            cor: 0.8,
            magnetic: 10.0,
            fusion_radius: 5.0,
            eps2: 0.0,
            t_end: 400.0,
        }
    }
}

impl Parameters {
    /// Reject settings the stepper cannot make sense of.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "width/height",
                reason: "viewport must be at least one cell in each direction".into(),
            });
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "dt",
                reason: format!("step size must be positive and finite, got {}", self.dt),
            });
        }
        if !(0.0..=1.0).contains(&self.cor) {
            return Err(ConfigError::InvalidParameter {
                name: "cor",
                reason: format!("restitution must lie in [0, 1], got {}", self.cor),
            });
        }
        if !self.t_end.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "t_end",
                reason: format!("stop time must be finite, got {}", self.t_end),
            });
        }
        // NaN fails both comparisons
        if !(self.fusion_radius >= 0.0 && self.fusion_radius.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "fusion_radius",
                reason: format!("merge distance must be finite and non-negative, got {}", self.fusion_radius),
            });
        }
        if !(self.eps2 >= 0.0 && self.eps2.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "eps2",
                reason: format!("softening must be finite and non-negative, got {}", self.eps2),
            });
        }
        Ok(())
    }
}
