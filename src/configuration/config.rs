//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which optional physics runs (magnetic field, fusion) and pacing
//! - [`ParametersConfig`] – viewport size and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so a file only needs to list what it changes.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   magnetic: false
//!   fusion: true
//!   frame_delay_ms: 200
//!
//! parameters:
//!   width: 75
//!   height: 40
//!   G: 1.0
//!   dt: 1.0
//!   cor: 0.8
//!   fusion_radius: 5.0
//!   t_end: 400.0
//!
//! bodies:
//!   - { m: 60.0, x: [0.0, -19.9], v: [2.0, 4.0] }
//!   - { m: 60.0, x: [-10.0, -19.9], v: [3.0, 0.0] }
//!   - { m: 100000.0, x: [0.0, 1000.0], v: [0.0, 0.0], anchor: true }
//! ```
//!
//! When no body is flagged `anchor`, the last one takes the role.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Optional physics and pacing
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub magnetic: bool, // add the Lorentz term for charged bodies
    pub fusion: bool, // merge bodies closer than `fusion_radius`
    pub frame_delay_ms: u64, // pause between frames in the terminal
}

impl Default for EngineConfig {
    fn default() -> Self {
        let e = Engine::default();
        Self {
            magnetic: e.magnetic,
            fusion: e.fusion,
            frame_delay_ms: e.frame_delay_ms,
        }
    }
}

impl From<EngineConfig> for Engine {
    fn from(cfg: EngineConfig) -> Self {
        Engine {
            magnetic: cfg.magnetic,
            fusion: cfg.fusion,
            frame_delay_ms: cfg.frame_delay_ms,
        }
    }
}

/// Viewport and physical constants
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub width: u32, // visible width in cells
    pub height: u32, // visible height in cells
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub cor: f64, // wall restitution
    pub magnetic: f64, // uniform field strength along z
    pub fusion_radius: f64, // merge distance
    pub eps2: f64, // softening
    pub t_end: f64, // stop time
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            width: p.width,
            height: p.height,
            G: p.G,
            dt: p.dt,
            cor: p.cor,
            magnetic: p.magnetic,
            fusion_radius: p.fusion_radius,
            eps2: p.eps2,
            t_end: p.t_end,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Parameters {
            width: cfg.width,
            height: cfg.height,
            G: cfg.G,
            dt: cfg.dt,
            cor: cfg.cor,
            magnetic: cfg.magnetic,
            fusion_radius: cfg.fusion_radius,
            eps2: cfg.eps2,
            t_end: cfg.t_end,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BodyConfig {
    pub m: f64, // mass
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    #[serde(default)]
    pub q: f64, // charge
    #[serde(default)]
    pub anchor: bool, // dominant off-screen mass
}

impl BodyConfig {
    pub fn to_body(&self) -> Body {
        let mut body = Body::new(
            self.m,
            NVec2::new(self.x[0], self.x[1]),
            NVec2::new(self.v[0], self.v[1]),
        )
        .with_charge(self.q);
        body.anchor = self.anchor;
        body
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// The compiled-in preset: two charged bodies near the bottom wall and a
    /// heavy anchor far above the screen, with the magnetic field on.
    pub fn magnetic_preset() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig { m: 60.0, x: [0.0, -19.9], v: [2.0, 4.0], q: 1.0, anchor: false },
                BodyConfig { m: 60.0, x: [-10.0, -19.9], v: [3.0, 0.0], q: 1.0, anchor: false },
                BodyConfig { m: 100000.0, x: [0.0, 1000.0], v: [0.0, 0.0], q: 1.0, anchor: true },
            ],
        }
    }

    /// Same bodies as the magnetic preset, uncharged, with fusion instead of the field.
    pub fn fusion_preset() -> Self {
        let mut cfg = Self::magnetic_preset();
        cfg.engine.magnetic = false;
        cfg.engine.fusion = true;
        for b in cfg.bodies.iter_mut() {
            b.q = 0.0;
        }
        cfg
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
