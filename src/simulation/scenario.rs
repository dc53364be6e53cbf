//! Build a fully-initialized run from configuration and advance it
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! `Scenario::step` is the whole physics pipeline for one frame:
//! forces -> integrator -> walls -> fusion

use crate::configuration::config::ScenarioConfig;
use crate::configuration::initial::assemble_bodies;
use crate::error::ConfigError;
use crate::simulation::boundary::reflect_walls;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, LorentzForce, NewtonianGravity};
use crate::simulation::fusion::{fuse_close_pairs, Fusion};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

/// What happened during one [`Scenario::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub bounces: usize,
    pub fusions: Vec<Fusion>,
}

impl Scenario {
    /// Build a run with exactly `object_count` bodies taken from `cfg.bodies`
    /// (padded with inert bodies or truncated as needed).
    pub fn build_scenario(cfg: ScenarioConfig, object_count: usize) -> Result<Self, ConfigError> {
        let parameters: Parameters = cfg.parameters.into();
        parameters.validate()?;

        if let Some(b) = cfg.bodies.iter().find(|b| b.m < 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "m",
                reason: format!("body mass cannot be negative, got {}", b.m),
            });
        }

        let bodies = assemble_bodies(&cfg.bodies, object_count)?;
        let engine: Engine = cfg.engine.into();

        Ok(Self::from_parts(engine, parameters, System::new(bodies)))
    }

    /// Wire the force set for an already-built system.
    pub fn from_parts(engine: Engine, parameters: Parameters, system: System) -> Self {
        let mut forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });
        if engine.magnetic {
            forces = forces.with(LorentzForce { b: parameters.magnetic });
        }

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }

    /// Advance one `dt`.
    pub fn step(&mut self) -> StepReport {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
        } = self;

        semi_implicit_euler(system, forces, parameters);
        let bounces = reflect_walls(system, parameters);
        let fusions = if engine.fusion {
            fuse_close_pairs(system, parameters)
        } else {
            Vec::new()
        };

        StepReport { bounces, fusions }
    }

    pub fn finished(&self) -> bool {
        self.system.t > self.parameters.t_end
    }
}
