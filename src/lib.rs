pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, LorentzForce};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::boundary::reflect_walls;
pub use simulation::fusion::{fuse_close_pairs, Fusion};
pub use simulation::scenario::{Scenario, StepReport};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use configuration::initial::{load_initial_conditions, parse_initial_conditions, assemble_bodies};

pub use visualization::ascii::{render_frame, status_line};
pub use visualization::terminal::{run_terminal, Clock, Renderer, RunSummary, TerminalRenderer, NullRenderer, SleepClock, NoPacing};

pub use benchmark::benchmark::bench_step_curve;

pub use error::ConfigError;
