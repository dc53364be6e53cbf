//! Core state types for the bouncing-body sandbox.
//!
//! - `Body`   one point mass with its single-step lookback (`prev_x`, `prev_v`)
//! - `System` the ordered body collection plus the current simulation time `t`
//!
//! Bodies are never removed. A fused body stays in place with `m == 0` so
//! indices stay stable for the whole run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub m: f64, // mass, 0 = absorbed/inert
    pub q: f64, // charge, only read by the Lorentz term
    pub x: NVec2, // position
    pub prev_x: NVec2, // position at the start of the current step
    pub v: NVec2, // velocity
    pub prev_v: NVec2, // velocity at the start of the current step
    pub anchor: bool, // dominant mass, exempt from walls, fusion and drawing
}

impl Default for Body {
    fn default() -> Self {
        Self::inert()
    }
}

impl Body {
    /// New body at rest in its own history: `prev_*` start equal to the current values.
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            m,
            q: 0.0,
            x,
            prev_x: x,
            v,
            prev_v: v,
            anchor: false,
        }
    }

    /// Zero-mass placeholder at the origin, used to pad short initial-condition files.
    pub fn inert() -> Self {
        Self::new(0.0, NVec2::zeros(), NVec2::zeros())
    }

    pub fn with_charge(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn as_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn is_inert(&self) -> bool {
        self.m <= 0.0
    }

    /// Drawn on screen and eligible for walls/fusion.
    pub fn is_visible(&self) -> bool {
        !self.anchor && !self.is_inert()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered body collection, fixed length for a run
    pub t: f64, // simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Total momentum of every body that is not the anchor.
    pub fn momentum_without_anchor(&self) -> NVec2 {
        self.bodies
            .iter()
            .filter(|b| !b.anchor)
            .fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.anchor)
    }
}
