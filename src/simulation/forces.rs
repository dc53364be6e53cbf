//! Force / acceleration contributors for the sandbox
//!
//! Defines the acceleration trait, direct Newtonian gravity and the
//! Lorentz term for charges moving in a uniform out-of-plane field

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms (gravity, magnetic field, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - bodies are only read, never written
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity, direct n^2 sum over every pair including the anchor
///
/// Two bodies at the same position divide by zero and the NaN spreads from
/// there on. Set `eps2 > 0` to soften the singularity instead.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 = exact
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let d2 = r.dot(&r) + self.eps2;
                let inv_r = d2.sqrt().recip();
                let coef = self.G * inv_r * inv_r * inv_r;

                // inert bodies pull with zero mass, skip them as sources
                if !bj.is_inert() {
                    out[i] += coef * bj.m * r;
                }
                if !bi.is_inert() {
                    out[j] -= coef * bi.m * r;
                }
            }
        }
    }
}

/// Lorentz force from a uniform field `b` along z acting on each body's charge
///
/// `a = q/m * (v x B)`, which in the plane is `(-q vy B / m, q vx B / m)`.
/// Uses `v` as it stands before the integrator touches it.
pub struct LorentzForce {
    pub b: f64, // field strength (z component)
}

impl Acceleration for LorentzForce {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        for (a, body) in out.iter_mut().zip(sys.bodies.iter()) {
            // zero mass has no inertia to divide by
            if body.is_inert() {
                continue;
            }
            let k = body.q * self.b / body.m;
            a.x += -k * body.v.y;
            a.y += k * body.v.x;
        }
    }
}
