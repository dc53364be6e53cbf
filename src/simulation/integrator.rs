//! Fixed-step time integrator for the sandbox
//!
//! Semi-implicit Euler driven by `AccelSet` and `Parameters`. The step also
//! records the single-step lookback (`prev_v`, `prev_x`) the wall bounce needs

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system by one step
///
/// 1. every body: `prev_v = v`, then `v += dt * a`
/// 2. every body, after *all* velocities are done: `prev_x = x`, then `x += dt * prev_v`
/// 3. `t += dt`
///
/// Positions move with the velocity from the start of the step, so the
/// acceleration computed now only shows up in position on the next step.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    let dt = params.dt;

    // a_n from x_n, v_n
    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut acc);

    // Kick
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.prev_v = b.v;
        b.v += dt * *a;
    }

    // Drift with the velocity saved above
    for b in sys.bodies.iter_mut() {
        b.prev_x = b.x;
        b.x += dt * b.prev_v;
    }

    sys.t += dt;
}
