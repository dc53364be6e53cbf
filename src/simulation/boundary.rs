//! Wall bounce for the visible rectangle
//!
//! The viewport is centred on the origin and spans `width x height` cells.
//! A body that crossed an edge during the last step (inside at `prev_x`,
//! outside at `x`) is mirrored back in and loses speed on that axis
//! according to the restitution coefficient `cor`.
//!
//! Only the edge crossed *this* step reflects: a body that was already outside
//! at the start of the step stays where it is. The four edges are checked
//! one after the other without any corner special-casing.

use super::params::Parameters;
use super::states::{Body, System};

/// Reflect every non-anchor body that crossed a wall this step.
///
/// Returns the number of bounces applied (a corner hit counts twice).
pub fn reflect_walls(sys: &mut System, params: &Parameters) -> usize {
    let mut bounces = 0;
    for body in sys.bodies.iter_mut().filter(|b| !b.anchor) {
        bounces += reflect_body(body, params);
    }
    bounces
}

/// Apply the y-upper, y-lower, x-upper and x-lower checks to one body, in that order.
pub fn reflect_body(body: &mut Body, params: &Parameters) -> usize {
    let cor = params.cor;
    let (width, height) = (params.width as f64, params.height as f64);

    let mut bounces = 0;
    bounces += reflect_upper(&mut body.x.y, body.prev_x.y, &mut body.v.y, height, cor) as usize;
    bounces += reflect_lower(&mut body.x.y, body.prev_x.y, &mut body.v.y, height, cor) as usize;
    bounces += reflect_upper(&mut body.x.x, body.prev_x.x, &mut body.v.x, width, cor) as usize;
    bounces += reflect_lower(&mut body.x.x, body.prev_x.x, &mut body.v.x, width, cor) as usize;
    bounces
}

/// Edge at `+extent / 2`. The overshoot past the wall comes back scaled by `cor`.
fn reflect_upper(pos: &mut f64, prev: f64, vel: &mut f64, extent: f64, cor: f64) -> bool {
    let half = extent / 2.0;
    if *pos > half && prev < half {
        *pos = (1.0 + cor) / 2.0 * extent - cor * *pos;
        *vel = -cor * *vel;
        return true;
    }
    false
}

/// Edge at `-extent / 2`.
fn reflect_lower(pos: &mut f64, prev: f64, vel: &mut f64, extent: f64, cor: f64) -> bool {
    let half = extent / 2.0;
    if *pos < -half && -half < prev {
        *pos = -(1.0 + cor) / 2.0 * extent - cor * *pos;
        *vel = -cor * *vel;
        return true;
    }
    false
}
