//! Perfectly inelastic merging of bodies that come too close
//!
//! Every unordered pair of non-anchor bodies is tested once per step, scanning
//! `i` then `j > i`. When a pair is closer than `fusion_radius`, the lower index
//! takes all the mass and the combined momentum; the higher index keeps its
//! slot with `m = 0` and stops being drawn.
//!
//! Bodies that were absorbed earlier in the same pass are not skipped. An
//! inert body that is still close to a massive one can therefore pick up that
//! body's mass when it is the lower index of a later pair.

use log::debug;

use super::params::Parameters;
use super::states::System;

/// A single merge performed by [`fuse_close_pairs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fusion {
    pub survivor: usize, // index that now carries the combined mass
    pub absorbed: usize, // index left with m = 0
}

/// Merge every pair of non-anchor bodies whose squared distance is below
/// `fusion_radius^2`. Returns the merges in the order they were applied.
pub fn fuse_close_pairs(sys: &mut System, params: &Parameters) -> Vec<Fusion> {
    let threshold2 = params.fusion_radius * params.fusion_radius;
    let n = sys.bodies.len();
    let mut fusions = Vec::new();

    for i in 0..n {
        if sys.bodies[i].anchor {
            continue;
        }
        for j in (i + 1)..n {
            if sys.bodies[j].anchor {
                continue;
            }

            let d = sys.bodies[j].x - sys.bodies[i].x;
            if d.dot(&d) >= threshold2 {
                continue;
            }

            let total = sys.bodies[i].m + sys.bodies[j].m;
            // two inert bodies: nothing to merge and p / m would be 0/0
            if total <= 0.0 {
                continue;
            }

            let p = sys.bodies[i].momentum() + sys.bodies[j].momentum();
            sys.bodies[i].m = total;
            sys.bodies[j].m = 0.0;
            sys.bodies[i].v = p / total;

            debug!("t = {:.3}: body {j} fused into body {i} (m = {total})", sys.t);
            fusions.push(Fusion { survivor: i, absorbed: j });
        }
    }

    fusions
}
