use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`: a ring of light bodies
/// inside the default viewport plus a heavy anchor far above it
pub fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n + 1);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 30.0, (i_f * 0.13).cos() * 15.0);
        let v = NVec2::new((i_f * 0.07).cos(), (i_f * 0.11).sin());
        bodies.push(Body::new(1.0, x, v).with_charge(1.0));
    }
    bodies.push(Body::new(100000.0, NVec2::new(0.0, 1000.0), NVec2::zeros()).as_anchor());

    System::new(bodies)
}

/// Headless engine: every optional term on, no pacing
fn bench_engine() -> Engine {
    Engine {
        magnetic: true,
        fusion: true,
        frame_delay_ms: 0,
    }
}

/// Mean wall time of one full step (forces, integrator, walls, fusion) in ms
pub fn time_step(n: usize, steps: usize) -> f64 {
    let mut scenario = Scenario::from_parts(bench_engine(), Parameters::default(), make_system(n));

    // Warm up
    scenario.step();

    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.step();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps.max(1) as f64
}

/// Time one step for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 20 } else { 3 };
        println!("{},{:.6}", n, time_step(n, steps));
    }
}
