//! Terminal driver: steps a `Scenario`, hands every frame to a `Renderer`
//! and waits on a `Clock` between frames.
//!
//! Both collaborators are traits so the same loop runs headless in tests and
//! benchmarks (`NullRenderer`, `NoPacing`) and live in a terminal
//! (`TerminalRenderer`, `SleepClock`).

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{cursor, queue};
use log::{info, warn};

use crate::simulation::scenario::Scenario;
use crate::visualization::ascii::render_frame;

/// Something that shows one frame of a scenario.
pub trait Renderer {
    fn render(&mut self, scenario: &Scenario) -> io::Result<()>;
}

/// Real-time pacing between frames.
pub trait Clock {
    fn pace(&mut self, delay: Duration);
}

/// Draws frames on top of each other by moving the cursor back up before
/// every frame but the first.
pub struct TerminalRenderer<W: Write> {
    out: W,
    lines_drawn: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines_drawn: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, scenario: &Scenario) -> io::Result<()> {
        let frame = render_frame(&scenario.system, &scenario.parameters);
        if self.lines_drawn > 0 {
            queue!(self.out, cursor::MoveUp(self.lines_drawn))?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.lines_drawn = u16::try_from(frame.lines().count()).unwrap_or(u16::MAX);
        Ok(())
    }
}

/// Renders nothing, counts frames.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _scenario: &Scenario) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SleepClock;

impl Clock for SleepClock {
    fn pace(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Never waits.
#[derive(Debug, Default)]
pub struct NoPacing;

impl Clock for NoPacing {
    fn pace(&mut self, _delay: Duration) {}
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub t: f64,
    pub bounces: usize,
    pub fusions: usize,
}

/// Step until `t > t_end`, rendering after every step.
pub fn run_terminal(
    scenario: &mut Scenario,
    renderer: &mut dyn Renderer,
    clock: &mut dyn Clock,
) -> io::Result<RunSummary> {
    info!(
        "run_terminal: {} bodies, dt = {}, t_end = {}",
        scenario.system.bodies.len(),
        scenario.parameters.dt,
        scenario.parameters.t_end
    );

    let delay = Duration::from_millis(scenario.engine.frame_delay_ms);
    let mut summary = RunSummary::default();
    let mut reported_non_finite = false;

    while !scenario.finished() {
        let report = scenario.step();
        summary.steps += 1;
        summary.bounces += report.bounces;
        summary.fusions += report.fusions.len();

        if !reported_non_finite {
            if let Some(i) = scenario.system.bodies.iter().position(|b| !b.is_finite()) {
                warn!("body {i} left finite range at t = {} (coincident positions?)", scenario.system.t);
                reported_non_finite = true;
            }
        }

        renderer.render(scenario)?;
        if !delay.is_zero() {
            clock.pace(delay);
        }
    }

    summary.t = scenario.system.t;
    info!(
        "run_terminal: finished after {} steps, {} bounces, {} fusions",
        summary.steps, summary.bounces, summary.fusions
    );
    Ok(summary)
}
