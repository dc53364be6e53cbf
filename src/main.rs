use bouncesim::{load_initial_conditions, ScenarioConfig, Scenario};
use bouncesim::{run_terminal, render_frame, bench_step_curve};
use bouncesim::{NoPacing, NullRenderer, SleepClock, TerminalRenderer};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Point masses bouncing around a terminal window")]
struct Args {
    /// Number of bodies to simulate; the last one is the anchor
    #[arg(required_unless_present = "bench")]
    object_count: Option<usize>,

    /// Initial conditions: a header line, then `mass x y vx vy` per body
    initial_conditions: Option<PathBuf>,

    /// Scenario YAML (engine, parameters, bodies); looked up in `scenarios/` if not found as given
    #[arg(short, long)]
    scenario: Option<String>,

    /// No pacing and no live drawing, only the final frame is printed
    #[arg(long)]
    headless: bool,

    /// Override the pause between frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override the stop time
    #[arg(long)]
    t_end: Option<f64>,

    /// Time one step for growing body counts and print CSV
    #[arg(long)]
    bench: bool,
}

fn resolve_scenario_path(name: &str) -> PathBuf {
    let given = Path::new(name);
    if given.exists() {
        return given.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.scenario {
        Some(name) => {
            let path = resolve_scenario_path(name);
            info!("loading scenario {}", path.display());
            ScenarioConfig::load(&path)?
        }
        None => ScenarioConfig::magnetic_preset(),
    };

    if let Some(path) = &args.initial_conditions {
        cfg.bodies = load_initial_conditions(path)
            .with_context(|| format!("loading initial conditions from {}", path.display()))?;
        info!("{} bodies read from {}", cfg.bodies.len(), path.display());
    }
    if let Some(ms) = args.delay_ms {
        cfg.engine.frame_delay_ms = ms;
    }
    if let Some(t_end) = args.t_end {
        cfg.parameters.t_end = t_end;
    }
    if args.headless {
        cfg.engine.frame_delay_ms = 0;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.bench {
        bench_step_curve();
        return Ok(());
    }

    let object_count = args.object_count.context("missing object count")?;
    let cfg = load_scenario(&args)?;
    let mut scenario = Scenario::build_scenario(cfg, object_count).context("building scenario")?;

    if args.headless {
        let summary = run_terminal(&mut scenario, &mut NullRenderer::default(), &mut NoPacing)?;
        print!("{}", render_frame(&scenario.system, &scenario.parameters));
        info!("{summary:?}");
    } else {
        let mut renderer = TerminalRenderer::new(io::stdout().lock());
        run_terminal(&mut scenario, &mut renderer, &mut SleepClock)?;
    }

    Ok(())
}
