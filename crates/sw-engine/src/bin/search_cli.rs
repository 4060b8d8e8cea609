use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use sw_engine::{Objective, Point, RunConfig, SearchConfig, Topology};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sw-search",
    about = "Minimize a benchmark objective on an integer lattice by compass search"
)]
struct Cli {
    /// JSON run configuration; when given, the search flags below are ignored
    #[arg(long)]
    config: Option<PathBuf>,

    /// Neighbor layout
    #[arg(long, value_enum, default_value_t = TopologyChoice::Square)]
    topology: TopologyChoice,

    /// Maximum number of step-halving runs
    #[arg(long, default_value_t = 8)]
    runs: u32,

    /// Signed run count: negative selects diagonal neighbors on the square grid
    #[arg(long, allow_negative_numbers = true, conflicts_with = "runs")]
    legacy_runs: Option<i64>,

    /// Starting x coordinate
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x0: i64,

    /// Starting y coordinate
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y0: i64,

    /// Initial step along x
    #[arg(long, default_value_t = 16, allow_negative_numbers = true)]
    dx: i64,

    /// Initial step along y
    #[arg(long, default_value_t = 16, allow_negative_numbers = true)]
    dy: i64,

    /// Benchmark objective (use --list-objectives to see available options)
    #[arg(long, default_value = "sphere")]
    objective: String,

    /// Sphere target x, in real units
    #[arg(long, allow_negative_numbers = true)]
    target_x: Option<f64>,

    /// Sphere target y, in real units
    #[arg(long, allow_negative_numbers = true)]
    target_y: Option<f64>,

    /// Real-valued size of one lattice unit
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Log every accepted move
    #[arg(long)]
    progress: bool,

    /// List all available objectives and exit
    #[arg(long)]
    list_objectives: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TopologyChoice {
    Square,
    Diagonal,
    Triangular,
}

impl From<TopologyChoice> for Topology {
    fn from(choice: TopologyChoice) -> Self {
        match choice {
            TopologyChoice::Square => Topology::square(),
            TopologyChoice::Diagonal => Topology::square_diagonal(),
            TopologyChoice::Triangular => Topology::Triangular,
        }
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_run_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    if let Some(path) = &cli.config {
        return RunConfig::from_file(path)
            .with_context(|| format!("failed to load run configuration {}", path.display()));
    }

    let search = match cli.legacy_runs {
        Some(runs) => SearchConfig::from_signed_runs(
            runs,
            matches!(cli.topology, TopologyChoice::Triangular),
        )
        .context("invalid --legacy-runs")?,
        None => SearchConfig::new(cli.topology.into()).with_runs(cli.runs),
    }
    .with_start(cli.x0, cli.y0)
    .with_step(cli.dx, cli.dy);

    let mut objective = Objective::from_name(&cli.objective)?;
    if let Objective::ShiftedSphere { target_x, target_y } = &mut objective {
        *target_x = cli.target_x.unwrap_or(*target_x);
        *target_y = cli.target_y.unwrap_or(*target_y);
    }

    let config = RunConfig::new(search, objective).with_scale(cli.scale);
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    enable_tracing();
    let cli = Cli::parse();

    if cli.list_objectives {
        for name in Objective::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let run = build_run_config(&cli)?;
    info!(
        x0 = run.search.start.x,
        y0 = run.search.start.y,
        dx = run.search.step.dx,
        dy = run.search.step.dy,
        scale = run.scale,
        "search configuration"
    );

    let mut log_move = |point: Point, value: f64| {
        info!(x = point.x, y = point.y, value, "new best");
    };
    let outcome = if cli.progress {
        run.execute(Some(&mut log_move))
    } else {
        run.execute(None)
    };

    info!(
        evaluations = outcome.evaluations,
        runs_completed = outcome.runs_completed,
        "search completed"
    );
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
