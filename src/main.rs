use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lorentz_lab::relativity::{KinematicFactors, ScaleMode};
use lorentz_lab::{Config, metrics, tui};

/// Lorentz Lab - length contraction and time dilation, live
#[derive(Parser)]
#[command(name = "lorentz-lab", about = "Interactive special relativity in the terminal")]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Options {
    /// Rest length of the ruler in meters
    #[arg(long, global = true, default_value_t = 100.0)]
    proper_length: f64,
    /// Proper time used in reports, seconds
    #[arg(long, global = true, default_value_t = 10.0)]
    proper_time: f64,
    /// Initial velocity scale
    #[arg(long, global = true, value_enum, default_value_t = ScaleMode::Linear)]
    scale: ScaleMode,
    /// Minimum milliseconds between clock ticks
    #[arg(long, global = true, default_value_t = 16)]
    frame_ms: u64,
    /// Control change per arrow key press
    #[arg(long, global = true, default_value_t = 0.01)]
    step: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Run interactive TUI simulation
    Tui {
        /// Write the session's velocity log to realtime.csv and realtime.png on exit
        #[arg(long)]
        export: bool,
    },
    /// Sweep the velocity control and export to CSV
    Metrics {
        /// Number of control positions to sample
        #[arg(long, default_value_t = 100)]
        samples: usize,
        #[arg(long, default_value = "metrics.csv")]
        out: PathBuf,
        /// Also render a PNG plot to this path
        #[arg(long)]
        plot: Option<PathBuf>,
    },
}

impl From<&Options> for Config {
    fn from(o: &Options) -> Self {
        Config {
            proper_length: o.proper_length,
            proper_time: o.proper_time,
            scale: o.scale,
            frame_interval: Duration::from_millis(o.frame_ms),
            step: o.step,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from(&cli.options);
    config.validate()?;
    log::debug!("{config:?}");

    match cli.command {
        Some(Commands::Tui { export }) => tui::start(&config, export)?,
        Some(Commands::Metrics { samples, out, plot }) => {
            run_metrics(&config, samples, &out, plot.as_deref())?
        }
        None => tui::start(&config, false)?, // default
    }

    Ok(())
}

fn run_metrics(
    config: &Config,
    samples: usize,
    out: &std::path::Path,
    plot: Option<&std::path::Path>,
) -> Result<()> {
    let points = metrics::sweep(config.scale, samples, config.proper_time, config.proper_length);
    metrics::export_csv(out, &points)?;
    if let Some(plot) = plot {
        metrics::plot_results(plot, &points)?;
    }

    let (lo, hi) = config.scale.range();
    println!(
        "{} samples over {:.4}c..{:.4}c (γ {:.3}..{:.3}) written to {}",
        points.len(),
        lo,
        hi,
        KinematicFactors::compute(lo).gamma,
        KinematicFactors::compute(hi).gamma,
        out.display()
    );
    Ok(())
}
