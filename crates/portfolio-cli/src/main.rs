//! Portfolio CLI - the contact-form mail relay and tools for the site visuals.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::graph::GraphOptions;
use config::ServeConfig;
use portfolio_core::{EdgeStrategy, DEFAULT_PARTICLE_COUNT, DEFAULT_SPREAD, DEFAULT_THRESHOLD};

/// Portfolio backend and visuals.
///
/// Run `portfolio` or `portfolio serve` to start the mail relay.
#[derive(Parser, Debug)]
#[command(
    name = "portfolio",
    author,
    version,
    about = "Portfolio: contact-form mail relay and particle visuals",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the contact-form mail relay (default command).
    Serve {
        /// Port to listen on [default: 3001]
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Compute one frame's proximity graph and print a summary.
    Graph {
        /// Number of particles.
        #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
        particles: usize,

        /// Connection distance.
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f32,

        /// Edge length of the cube particles are scattered in.
        #[arg(long, default_value_t = DEFAULT_SPREAD)]
        spread: f32,

        /// Seed for a reproducible cloud.
        #[arg(long)]
        seed: Option<u64>,

        /// Use the spatial grid instead of the all-pairs scan.
        #[arg(long)]
        grid: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Open the visuals in a native window.
    #[cfg(feature = "native-viz")]
    Viz {
        /// Number of particles.
        #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
        particles: usize,

        /// Connection distance.
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f32,

        /// Seed for a reproducible cloud.
        #[arg(long)]
        seed: Option<u64>,

        /// Use the spatial grid instead of the all-pairs scan.
        #[arg(long)]
        grid: bool,
    },
}

fn strategy(grid: bool) -> EdgeStrategy {
    if grid {
        EdgeStrategy::Grid
    } else {
        EdgeStrategy::BruteForce
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the flags pick the level
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Default to serve if no command given
    let command = cli.command.unwrap_or(Commands::Serve { port: None });

    match command {
        Commands::Serve { port } => {
            let config = ServeConfig::load(port)?;
            commands::serve::execute(config).await?;
        }

        Commands::Graph {
            particles,
            threshold,
            spread,
            seed,
            grid,
            json,
        } => {
            let options = GraphOptions {
                particles,
                threshold,
                spread,
                seed,
                strategy: strategy(grid),
            };
            commands::graph::execute(&options, json)?;
        }

        #[cfg(feature = "native-viz")]
        Commands::Viz {
            particles,
            threshold,
            seed,
            grid,
        } => {
            let settings = portfolio_viz::VizSettings {
                particle_count: particles,
                threshold,
                seed,
                strategy: strategy(grid),
                ..Default::default()
            };
            commands::viz::execute(settings)?;
        }
    }

    Ok(())
}
