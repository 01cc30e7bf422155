//! Pinkboard CLI - Heart particle board, offline or in real time

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{play, render, simulate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pinkboard")]
#[command(about = "Animated heart of particles with floating messages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render frames to numbered PNG files
    Render {
        /// Number of frames to render
        #[arg(long, default_value = "120")]
        frames: u32,

        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Surface width in pixels (overrides the config)
        #[arg(long)]
        width: Option<u32>,

        /// Surface height in pixels (overrides the config)
        #[arg(long)]
        height: Option<u32>,

        /// Directory the frames are written to
        #[arg(long, default_value = "frames")]
        output_dir: PathBuf,

        /// Photo composited inside the heart
        #[arg(long)]
        photo: Option<PathBuf>,

        /// TrueType font for the floating messages
        #[arg(long)]
        font: Option<PathBuf>,

        /// Random seed (defaults to the clock)
        #[arg(long)]
        seed: Option<u32>,

        /// Path to config TOML
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the scene headless and report counts per simulated second
    Simulate {
        /// Simulated duration in seconds
        #[arg(long, default_value = "10")]
        seconds: f64,

        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Random seed (defaults to the clock)
        #[arg(long)]
        seed: Option<u32>,

        /// Path to config TOML
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run in real time; Enter toggles music, q quits
    Play {
        /// Stop after this many seconds
        #[arg(long)]
        seconds: Option<f64>,

        /// Target frames per second
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Background track (overrides the config)
        #[arg(long)]
        music: Option<PathBuf>,

        /// Photo composited inside the heart
        #[arg(long)]
        photo: Option<PathBuf>,

        /// TrueType font for the floating messages
        #[arg(long)]
        font: Option<PathBuf>,

        /// Path to config TOML
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the last frame to this PNG on exit
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            frames,
            fps,
            width,
            height,
            output_dir,
            photo,
            font,
            seed,
            config,
        } => render::run(render::RenderArgs {
            frames,
            fps,
            width,
            height,
            output_dir,
            photo,
            font,
            seed,
            config,
        }),
        Commands::Simulate {
            seconds,
            fps,
            seed,
            config,
            json,
        } => simulate::run(simulate::SimulateArgs {
            seconds,
            fps,
            seed,
            config,
            json,
        }),
        Commands::Play {
            seconds,
            fps,
            music,
            photo,
            font,
            config,
            snapshot,
        } => play::run(play::PlayArgs {
            seconds,
            fps,
            music,
            photo,
            font,
            config,
            snapshot,
        }),
    }
}
