//! Command-line arguments and command dispatch.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ridgeway_core::loader::{self, DEFAULT_MAX_EXTENT};
use ridgeway_core::{Extent, HeightMap, LoadError, LoadLimits};
use ridgeway_gen::{GenConfig, HeightGen};
use ridgeway_paths::{SearchConfig, solve};

use crate::present;

/// Minimum-cost routes across elevation grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log search and loader details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the cheapest route from the top-left to the bottom-right cell
    Solve(SolveArgs),
    /// Write a random height map in the text input format
    Generate(GenerateArgs),
}

/// Height-map and route encodings.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// Whitespace-separated integers
    #[default]
    Text,
    /// JSON
    Json,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Height-map file
    pub input: PathBuf,

    /// Encoding of the input file
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub input_format: Format,

    /// Encoding of the route
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Largest accepted number of rows or columns
    #[arg(long, default_value_t = DEFAULT_MAX_EXTENT)]
    pub max_extent: u32,

    /// Queue the origin with the step cost, reproducing the totals of older
    /// tooling (one step cost higher than the true minimum)
    #[arg(long)]
    pub legacy_seed: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[arg(long)]
    pub rows: u32,

    #[arg(long)]
    pub cols: u32,

    #[arg(long, default_value_t = 1)]
    pub step_cost: u32,

    #[arg(long, default_value_t = 1)]
    pub height_coefficient: u32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_height: i32,

    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    pub max_height: i32,

    /// Number of random-walk ridges; 0 draws every height independently
    #[arg(long, default_value_t = 0)]
    pub hills: usize,

    /// Smoothing passes applied after raising ridges
    #[arg(long, default_value_t = 2)]
    pub smooth: usize,

    /// RNG seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Encoding of the generated map
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Execute `cli`, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve(args) => solve_cmd(&args, out),
        Command::Generate(args) => generate_cmd(&args, out),
    }
}

fn solve_cmd(args: &SolveArgs, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let limits = LoadLimits {
        max_extent: args.max_extent,
    };
    let map = read_map(args, &limits)?;
    let config = if args.legacy_seed {
        SearchConfig::legacy(&map)
    } else {
        SearchConfig::default()
    };

    let route = solve(&map, &config)?;
    log::info!(
        "route across {} grid: {} cells, cost {}",
        map.extent(),
        route.path.len(),
        route.cost
    );

    match args.format {
        Format::Text => present::write_text(out, &route)?,
        Format::Json => present::write_json(out, &route)?,
    }
    Ok(())
}

fn read_map(args: &SolveArgs, limits: &LoadLimits) -> Result<HeightMap, LoadError> {
    match args.input_format {
        Format::Text => loader::load(&args.input, limits),
        Format::Json => {
            let text = std::fs::read_to_string(&args.input)?;
            let map: HeightMap =
                serde_json::from_str(&text).map_err(|e| LoadError::Decode {
                    format: "JSON",
                    message: e.to_string(),
                })?;
            if map.rows() > limits.max_extent || map.cols() > limits.max_extent {
                return Err(LoadError::TooLarge {
                    extent: map.extent(),
                    max: limits.max_extent,
                });
            }
            Ok(map)
        }
    }
}

fn generate_cmd(args: &GenerateArgs, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("generating with seed {seed}");

    let config = GenConfig {
        extent: Extent::new(args.rows, args.cols),
        step_cost: args.step_cost,
        height_coefficient: args.height_coefficient,
        min_height: args.min_height,
        max_height: args.max_height,
    };
    let mut generator = HeightGen::new(config, StdRng::seed_from_u64(seed))?;
    let map = if args.hills == 0 {
        generator.uniform()
    } else {
        generator.hills(args.hills, args.smooth)
    };

    match args.format {
        Format::Text => out.write_all(map.to_text().as_bytes())?,
        Format::Json => {
            serde_json::to_writer(&mut *out, &map)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
