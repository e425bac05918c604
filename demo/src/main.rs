//! Terminal demo: plan a seeded enemy route and print every chunk.
//!
//! Run: cargo run -p hexroute-demo -- --seed 42 --chunks 5

mod render;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;
use env_logger::Env;
use hexroute_gen::{GenConfig, plan_route};
use rand::SeedableRng;
use rand::rngs::StdRng;

use render::{Glyph, Row};

#[derive(Parser, Debug)]
#[command(name = "hexroute-demo")]
#[command(about = "Plan an enemy route across chunked hex maps")]
struct Args {
    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of chunks the route crosses
    #[arg(short, long, default_value = "4")]
    chunks: usize,

    /// Tiles per chunk edge (overrides the config file)
    #[arg(short, long)]
    dimension: Option<i32>,

    /// JSON generation config; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print plain text without colors
    #[arg(long)]
    no_color: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str::<GenConfig>(&fs::read_to_string(path)?)?,
        None => GenConfig::default(),
    };
    if let Some(d) = args.dimension {
        config.dimension = d;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}, {} chunks of {1}x{1}", args.chunks, config.dimension);

    let mut rng = StdRng::seed_from_u64(seed);
    let route = plan_route(args.chunks.saturating_sub(1), &config, &mut rng)?;

    for segment in route.segments() {
        println!("chunk {} ({} tiles)", segment.chunk, segment.tiles.len());
        let rows = render::chunk_rows(segment, config.dimension, config.layout);
        if args.no_color {
            print!("{}", render::to_text(&rows));
        } else {
            print_colored(&rows);
        }
        println!();
    }

    println!("route: {} tiles", route.len());
    let tiles: Vec<String> = route.tiles().map(|t| t.to_string()).collect();
    println!("{}", tiles.join(" "));
    Ok(())
}

fn print_colored(rows: &[Row]) {
    for row in rows {
        let mut line = String::new();
        if row.indent {
            line.push(' ');
        }
        for &g in &row.glyphs {
            let c = g.as_char();
            let styled = match g {
                Glyph::Ground => c.dark_grey(),
                Glyph::Path => c.yellow(),
                Glyph::Entry => c.green().bold(),
                Glyph::Exit => c.red().bold(),
            };
            line.push_str(&format!("{styled} "));
        }
        println!("{}", line.trim_end());
    }
}
