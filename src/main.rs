use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use netbot::board::Color;
use netbot::config::EngineConfig;
use netbot::protocol::TextEngine;
use netbot::selfplay::{generate_games_with, tally, write_records, Opponent, SelfPlayParams};

#[derive(Parser, Debug)]
#[command(author, version, about = "Network board game player", long_about = None)]
struct Args {
    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search depth (overrides the configuration file)
    #[arg(long, global = true)]
    depth: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Speak the line protocol on stdin/stdout
    Play {
        /// Color the engine plays
        #[arg(long, default_value = "black")]
        color: String,
    },
    /// Generate self-play games and write them as JSON lines
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(long, value_enum, default_value_t = Side::Engine)]
        white: Side,
        #[arg(long, value_enum, default_value_t = Side::Engine)]
        black: Side,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value = "out/games.jsonl")]
        out: PathBuf,
        /// Number of worker threads (0 = rayon default)
        #[arg(long, default_value_t = 0)]
        threads: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    Engine,
    Random,
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut cfg = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.depth { cfg.depth = d; }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    match args.command {
        Command::Play { color } => {
            let color: Color = color.parse()?;
            info!("playing {} at depth {}", color, cfg.depth);
            TextEngine::new(color, cfg).run_loop()?;
        }
        Command::Selfplay { games, max_plies, white, black, seed, out, threads } => {
            let side = |s: Side| match s {
                Side::Engine => Opponent::Engine { depth: cfg.depth },
                Side::Random => Opponent::Random,
            };
            let params = SelfPlayParams { games, max_plies, white: side(white), black: side(black), seed };
            if threads > 0 {
                rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().context("configuring thread pool")?;
            }
            let pb = ProgressBar::new(games as u64);
            pb.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")
                    .context("progress template")?,
            );
            let t0 = Instant::now();
            let records = generate_games_with(&params, |_| pb.inc(1));
            pb.finish_and_clear();
            let t = tally(&records);
            eprintln!(
                "{} games in {:.1}s: black {} white {} unfinished {}",
                records.len(), t0.elapsed().as_secs_f64(), t.black, t.white, t.unfinished
            );
            write_records(&records, &out).with_context(|| format!("writing {}", out.display()))?;
            eprintln!("Wrote {}", out.display());
        }
    }
    Ok(())
}
