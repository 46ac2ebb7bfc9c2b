use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use netbot::board::{Board, Color};
use netbot::perft::perft;

#[derive(clap::Parser, Debug)]
#[command(name = "netbot-perft", about = "Move-tree node counter for the Network rules")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Color to move first
    #[arg(long, default_value = "black")]
    color: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let color: Color = args.color.parse()?;
    let depth = args.depth;
    let base = Board::new(color);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth <= 1 {
            perft(&base, color, depth)
        } else {
            base.available_moves(color).par_iter().map(|m| {
                let mut b = base.clone();
                b.apply_move(m, color);
                perft(&b, color.other(), depth - 1)
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
