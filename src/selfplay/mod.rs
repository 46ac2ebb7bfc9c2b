//! Self-play game generation.
//!
//! Each side is either the search engine or a seeded random mover. Games are
//! independent, so they run on the rayon pool; each game derives its own RNG
//! from the base seed and its index, which keeps the output reproducible
//! regardless of thread scheduling.

use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::network::has_network;
use crate::player::MachinePlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Opponent {
    Engine { depth: u32 },
    Random,
}

#[derive(Debug, Clone)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub white: Opponent,
    pub black: Opponent,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        let engine = Opponent::Engine { depth: EngineConfig::default().depth };
        Self { games: 10, max_plies: 200, white: engine, black: engine, seed: 42 }
    }
}

/// One finished (or ply-capped) game. `winner` is `None` when the ply cap hit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub winner: Option<Color>,
    pub plies: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub black: usize,
    pub white: usize,
    pub unfinished: usize,
}

pub fn tally(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for g in games {
        match g.winner {
            Some(Color::Black) => t.black += 1,
            Some(Color::White) => t.white += 1,
            None => t.unfinished += 1,
        }
    }
    t
}

enum Side {
    Engine(MachinePlayer),
    Random { board: Board, rng: SmallRng },
}

impl Side {
    fn new(kind: Opponent, color: Color, seed: u64) -> Self {
        match kind {
            Opponent::Engine { depth } => Side::Engine(MachinePlayer::new(color, depth)),
            Opponent::Random => Side::Random { board: Board::new(color), rng: SmallRng::seed_from_u64(seed) },
        }
    }

    fn choose(&mut self) -> Move {
        match self {
            Side::Engine(p) => p.choose_move(),
            Side::Random { board, rng } => {
                let color = board.my_color();
                let moves = board.available_moves(color);
                if moves.is_empty() { return Move::Quit; }
                let m = moves[rng.gen_range(0..moves.len())];
                board.apply_move(&m, color);
                m
            }
        }
    }

    fn observe(&mut self, m: Move) -> bool {
        match self {
            Side::Engine(p) => p.opponent_move(m),
            Side::Random { board, .. } => {
                let opp = board.opp_color();
                board.apply_move(&m, opp)
            }
        }
    }
}

fn game_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Plays one game, White first.
pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let seed = game_seed(params.seed, index);
    let mut white = Side::new(params.white, Color::White, seed);
    let mut black = Side::new(params.black, Color::Black, seed.rotate_left(17));
    let mut referee = Board::new(Color::White);
    let mut record = GameRecord { moves: Vec::new(), winner: None, plies: 0 };
    let mut mover = Color::White;

    while record.plies < params.max_plies {
        let (me, them) = match mover {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };
        let m = me.choose();
        if m == Move::Quit {
            debug!("game {}: {} has no move", index, mover);
            record.winner = Some(mover.other());
            break;
        }
        if !referee.apply_move(&m, mover) || !them.observe(m) {
            warn!("game {}: {} played illegal {}", index, mover, m);
            record.winner = Some(mover.other());
            break;
        }
        record.moves.push(m.to_string());
        record.plies += 1;
        if has_network(&referee, mover) {
            record.winner = Some(mover);
            break;
        }
        if has_network(&referee, mover.other()) {
            record.winner = Some(mover.other());
            break;
        }
        mover = mover.other();
    }
    debug!("game {}: {} plies, winner {:?}", index, record.plies, record.winner);
    record
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with(params, |_| {})
}

/// Like `generate_games`, calling `on_done` as each game finishes.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_done: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync + Send,
{
    info!("generating {} games (white={:?}, black={:?}, seed={})", params.games, params.white, params.black, params.seed);
    (0..params.games)
        .into_par_iter()
        .map(|gi| {
            let g = play_game(params, gi);
            on_done(&g);
            g
        })
        .collect()
}

/// Writes one JSON object per line, creating parent directories as needed.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_seeds_differ_per_index() {
        assert_ne!(game_seed(7, 0), game_seed(7, 1));
        assert_eq!(game_seed(7, 3), game_seed(7, 3));
    }

    #[test]
    fn random_games_respect_ply_cap() {
        let params = SelfPlayParams { games: 2, max_plies: 12, white: Opponent::Random, black: Opponent::Random, seed: 5 };
        for g in generate_games(&params) {
            assert!(g.plies <= 12);
            assert_eq!(g.moves.len(), g.plies);
        }
    }

    #[test]
    fn tally_counts_outcomes() {
        let rec = |winner| GameRecord { moves: Vec::new(), winner, plies: 0 };
        let t = tally(&[rec(Some(Color::Black)), rec(None), rec(Some(Color::Black))]);
        assert_eq!(t, Tally { black: 2, white: 0, unfinished: 1 });
    }
}
