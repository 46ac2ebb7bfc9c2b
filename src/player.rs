//! The automatic player: owns one board for the whole game and picks moves
//! for its own color.

use log::{debug, warn};

use crate::board::{Board, Cell, Color, Move};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::network::find_network;
use crate::search::{SearchResult, Searcher, WIN_SCORE};

pub struct MachinePlayer {
    color: Color,
    config: EngineConfig,
    board: Board,
    searcher: Searcher,
}

impl MachinePlayer {
    pub fn new(color: Color, depth: u32) -> Self {
        Self::with_config(color, EngineConfig::with_depth(depth))
    }

    pub fn with_config(color: Color, config: EngineConfig) -> Self {
        Self { color, config, board: Board::new(color), searcher: Searcher::new() }
    }

    /// Builds a player from a wire color (0 black, 1 white); anything else is rejected.
    pub fn from_wire(color: i32, depth: u32) -> Result<Self> {
        Ok(Self::new(Color::try_from(color)?, depth))
    }

    pub fn color(&self) -> Color { self.color }
    pub fn config(&self) -> &EngineConfig { &self.config }
    pub fn board(&self) -> &Board { &self.board }

    pub fn set_depth(&mut self, depth: u32) { self.config.depth = depth; }

    /// Nodes visited by the most recent search.
    pub fn last_nodes(&self) -> u64 { self.searcher.nodes() }

    fn search(&mut self, max_depth: u32) -> SearchResult {
        self.searcher.search_depth(&self.board, self.color, max_depth)
    }

    /// Picks a move, records it on the internal board and returns it.
    /// Returns `Move::Quit` when no legal move exists.
    pub fn choose_move(&mut self) -> Move {
        let depth = self.config.depth;
        if self.board.my_steps() >= self.config.win_probe_min_steps && depth != 1 {
            let probe = self.search(1);
            if let (WIN_SCORE, Some(m)) = (probe.best.score, probe.best.mv) {
                debug!("{}: quick win with {}", self.color, m);
                self.commit(m);
                return m;
            }
        }
        let res = self.search(depth);
        match res.best.mv {
            Some(m) => {
                debug!("{}: playing {} (score {}, {} nodes)", self.color, m, res.best.score, res.nodes);
                self.commit(m);
                m
            }
            None => {
                debug!("{}: no move available", self.color);
                Move::Quit
            }
        }
    }

    fn commit(&mut self, m: Move) {
        if !self.force_move(m) {
            warn!("{}: search produced illegal move {}", self.color, m);
        }
    }

    /// Records `m` as the opponent's move. Illegal moves return false and
    /// leave the board unchanged.
    pub fn opponent_move(&mut self, m: Move) -> bool {
        if m == Move::Quit { return false; }
        self.board.apply_move(&m, self.color.other())
    }

    /// Records `m` as this player's own move, e.g. to set up a position.
    pub fn force_move(&mut self, m: Move) -> bool {
        if m == Move::Quit { return false; }
        self.board.apply_move(&m, self.color)
    }

    pub fn network(&self, color: Color) -> Option<Vec<Cell>> {
        find_network(&self.board, color)
    }
}
