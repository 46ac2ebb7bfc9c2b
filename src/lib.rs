//! netbot: an automatic player for the "Network" connection board game.
//!
//! The board model and its legality rules live in [`board`], network
//! detection in [`network`], and the alpha-beta search in [`search`].
//! [`player::MachinePlayer`] ties them together behind the
//! `choose_move` / `opponent_move` / `force_move` interface.
pub mod board;
pub mod config;
pub mod error;
pub mod network;
pub mod perft;
pub mod player;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Color, Coord, Move};
pub use config::EngineConfig;
pub use error::{NetError, Result};
pub use player::MachinePlayer;
