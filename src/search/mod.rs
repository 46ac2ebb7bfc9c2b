pub mod alphabeta;
pub mod eval;

pub use alphabeta::{BestMove, SearchResult, Searcher};
pub use eval::{evaluate, LOSS_SCORE, WIN_SCORE};
