pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod lookahead;
pub mod minimax;
pub mod random;
pub mod search;
pub mod trace;
#[cfg(test)]
pub(crate) mod tree_board;
pub mod weighted;

pub use alpha_beta::PruneRule;
pub use config::AIConfig;
pub use lookahead::LookaheadAI;
pub use random::RandomAI;
pub use search::{legal_moves, next_mover, run, SearchStats, Searcher};
pub use weighted::WeightedRandomAI;
