//! The matchup algorithm
//!
//! [`matching`] holds the individual steps; [`pipeline`] wires them into a
//! full run over every configured level.

pub mod matching;
pub mod pipeline;

pub use pipeline::{MatchupInputs, MatchupReport, run_matchup};
