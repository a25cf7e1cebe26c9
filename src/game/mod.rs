//! Game data module
//!
//! The unified per-game record and the boundary merge that builds it from
//! raw market sources.

mod merge;
mod record;

pub use merge::{consensus_lines, merge_game_data};
pub use record::GameRecord;
