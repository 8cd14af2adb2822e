//! Core utilities shared across the client and views
//!
//! - `config`: upstream base URLs and their env overrides
//! - `division`: Korean division labels
//! - `lookup`: injected team name/colour/logo service

pub mod config;
pub mod division;
pub mod lookup;

// Re-export commonly used items for convenience
pub use config::ClientConfig;
pub use division::localize_division;
pub use lookup::{KoreanTeamLookup, TeamLookup};
