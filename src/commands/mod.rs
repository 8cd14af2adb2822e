//! Command implementations for the mlb-ko CLI

pub mod common;
pub mod games;
pub mod player;
pub mod players;
pub mod standings;
pub mod teams;
pub mod venues;
