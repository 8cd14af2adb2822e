//! MLB stats in Korean
//!
//! A library and CLI over the public MLB stats API, with Korean team names,
//! division labels and result badges.
//!
//! ## Features
//!
//! - **Roster merge**: every active club's roster fetched concurrently,
//!   tolerating clubs that fail to load
//! - **Stat mode**: season stats attached per role, then filtered and
//!   sorted by AVG, OPS, ERA, K/9 and friends
//! - **Team, game and standings views**: leaders, schedules with W/L
//!   badges, linescores, play logs and highlights
//! - **Venues**: home ballparks with an optional encyclopedia summary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_ko::{
//!     commands::{common::CommandContext, players::{load_players, PlayersParams}},
//!     ClientConfig, KoreanTeamLookup, MlbClient, RoleFilter, SortKey,
//! };
//!
//! # async fn example() -> mlb_ko::Result<()> {
//! let client = MlbClient::new(ClientConfig::from_env())?;
//! let lookup = KoreanTeamLookup::new();
//! let ctx = CommandContext::new(&client, &lookup);
//!
//! let view = load_players(
//!     ctx,
//!     &PlayersParams {
//!         role: RoleFilter::BattersOnly,
//!         sort: SortKey::Ops,
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! println!("{} batters", view.rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Upstream base URLs can be pointed elsewhere (e.g. a local mock):
//! ```bash
//! export MLB_STATS_BASE_URL=http://localhost:9000/api/v1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod logging;
pub mod mlb;
pub mod model;

// Re-export commonly used types
pub use cli::types::{GameDate, GamePk, PlayerId, Role, RoleFilter, Season, SortKey, TeamId, VenueId};
pub use crate::core::{ClientConfig, KoreanTeamLookup, TeamLookup};
pub use error::{MlbError, Result};
pub use mlb::MlbClient;
