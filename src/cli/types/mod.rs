//! Type-safe wrappers and enums for MLB stats data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;

pub use filters::{RoleFilter, SortKey};
pub use ids::{GamePk, PlayerId, TeamId, VenueId};
pub use position::{Role, StatGroup};
pub use time::{GameDate, Season};
