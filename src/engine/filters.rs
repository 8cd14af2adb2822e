//! Role and name filtering for the merged roster.

use crate::{cli::types::RoleFilter, model::Player};

#[cfg(test)]
mod tests;

/// Keep players matching both the role filter and the name query.
///
/// The name query is trimmed and matched case-insensitively as a substring
/// of the full name; a blank query matches everyone. The input is left
/// untouched.
pub fn filter_players(players: &[Player], role: RoleFilter, query: &str) -> Vec<Player> {
    let needle = query.trim().to_lowercase();
    players
        .iter()
        .filter(|p| matches_role(p, role))
        .filter(|p| matches_name(p, &needle))
        .cloned()
        .collect()
}

pub fn matches_role(player: &Player, role: RoleFilter) -> bool {
    player.role.matches(role)
}

/// `needle` must already be trimmed and lower-cased.
pub fn matches_name(player: &Player, needle: &str) -> bool {
    needle.is_empty() || player.full_name.to_lowercase().contains(needle)
}
