//! Team leaderboard picks.

use std::collections::HashMap;

use crate::model::{LeaderCandidate, LeaderCategory, LeaderEntry};

/// Batting categories shown on the team page, in display order.
pub const BATTING_CATEGORIES: &[&str] = &["homeRuns", "rbi", "avg", "ops"];

/// Pitching categories shown on the team page, in display order.
pub const PITCHING_CATEGORIES: &[&str] = &["era", "strikeOuts", "wins", "saves"];

/// Korean column label for a leader category key.
pub fn category_label(key: &str) -> &'static str {
    match key {
        "homeRuns" => "홈런",
        "rbi" => "타점",
        "avg" => "타율",
        "ops" => "OPS",
        "era" => "ERA",
        "strikeOuts" => "탈삼진",
        "wins" => "승",
        "saves" => "세이브",
        _ => "기타",
    }
}

/// Top candidate for each key in `keys`, in `keys` order.
///
/// Categories missing from `categories` or without candidates are skipped.
/// When upstream repeats a category the last occurrence is used.
pub fn pick_leaders(categories: &[LeaderCategory], keys: &[&str]) -> Vec<LeaderEntry> {
    let by_key: HashMap<&str, &[LeaderCandidate]> = categories
        .iter()
        .map(|c| (c.key.as_str(), c.candidates.as_slice()))
        .collect();

    keys.iter()
        .filter_map(|&key| {
            let top = by_key.get(key)?.first()?;
            let value = top.value.clone().unwrap_or_else(|| "-".to_string());
            Some(LeaderEntry {
                category: key.to_string(),
                label: category_label(key),
                player: top.player.clone(),
                numeric: value.trim().parse::<f64>().ok(),
                value,
            })
        })
        .collect()
}
