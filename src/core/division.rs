//! Korean labels for league and division names.

const DIVISION_NAMES_KO: &[(&str, &str)] = &[
    ("AL East", "AL 동부"),
    ("AL Central", "AL 중부"),
    ("AL West", "AL 서부"),
    ("NL East", "NL 동부"),
    ("NL Central", "NL 중부"),
    ("NL West", "NL 서부"),
    ("American League East", "아메리칸리그 동부"),
    ("American League Central", "아메리칸리그 중부"),
    ("American League West", "아메리칸리그 서부"),
    ("National League East", "내셔널리그 동부"),
    ("National League Central", "내셔널리그 중부"),
    ("National League West", "내셔널리그 서부"),
];

/// Localize an upstream division group name.
///
/// Exact names map directly. Otherwise the name is matched loosely on
/// league and compass point; anything unrecognised comes back unchanged.
///
/// ```rust
/// use mlb_ko::core::division::localize_division;
///
/// assert_eq!(localize_division("NL West"), "NL 서부");
/// assert_eq!(
///     localize_division("American League American League West"),
///     "아메리칸리그 서부지구"
/// );
/// assert_eq!(localize_division("Cactus League"), "Cactus League");
/// ```
pub fn localize_division(group_name: &str) -> String {
    if group_name.is_empty() {
        return String::new();
    }

    if let Some((_, ko)) = DIVISION_NAMES_KO.iter().find(|(en, _)| *en == group_name) {
        return ko.to_string();
    }

    let s = group_name.to_lowercase();
    let league = if s.contains("american") || s.contains(" al ") {
        Some("아메리칸리그")
    } else if s.contains("national") || s.contains(" nl ") {
        Some("내셔널리그")
    } else {
        None
    };
    let direction = if s.contains("east") {
        Some("동부지구")
    } else if s.contains("central") {
        Some("중부지구")
    } else if s.contains("west") {
        Some("서부지구")
    } else {
        None
    };

    match (league, direction) {
        (Some(league), Some(direction)) => format!("{league} {direction}"),
        _ => group_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names() {
        assert_eq!(localize_division("AL East"), "AL 동부");
        assert_eq!(
            localize_division("National League Central"),
            "내셔널리그 중부"
        );
    }

    #[test]
    fn test_loose_match() {
        assert_eq!(
            localize_division("National League National League East"),
            "내셔널리그 동부지구"
        );
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(localize_division(""), "");
        assert_eq!(localize_division("American League"), "American League");
    }
}
