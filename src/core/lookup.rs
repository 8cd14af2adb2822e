//! Team display decorations: Korean names, brand colours and logos.
//!
//! The tables are static, but consumers only see them through the
//! [`TeamLookup`] trait. `main` builds one [`KoreanTeamLookup`] and hands a
//! reference to every command, so nothing reads a global table.

use std::collections::HashMap;

use crate::{cli::types::TeamId, model::TeamRef};

/// Colour used for teams missing from the table.
pub const FALLBACK_COLOR: &str = "#4b5563";

const LOGO_BASE_URL: &str = "https://www.mlbstatic.com/team-logos/team-cap-on-dark";

const TEAM_NAMES_KO: &[(u32, &str)] = &[
    (108, "LA 에인절스"),
    (109, "애리조나 다이아몬드백스"),
    (110, "볼티모어 오리올스"),
    (111, "보스턴 레드삭스"),
    (112, "시카고 컵스"),
    (113, "신시내티 레즈"),
    (114, "클리블랜드 가디언즈"),
    (115, "콜로라도 로키스"),
    (116, "디트로이트 타이거스"),
    (117, "휴스턴 애스트로스"),
    (118, "캔자스시티 로열스"),
    (119, "LA 다저스"),
    (120, "워싱턴 내셔널스"),
    (121, "뉴욕 메츠"),
    (133, "애슬레틱스"),
    (134, "피츠버그 파이리츠"),
    (135, "샌디에이고 파드레스"),
    (136, "시애틀 매리너스"),
    (137, "샌프란시스코 자이언츠"),
    (138, "세인트루이스 카디널스"),
    (139, "탬파베이 레이스"),
    (140, "텍사스 레인저스"),
    (141, "토론토 블루제이스"),
    (142, "미네소타 트윈스"),
    (143, "필라델피아 필리스"),
    (144, "애틀랜타 브레이브스"),
    (145, "시카고 화이트삭스"),
    (146, "마이애미 말린스"),
    (147, "뉴욕 양키스"),
    (158, "밀워키 브루어스"),
];

const TEAM_COLORS: &[(u32, &str)] = &[
    (108, "#BA0021"),
    (109, "#A71930"),
    (110, "#DF4601"),
    (111, "#BD3039"),
    (112, "#0E3386"),
    (113, "#C6011F"),
    (114, "#0C2340"),
    (115, "#333366"),
    (116, "#0C2340"),
    (117, "#002D62"),
    (118, "#004687"),
    (119, "#005A9C"),
    (120, "#AB0003"),
    (121, "#002D72"),
    (133, "#003831"),
    (134, "#FDB827"),
    (135, "#002D62"),
    (136, "#005C5C"),
    (137, "#FD5A1E"),
    (138, "#C41E3A"),
    (139, "#092C5C"),
    (140, "#003278"),
    (141, "#134A8E"),
    (142, "#002B5C"),
    (143, "#E81828"),
    (144, "#CE1141"),
    (145, "#27251F"),
    (146, "#00A3E0"),
    (147, "#003087"),
    (158, "#12284B"),
];

/// Read-only team decoration service.
pub trait TeamLookup {
    /// Localized name, if the team is known.
    fn name_for(&self, id: TeamId) -> Option<&str>;

    /// Brand colour as a `#RRGGBB` string.
    fn color_for(&self, id: TeamId) -> &str;

    fn logo_url_for(&self, id: TeamId) -> String;

    /// Localized name, falling back to the upstream name.
    fn display_name(&self, team: &TeamRef) -> String {
        self.name_for(team.id)
            .map(str::to_string)
            .unwrap_or_else(|| team.name.clone())
    }
}

/// Static Korean tables for the 30 MLB clubs.
#[derive(Debug, Clone)]
pub struct KoreanTeamLookup {
    names: HashMap<TeamId, &'static str>,
    colors: HashMap<TeamId, &'static str>,
}

impl KoreanTeamLookup {
    pub fn new() -> Self {
        Self {
            names: TEAM_NAMES_KO
                .iter()
                .map(|(id, name)| (TeamId::new(*id), *name))
                .collect(),
            colors: TEAM_COLORS
                .iter()
                .map(|(id, color)| (TeamId::new(*id), *color))
                .collect(),
        }
    }
}

impl Default for KoreanTeamLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamLookup for KoreanTeamLookup {
    fn name_for(&self, id: TeamId) -> Option<&str> {
        self.names.get(&id).copied()
    }

    fn color_for(&self, id: TeamId) -> &str {
        self.colors.get(&id).copied().unwrap_or(FALLBACK_COLOR)
    }

    fn logo_url_for(&self, id: TeamId) -> String {
        format!("{LOGO_BASE_URL}/{id}.svg")
    }
}
