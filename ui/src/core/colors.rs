//! Rank, trend, and character lookup tables. All lookups are total: unknown
//! keys resolve to an explicit fallback rather than failing the render.

/// Fill used when a rank has no entry in the color table.
pub const FALLBACK_RANK_COLOR: &str = "#3182ce";

/// Bar color for a non-negative win-rate change.
pub const INCREASE_COLOR: &str = "hsl(142.1 76.2% 36.3%)";

/// Bar color for a negative win-rate change.
pub const DECREASE_COLOR: &str = "hsl(0 84.2% 60.2%)";

/// Ranked-mode ladder, lowest to highest, with the chart color per rank.
const RANK_COLORS: &[(&str, &str)] = &[
    ("Beginner", "#9ca3af"),
    ("1st Dan", "#8f9bb0"),
    ("2nd Dan", "#7e90ad"),
    ("Fighter", "#57b3f1"),
    ("Strategist", "#4aa3e8"),
    ("Combatant", "#3d93de"),
    ("Brawler", "#4ade80"),
    ("Ranger", "#3fcf70"),
    ("Cavalry", "#34c45f"),
    ("Warrior", "#facc15"),
    ("Assailant", "#f3bc12"),
    ("Dominator", "#ecac0f"),
    ("Vanquisher", "#fb923c"),
    ("Destroyer", "#f97f2d"),
    ("Eliminator", "#f76c1e"),
    ("Garyu", "#f87171"),
    ("Shinryu", "#f35e5e"),
    ("Tenryu", "#ee4b4b"),
    ("Mighty Ruler", "#c084fc"),
    ("Flame Ruler", "#b26ef8"),
    ("Battle Ruler", "#a458f4"),
    ("Fujin", "#818cf8"),
    ("Raijin", "#6d79f3"),
    ("Kishin", "#5965ee"),
    ("Bushin", "#4552e9"),
    ("Tekken King", "#38bdf8"),
    ("Tekken Emperor", "#22a7ea"),
    ("Tekken God", "#fbbf24"),
    ("Tekken God Supreme", "#f5a80f"),
    ("God of Destruction", "#e7cf54"),
];

/// Roster table mapping backend character ids to display names. Gaps in the
/// id space are expected; `character_name` covers them.
const CHARACTERS: &[(u32, &str)] = &[
    (0, "Paul"),
    (1, "Law"),
    (2, "King"),
    (3, "Yoshimitsu"),
    (4, "Hwoarang"),
    (5, "Xiaoyu"),
    (6, "Jin"),
    (7, "Bryan"),
    (8, "Kazuya"),
    (9, "Steve"),
    (10, "Jack-8"),
    (11, "Asuka"),
    (12, "Devil Jin"),
    (13, "Feng"),
    (14, "Lili"),
    (15, "Dragunov"),
    (16, "Leo"),
    (17, "Lars"),
    (18, "Alisa"),
    (19, "Claudio"),
    (20, "Shaheen"),
    (21, "Nina"),
    (22, "Lee"),
    (23, "Kuma"),
    (24, "Panda"),
    (25, "Zafina"),
    (26, "Leroy"),
    (28, "Jun"),
    (29, "Reina"),
    (30, "Azucena"),
    (31, "Victor"),
    (32, "Raven"),
    (33, "Eddy"),
    (35, "Lidia"),
    (36, "Heihachi"),
    (38, "Clive"),
    (39, "Anna"),
];

/// Chart fill for a rank label, falling back for ranks outside the table.
pub fn rank_color(rank: &str) -> &'static str {
    RANK_COLORS
        .iter()
        .find(|(name, _)| *name == rank)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_RANK_COLOR)
}

/// Bar color for a signed win-rate change. Two fixed colors, not data-driven.
pub fn trend_color(change: f64) -> &'static str {
    if change >= 0.0 {
        INCREASE_COLOR
    } else {
        DECREASE_COLOR
    }
}

/// Display name for a character id, with a synthetic label for unknown ids.
pub fn character_name(id: u32) -> String {
    CHARACTERS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Character {id}"))
}

/// Full roster for character selectors, in table order.
pub fn roster() -> &'static [(u32, &'static str)] {
    CHARACTERS
}
