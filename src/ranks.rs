//! Static rank tables: competitive tier ids, ELO thresholds, regions.

/// Highest competitive tier id (Radiant).
pub const TOP_TIER: u8 = 27;

/// Second-highest tier id (Immortal 3), whose promotion threshold is dynamic.
pub const THRESHOLD_TIER: u8 = 26;

/// Static floor for the Radiant promotion threshold, in RR.
pub const RADIANT_BASE_THRESHOLD: i32 = 550;

/// Leaderboard position that defines the competitive Radiant cutoff.
pub const RADIANT_CUTOFF_POSITION: usize = 500;

pub const VALID_REGIONS: &[&str] = &["na", "eu", "ap", "kr", "latam", "br"];

/// Tier id → display name. Ids 1 and 2 are unused by the game and absent.
pub fn tier_name(tier: u8) -> Option<&'static str> {
    Some(match tier {
        0 => "Unranked",
        3 => "Iron 1",
        4 => "Iron 2",
        5 => "Iron 3",
        6 => "Bronze 1",
        7 => "Bronze 2",
        8 => "Bronze 3",
        9 => "Silver 1",
        10 => "Silver 2",
        11 => "Silver 3",
        12 => "Gold 1",
        13 => "Gold 2",
        14 => "Gold 3",
        15 => "Platinum 1",
        16 => "Platinum 2",
        17 => "Platinum 3",
        18 => "Diamond 1",
        19 => "Diamond 2",
        20 => "Diamond 3",
        21 => "Ascendant 1",
        22 => "Ascendant 2",
        23 => "Ascendant 3",
        24 => "Immortal 1",
        25 => "Immortal 2",
        26 => "Immortal 3",
        27 => "Radiant",
        _ => return None,
    })
}

/// Rank name → minimum ELO, ordered ascending.
pub const RANK_ELO_THRESHOLDS: &[(&str, i32)] = &[
    ("Iron 1", 0),
    ("Iron 2", 100),
    ("Iron 3", 200),
    ("Bronze 1", 300),
    ("Bronze 2", 400),
    ("Bronze 3", 500),
    ("Silver 1", 600),
    ("Silver 2", 700),
    ("Silver 3", 800),
    ("Gold 1", 900),
    ("Gold 2", 1000),
    ("Gold 3", 1100),
    ("Platinum 1", 1200),
    ("Platinum 2", 1300),
    ("Platinum 3", 1400),
    ("Diamond 1", 1500),
    ("Diamond 2", 1600),
    ("Diamond 3", 1700),
    ("Ascendant 1", 1800),
    ("Ascendant 2", 1900),
    ("Ascendant 3", 2000),
    ("Immortal 1", 2100),
    ("Immortal 2", 2200),
    ("Immortal 3", 2300),
    ("Radiant", 2650),
];

/// Case-insensitive lookup; returns the canonical name alongside the ELO floor.
pub fn elo_threshold(rank: &str) -> Option<(&'static str, i32)> {
    let wanted = rank.trim();
    RANK_ELO_THRESHOLDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .copied()
}

pub fn is_valid_region(region: &str) -> bool {
    VALID_REGIONS.iter().any(|r| r.eq_ignore_ascii_case(region))
}
