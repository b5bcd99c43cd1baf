//! Level threshold table
//!
//! Defines the cumulative point thresholds, level numbers, and display
//! titles used for level-up detection and progress reporting.

/// One entry of the threshold table
#[derive(Debug, Clone)]
pub struct LevelTier {
    pub level: u32,
    pub points_required: u32,
    pub title: &'static str,
}

/// All level tiers (must be sorted by level; points strictly increasing)
pub static TIERS: &[LevelTier] = &[
    LevelTier {
        level: 1,
        points_required: 0,
        title: "Newcomer",
    },
    LevelTier {
        level: 2,
        points_required: 100,
        title: "Explorer",
    },
    LevelTier {
        level: 3,
        points_required: 500,
        title: "Contributor",
    },
    LevelTier {
        level: 4,
        points_required: 1000,
        title: "Rising Star",
    },
    LevelTier {
        level: 5,
        points_required: 2500,
        title: "Mentor",
    },
    LevelTier {
        level: 6,
        points_required: 5000,
        title: "Champion",
    },
    LevelTier {
        level: 7,
        points_required: 10000,
        title: "Legend",
    },
];

impl LevelTier {
    /// The highest tier whose threshold is covered by the given point total.
    ///
    /// A single large award can cross several thresholds at once; the ledger
    /// lands on the highest tier it now qualifies for, not the next one up.
    pub fn for_points(points: u32) -> &'static LevelTier {
        TIERS
            .iter()
            .rev()
            .find(|t| points >= t.points_required)
            .unwrap_or(&TIERS[0])
    }

    /// Look up a tier by its level number
    pub fn for_level(level: u32) -> Option<&'static LevelTier> {
        TIERS.iter().find(|t| t.level == level)
    }

    /// The tier that follows the given level (None at the top of the table)
    pub fn next_after(level: u32) -> Option<&'static LevelTier> {
        Self::for_level(level + 1)
    }

    /// Get max level
    pub fn max_level() -> u32 {
        TIERS.last().map(|t| t.level).unwrap_or(1)
    }
}

/// Progress toward the next tier as a whole percentage (0-100).
///
/// Computed as `floor((points - current) / (next - current) * 100)` and
/// pinned to 100 once there is no next tier to reach.
pub fn progress_percent(points: u32) -> u8 {
    let current = LevelTier::for_points(points);
    match LevelTier::next_after(current.level) {
        Some(next) => {
            let span = next.points_required - current.points_required;
            let into = points - current.points_required;
            // span is nonzero because thresholds are strictly increasing
            ((into as u64 * 100) / span as u64) as u8
        }
        None => 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_points() {
        assert_eq!(LevelTier::for_points(0).level, 1);
        assert_eq!(LevelTier::for_points(99).level, 1);
        assert_eq!(LevelTier::for_points(100).level, 2);
        assert_eq!(LevelTier::for_points(750).level, 3);
        assert_eq!(LevelTier::for_points(1000).level, 4);
        assert_eq!(LevelTier::for_points(10000).level, 7);
        assert_eq!(LevelTier::for_points(250_000).level, 7); // Beyond max
    }

    #[test]
    fn test_table_strictly_increasing() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].level < pair[1].level);
            assert!(pair[0].points_required < pair[1].points_required);
        }
    }

    #[test]
    fn test_next_after() {
        assert_eq!(LevelTier::next_after(1).map(|t| t.points_required), Some(100));
        assert_eq!(LevelTier::next_after(3).map(|t| t.points_required), Some(1000));
        assert!(LevelTier::next_after(LevelTier::max_level()).is_none());
    }

    #[test]
    fn test_progress_percent() {
        // 750 sits halfway between Contributor (500) and Rising Star (1000)
        assert_eq!(progress_percent(750), 50);
        // Floor, never round up
        assert_eq!(progress_percent(999), 99);
        assert_eq!(progress_percent(0), 0);
    }

    #[test]
    fn test_progress_pinned_at_max_level() {
        assert_eq!(progress_percent(10000), 100);
        assert_eq!(progress_percent(999_999), 100);
    }
}
