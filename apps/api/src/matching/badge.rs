use serde::Serialize;

/// Machine-readable badge tier, stable across label or styling changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Excellent,
    Great,
    Good,
    Fair,
    Low,
}

/// Display classification of a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tier: BadgeTier,
    pub icon: &'static str,
    pub color: &'static str,
}

const BADGES: &[(u32, Badge)] = &[
    (
        90,
        Badge {
            label: "Excellent Match",
            tier: BadgeTier::Excellent,
            icon: "🎯",
            color: "success",
        },
    ),
    (
        70,
        Badge {
            label: "Great Match",
            tier: BadgeTier::Great,
            icon: "⭐",
            color: "primary",
        },
    ),
    (
        50,
        Badge {
            label: "Good Match",
            tier: BadgeTier::Good,
            icon: "👍",
            color: "info",
        },
    ),
    (
        30,
        Badge {
            label: "Fair Match",
            tier: BadgeTier::Fair,
            icon: "✓",
            color: "warning",
        },
    ),
];

const LOW_BADGE: Badge = Badge {
    label: "Low Match",
    tier: BadgeTier::Low,
    icon: "−",
    color: "secondary",
};

/// Classifies a percentage; thresholds are checked top-down, first hit wins.
pub fn badge_for(percentage: u32) -> Badge {
    BADGES
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, badge)| *badge)
        .unwrap_or(LOW_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_both_sides() {
        let cases = [
            (100, BadgeTier::Excellent),
            (90, BadgeTier::Excellent),
            (89, BadgeTier::Great),
            (70, BadgeTier::Great),
            (69, BadgeTier::Good),
            (50, BadgeTier::Good),
            (49, BadgeTier::Fair),
            (30, BadgeTier::Fair),
            (29, BadgeTier::Low),
            (0, BadgeTier::Low),
        ];
        for (percentage, tier) in cases {
            assert_eq!(badge_for(percentage).tier, tier, "percentage {percentage}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(badge_for(95).label, "Excellent Match");
        assert_eq!(badge_for(75).label, "Great Match");
        assert_eq!(badge_for(55).label, "Good Match");
        assert_eq!(badge_for(35).label, "Fair Match");
        assert_eq!(badge_for(5).label, "Low Match");
    }

    #[test]
    fn test_tier_serializes_as_identifier() {
        let json = serde_json::to_value(badge_for(72)).unwrap();
        assert_eq!(json["tier"], "great");
        assert_eq!(json["label"], "Great Match");
        assert_eq!(json["color"], "primary");
    }
}
