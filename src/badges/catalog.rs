//! Badge identifiers, display data and rarity.

use serde::{Deserialize, Serialize};

/// Badge identifier. Serialized with its exact display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeId {
    #[serde(rename = "Rising Star")]
    RisingStar,
    #[serde(rename = "Consistency King")]
    ConsistencyKing,
    #[serde(rename = "Iron Giant")]
    IronGiant,
    #[serde(rename = "Cardio King")]
    CardioKing,
    #[serde(rename = "Century Club")]
    CenturyClub,
    #[serde(rename = "Monthly Master")]
    MonthlyMaster,
    #[serde(rename = "Marathoner")]
    Marathoner,
    #[serde(rename = "Perfect Week")]
    PerfectWeek,
    #[serde(rename = "Phoenix Fire")]
    PhoenixFire,
    #[serde(rename = "AI Enthusiast")]
    AiEnthusiast,
    #[serde(rename = "Weekend Warrior")]
    WeekendWarrior,
    #[serde(rename = "Jack of All Trades")]
    JackOfAllTrades,
    #[serde(rename = "Strength Pro")]
    StrengthPro,
    #[serde(rename = "Cardio Champ")]
    CardioChamp,
    #[serde(rename = "Early Bird")]
    EarlyBird,
    #[serde(rename = "Night Owl")]
    NightOwl,
}

impl BadgeId {
    /// Every badge, in rule-table scan order.
    pub const ALL: [BadgeId; 16] = [
        BadgeId::RisingStar,
        BadgeId::ConsistencyKing,
        BadgeId::IronGiant,
        BadgeId::CardioKing,
        BadgeId::CenturyClub,
        BadgeId::MonthlyMaster,
        BadgeId::Marathoner,
        BadgeId::PerfectWeek,
        BadgeId::PhoenixFire,
        BadgeId::AiEnthusiast,
        BadgeId::WeekendWarrior,
        BadgeId::JackOfAllTrades,
        BadgeId::StrengthPro,
        BadgeId::CardioChamp,
        BadgeId::EarlyBird,
        BadgeId::NightOwl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeId::RisingStar => "Rising Star",
            BadgeId::ConsistencyKing => "Consistency King",
            BadgeId::IronGiant => "Iron Giant",
            BadgeId::CardioKing => "Cardio King",
            BadgeId::CenturyClub => "Century Club",
            BadgeId::MonthlyMaster => "Monthly Master",
            BadgeId::Marathoner => "Marathoner",
            BadgeId::PerfectWeek => "Perfect Week",
            BadgeId::PhoenixFire => "Phoenix Fire",
            BadgeId::AiEnthusiast => "AI Enthusiast",
            BadgeId::WeekendWarrior => "Weekend Warrior",
            BadgeId::JackOfAllTrades => "Jack of All Trades",
            BadgeId::StrengthPro => "Strength Pro",
            BadgeId::CardioChamp => "Cardio Champ",
            BadgeId::EarlyBird => "Early Bird",
            BadgeId::NightOwl => "Night Owl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|badge| badge.as_str() == s)
    }

    /// Human description shown on the achievements screen.
    pub fn description(&self) -> &'static str {
        match self {
            BadgeId::Marathoner => "Complete an endurance workout.",
            BadgeId::CenturyClub => "Complete 100 workouts.",
            BadgeId::ConsistencyKing => "Maintain a 7-day streak.",
            BadgeId::RisingStar => "Earn 1,000 points.",
            BadgeId::StrengthPro => "Master a strength workout.",
            BadgeId::CardioChamp => "Excel in a cardio challenge.",
            BadgeId::EarlyBird => "Workout before 8 AM.",
            BadgeId::NightOwl => "Workout after 8 PM.",
            BadgeId::WeekendWarrior => "Complete a workout on a Saturday or Sunday.",
            BadgeId::PhoenixFire => "Recover a lost streak.",
            BadgeId::MonthlyMaster => "Maintain a 30-day streak.",
            BadgeId::AiEnthusiast => "Generate 5 AI workout plans.",
            BadgeId::IronGiant => "Lift a cumulative 10,000kg.",
            BadgeId::CardioKing => "Cover a cumulative distance of a marathon (42km).",
            BadgeId::PerfectWeek => "Workout every day for a full week.",
            BadgeId::JackOfAllTrades => "Try workouts for all three goal types.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BadgeId::Marathoner => "🏃",
            BadgeId::CenturyClub => "💯",
            BadgeId::ConsistencyKing => "👑",
            BadgeId::RisingStar => "🌟",
            BadgeId::StrengthPro => "💪",
            BadgeId::CardioChamp => "❤️",
            BadgeId::EarlyBird => "🐦",
            BadgeId::NightOwl => "🦉",
            BadgeId::WeekendWarrior => "🎉",
            BadgeId::PhoenixFire => "🔥",
            BadgeId::MonthlyMaster => "🗓️",
            BadgeId::AiEnthusiast => "🤖",
            BadgeId::IronGiant => "🏋️",
            BadgeId::CardioKing => "👟",
            BadgeId::PerfectWeek => "✅",
            BadgeId::JackOfAllTrades => "🤸",
        }
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rarity tier, rarest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RarityTier {
    Legendary,
    Epic,
    Rare,
    Common,
}

/// Default display order, rarest first.
pub const BADGE_ORDER: [BadgeId; 16] = [
    // Legendary
    BadgeId::IronGiant,
    BadgeId::CardioKing,
    BadgeId::CenturyClub,
    BadgeId::MonthlyMaster,
    // Epic
    BadgeId::Marathoner,
    BadgeId::PerfectWeek,
    BadgeId::PhoenixFire,
    BadgeId::AiEnthusiast,
    // Rare
    BadgeId::ConsistencyKing,
    BadgeId::RisingStar,
    BadgeId::WeekendWarrior,
    BadgeId::JackOfAllTrades,
    // Common
    BadgeId::StrengthPro,
    BadgeId::CardioChamp,
    BadgeId::EarlyBird,
    BadgeId::NightOwl,
];

/// Badges per tier in the display order.
const TIER_SIZE: usize = 4;

/// Rarity ranking over badges. Lower rank is rarer.
///
/// Badges missing from the order rank after every listed badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityOrder {
    order: Vec<BadgeId>,
}

impl Default for RarityOrder {
    fn default() -> Self {
        Self {
            order: BADGE_ORDER.to_vec(),
        }
    }
}

impl RarityOrder {
    /// Build a custom order. Duplicates keep their first position.
    pub fn new(order: Vec<BadgeId>) -> Self {
        let mut deduped = Vec::with_capacity(order.len());
        for badge in order {
            if !deduped.contains(&badge) {
                deduped.push(badge);
            }
        }
        Self { order: deduped }
    }

    /// Position in the order, or `None` when unranked.
    pub fn position(&self, badge: BadgeId) -> Option<usize> {
        self.order.iter().position(|b| *b == badge)
    }

    /// Sort key: position, with unranked badges after all ranked ones.
    pub fn rank(&self, badge: BadgeId) -> usize {
        self.position(badge).unwrap_or(self.order.len())
    }

    /// Tier for a ranked badge, by groups of four.
    pub fn tier(&self, badge: BadgeId) -> Option<RarityTier> {
        match self.position(badge)? / TIER_SIZE {
            0 => Some(RarityTier::Legendary),
            1 => Some(RarityTier::Epic),
            2 => Some(RarityTier::Rare),
            _ => Some(RarityTier::Common),
        }
    }

    pub fn badges(&self) -> &[BadgeId] {
        &self.order
    }
}
