//! Static advisory content for the sustainability hub.
//!
//! This page carries no backend collection; the tips and reward ladder are
//! fixed editorial content exposed as plain data so any surface can render
//! them.

/// A short eco-friendly travel advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcoTip {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const ECO_TRAVEL_TIPS: [EcoTip; 4] = [
    EcoTip {
        title: "Use Reusable Water Bottles",
        detail: "Reduce plastic waste by carrying refillable bottles",
    },
    EcoTip {
        title: "Choose Local Transportation",
        detail: "Use public transport or hire local guides",
    },
    EcoTip {
        title: "Support Local Communities",
        detail: "Buy from local artisans and stay in homestays",
    },
    EcoTip {
        title: "Respect Wildlife",
        detail: "Maintain distance and don't disturb natural habitats",
    },
];

/// One rung of the eco-points reward ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTier {
    pub name: &'static str,
    pub points: u32,
    pub perk: &'static str,
}

/// Reward tiers from highest to lowest threshold, matching display order.
pub const REWARD_TIERS: [RewardTier; 3] = [
    RewardTier {
        name: "Eco Warrior",
        points: 500,
        perk: "Unlock exclusive eco-lodge discounts",
    },
    RewardTier {
        name: "Nature Guardian",
        points: 300,
        perk: "Free guided nature walks",
    },
    RewardTier {
        name: "Green Explorer",
        points: 150,
        perk: "Priority booking for eco-tours",
    },
];

/// The tier a traveller with `points` has reached, if any.
pub fn reached_tier(points: u32) -> Option<&'static RewardTier> {
    REWARD_TIERS.iter().find(|tier| points >= tier.points)
}
