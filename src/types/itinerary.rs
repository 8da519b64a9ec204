use serde::{Deserialize, Serialize};

/// Interest options the trip planner offers, in display order.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "Eco-tourism",
    "Cultural Heritage",
    "Adventure Sports",
    "Wildlife",
    "Tribal Villages",
    "Waterfalls",
    "Handicrafts",
    "Festivals",
];

/// Trip length bounds accepted by the planner.
pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 10;

/// Budget tier for an itinerary request.
///
/// The full label doubles as display string and transmitted value; the
/// backend expects it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetTier {
    Budget,
    #[default]
    Medium,
    Premium,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::Medium, BudgetTier::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget (₹5000-10000)",
            BudgetTier::Medium => "Medium (₹10000-25000)",
            BudgetTier::Premium => "Premium (₹25000+)",
        }
    }
}

impl Serialize for BudgetTier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for BudgetTier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        BudgetTier::ALL
            .into_iter()
            .find(|tier| tier.label() == label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown budget tier: {label}")))
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST /itinerary/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub user_name: String,
    pub days: u8,
    pub interests: Vec<String>,
    pub budget: BudgetTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

/// Structured travel plan the backend generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub days: u8,
    /// Destination names to visit, in order.
    pub destinations: Vec<String>,
    pub activities: Vec<String>,
    pub accommodation_suggestions: Vec<String>,
    pub transport_suggestions: Vec<String>,
    /// Display string, e.g. "₹18,000 - ₹22,000".
    pub total_cost_estimate: String,
}
