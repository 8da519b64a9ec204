use serde::{Deserialize, Serialize};

/// Category tag attached to each destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Eco,
    Cultural,
    Adventure,
    Festivals,
}

impl DestinationCategory {
    /// All categories, in the order the filter bar shows them.
    pub const ALL: [DestinationCategory; 4] = [
        DestinationCategory::Eco,
        DestinationCategory::Cultural,
        DestinationCategory::Adventure,
        DestinationCategory::Festivals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationCategory::Eco => "eco",
            DestinationCategory::Cultural => "cultural",
            DestinationCategory::Adventure => "adventure",
            DestinationCategory::Festivals => "festivals",
        }
    }
}

impl std::fmt::Display for DestinationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place travellers can visit. Backend-owned; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub category: DestinationCategory,
    pub location: String,
    pub description: String,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub best_time_to_visit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
    /// Short sustainable-behavior advisories shown on the destination card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_tips: Option<Vec<String>>,
}

/// Category filter the destinations view applies client-side.
///
/// Filtering is pure and synchronous: it derives a view from the last
/// fetched collection and never triggers a new fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DestinationCategory),
}

impl CategoryFilter {
    /// The fixed tag row: `all` followed by each category.
    pub fn tags() -> Vec<CategoryFilter> {
        let mut tags = vec![CategoryFilter::All];
        tags.extend(DestinationCategory::ALL.iter().map(|c| CategoryFilter::Only(*c)));
        tags
    }

    pub fn matches(&self, destination: &Destination) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => destination.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Festival,
    Fair,
    Other,
}

/// A festival, fair, or other cultural event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: EventCategory,
    pub location: String,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    pub registration_required: bool,
}

/// A local guide listed on the community page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub location: String,
    pub specialization: String,
    pub description: String,
    pub rating: f64,
    pub reviews_count: u32,
    pub price_per_day: String,
    /// Languages the guide speaks, in listing order.
    pub languages: Vec<String>,
}
