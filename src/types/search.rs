use serde::{Deserialize, Serialize};

use super::catalog::{Destination, Event};

/// Display cap applied independently to each result kind.
pub const MAX_RESULTS_PER_KIND: usize = 6;

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Search results partitioned by entity kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl SearchResults {
    /// Truncate each kind to the display cap, keeping the first items.
    pub fn truncated(mut self) -> Self {
        self.destinations.truncate(MAX_RESULTS_PER_KIND);
        self.events.truncate(MAX_RESULTS_PER_KIND);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty() && self.events.is_empty()
    }
}
