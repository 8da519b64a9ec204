pub mod catalog;
pub mod chat;
pub mod content;
pub mod itinerary;
pub mod search;

pub use catalog::{
    CategoryFilter, Destination, DestinationCategory, Event, EventCategory, Guide,
};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, MessageOrigin};
pub use itinerary::{BudgetTier, ItineraryPlan, ItineraryRequest, INTEREST_OPTIONS};
pub use search::{SearchRequest, SearchResults, MAX_RESULTS_PER_KIND};
