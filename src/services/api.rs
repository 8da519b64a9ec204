use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    Destination, Event, Guide, ItineraryPlan, ItineraryRequest, SearchResults,
};

/// Backend API surface.
///
/// The application layer is generic over this trait so it can run against
/// the HTTP client in production and an in-memory fake in tests.
#[async_trait]
pub trait TourismApi: Send + Sync {
    async fn destinations(&self) -> Result<Vec<Destination>>;

    async fn guides(&self) -> Result<Vec<Guide>>;

    async fn events(&self) -> Result<Vec<Event>>;

    async fn generate_itinerary(&self, request: &ItineraryRequest) -> Result<ItineraryPlan>;

    async fn search(&self, query: &str) -> Result<SearchResults>;

    /// Send one chat message; returns the assistant's reply text.
    async fn chat(&self, session_id: &str, message: &str) -> Result<String>;

    /// Ask the backend to seed sample data. Side effect only.
    async fn seed_data(&self) -> Result<()>;
}
