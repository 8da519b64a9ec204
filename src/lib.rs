//! ecotour-rs: client-side application core for a Jharkhand eco-tourism
//! portal
//!
//! This library holds everything a presentation layer needs short of
//! rendering: typed models for the backend's entities, an async HTTP
//! client for its `/api` surface, and the state machinery behind each
//! screen (view router, remote collections with stale-response guards,
//! the itinerary form gate, search, and the chat-session protocol).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ecotour_rs::{App, HttpTourismApi, Page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpTourismApi::from_env()?);
//!     let mut app = App::new(api);
//!
//!     app.start().await;
//!     app.open(Page::Destinations).await;
//!     for destination in app.visible_destinations() {
//!         println!("{} ({})", destination.name, destination.category);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod services;
pub mod types;

pub use crate::core::{
    App, ChatSession, FormError, FormPhase, ItineraryForm, LoadStatus, Page, PendingReply,
    RemoteCollection, SearchState, APOLOGY_REPLY,
};
pub use crate::error::{ClientError, Result};
pub use crate::services::{HttpTourismApi, TourismApi};
pub use crate::types::{
    BudgetTier, CategoryFilter, ChatMessage, Destination, DestinationCategory, Event,
    EventCategory, Guide, ItineraryPlan, ItineraryRequest, MessageOrigin, SearchResults,
    INTEREST_OPTIONS, MAX_RESULTS_PER_KIND,
};

#[cfg(feature = "cli")]
pub mod cli;
