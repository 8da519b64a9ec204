pub mod app;
pub mod chat;
pub mod itinerary;
pub mod remote;

pub use app::{App, Page, SearchState};
pub use chat::{ChatSession, PendingReply, APOLOGY_REPLY};
pub use itinerary::{FormError, FormPhase, ItineraryForm};
pub use remote::{LoadStatus, LoadToken, RemoteCollection};
