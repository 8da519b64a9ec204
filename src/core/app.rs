use std::sync::Arc;

use tracing::{error, info};

use crate::core::chat::ChatSession;
use crate::core::itinerary::{FormError, ItineraryForm};
use crate::core::remote::RemoteCollection;
use crate::services::TourismApi;
use crate::types::{
    CategoryFilter, Destination, Event, Guide, SearchResults,
};

/// Mutually-exclusive top-level screens. No history stack, no URL sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Destinations,
    Itinerary,
    Community,
    Events,
    Sustainability,
    SearchResults,
}

/// Lifted search state: one free-text query, results partitioned by kind.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    results: Option<SearchResults>,
}

impl SearchState {
    /// Trimmed query, or `None` when the search is a no-op.
    pub fn prepared_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    fn apply(&mut self, results: SearchResults) {
        self.results = Some(results.truncated());
    }
}

/// Application state shared across views, plus the async actions that
/// mutate it.
///
/// One writer at a time by construction: every mutation goes through
/// `&mut self`, and network outcomes are applied against generation tokens
/// so stale responses never overwrite fresher state. Fetch failures are
/// independent per page and never cascade.
pub struct App<A: TourismApi> {
    api: Arc<A>,
    page: Page,
    pub destinations: RemoteCollection<Destination>,
    pub destination_filter: CategoryFilter,
    pub events: RemoteCollection<Event>,
    pub guides: RemoteCollection<Guide>,
    pub itinerary: ItineraryForm,
    pub search: SearchState,
    chat: Option<ChatSession>,
}

impl<A: TourismApi> App<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            page: Page::Home,
            destinations: RemoteCollection::new(),
            destination_filter: CategoryFilter::All,
            events: RemoteCollection::new(),
            guides: RemoteCollection::new(),
            itinerary: ItineraryForm::new(),
            search: SearchState::default(),
            chat: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Fire-and-forget seed request issued once on application start.
    pub async fn start(&self) {
        match self.api.seed_data().await {
            Ok(()) => info!("sample data seeded"),
            Err(err) => error!(%err, "seeding sample data failed"),
        }
    }

    /// Switch pages, fetching the page's collection on first display.
    pub async fn open(&mut self, page: Page) {
        self.page = page;
        match page {
            Page::Destinations if !self.destinations.is_loaded() => {
                self.refresh_destinations().await;
            }
            Page::Events if !self.events.is_loaded() => self.refresh_events().await,
            Page::Community if !self.guides.is_loaded() => self.refresh_guides().await,
            _ => {}
        }
    }

    pub async fn refresh_destinations(&mut self) {
        let token = self.destinations.begin_load();
        match self.api.destinations().await {
            Ok(items) => {
                self.destinations.resolve(token, items);
            }
            Err(err) => {
                error!(%err, "fetching destinations failed");
                self.destinations.resolve_failed(token, err.to_string());
            }
        }
    }

    pub async fn refresh_events(&mut self) {
        let token = self.events.begin_load();
        match self.api.events().await {
            Ok(items) => {
                self.events.resolve(token, items);
            }
            Err(err) => {
                error!(%err, "fetching events failed");
                self.events.resolve_failed(token, err.to_string());
            }
        }
    }

    pub async fn refresh_guides(&mut self) {
        let token = self.guides.begin_load();
        match self.api.guides().await {
            Ok(items) => {
                self.guides.resolve(token, items);
            }
            Err(err) => {
                error!(%err, "fetching guides failed");
                self.guides.resolve_failed(token, err.to_string());
            }
        }
    }

    /// Destinations visible under the current category filter. Empty when
    /// the filter matches nothing; callers render an explicit "no results"
    /// message rather than an empty grid.
    pub fn visible_destinations(&self) -> Vec<&Destination> {
        self.destinations
            .filtered_by(|destination| self.destination_filter.matches(destination))
    }

    pub fn set_destination_filter(&mut self, filter: CategoryFilter) {
        self.destination_filter = filter;
    }

    /// Gate, submit, and apply the itinerary request. A gate violation is
    /// returned to the caller to surface as a user-facing alert; a
    /// transport failure surfaces the same way and leaves the form editing.
    pub async fn generate_itinerary(&mut self) -> std::result::Result<(), FormError> {
        let request = self.itinerary.try_submit()?;
        match self.api.generate_itinerary(&request).await {
            Ok(plan) => {
                self.itinerary.submit_succeeded(plan);
                Ok(())
            }
            Err(err) => {
                error!(%err, "itinerary generation failed");
                self.itinerary.submit_failed();
                Err(FormError::GenerationFailed)
            }
        }
    }

    /// Run the lifted search. Empty or whitespace-only queries issue no
    /// request; a failed request is logged and the current page left
    /// unchanged, like every other fetch. Returns whether results were
    /// applied.
    pub async fn run_search(&mut self) -> bool {
        let Some(query) = self.search.prepared_query() else {
            return false;
        };
        let query = query.to_string();

        match self.api.search(&query).await {
            Ok(results) => {
                self.search.apply(results);
                self.page = Page::SearchResults;
                true
            }
            Err(err) => {
                error!(%err, "search failed");
                false
            }
        }
    }

    /// The chat session, created on first use and stable for the rest of
    /// the application lifetime.
    pub fn chat_session(&mut self) -> &mut ChatSession {
        self.chat.get_or_insert_with(ChatSession::new)
    }

    /// Send one chat message through the session's single-flight protocol.
    /// Returns whether a message was actually sent.
    pub async fn send_chat_message(&mut self, input: &str) -> bool {
        let session = self.chat.get_or_insert_with(ChatSession::new);
        let Some(pending) = session.begin_send(input) else {
            return false;
        };
        let session_id = session.id().to_string();

        let reply = match self.api.chat(&session_id, input.trim()).await {
            Ok(text) => Some(text),
            Err(err) => {
                error!(%err, "chat request failed");
                None
            }
        };

        if let Some(session) = self.chat.as_mut() {
            session.resolve(pending, reply);
        }
        true
    }
}
