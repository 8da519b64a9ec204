use tracing::debug;

/// Load status of a remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch issued yet.
    Idle,
    /// A fetch is in flight; render a loading indicator.
    Loading,
    /// A fetch has resolved; `items` holds the trusted copy.
    Loaded,
}

/// Proof that a load was started, carrying its generation.
///
/// `resolve*` applies an outcome only when the token's generation is still
/// current, so a slow response that arrives after a newer fetch began is
/// dropped instead of overwriting fresher data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Render-local copy of one backend collection.
///
/// One instance backs each fetch-filter-render page: fetch once on first
/// display, keep the result, derive filtered views synchronously. On
/// failure the collection degrades to an empty loaded state (the page shows
/// "no results", never an error screen) and a dismissible notice records
/// what went wrong.
#[derive(Debug, Clone)]
pub struct RemoteCollection<T> {
    items: Vec<T>,
    status: LoadStatus,
    generation: u64,
    notice: Option<String>,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
            generation: 0,
            notice: None,
        }
    }
}

impl<T> RemoteCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fetch. Any outstanding token from an earlier fetch becomes
    /// stale.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.notice = None;
        LoadToken {
            generation: self.generation,
        }
    }

    /// Apply a successful fetch. Returns false when the token is stale and
    /// the outcome was dropped.
    pub fn resolve(&mut self, token: LoadToken, items: Vec<T>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.items = items;
        self.status = LoadStatus::Loaded;
        true
    }

    /// Apply a failed fetch: empty collection, loaded status, a notice the
    /// caller may surface and dismiss.
    pub fn resolve_failed(&mut self, token: LoadToken, notice: impl Into<String>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.items.clear();
        self.status = LoadStatus::Loaded;
        self.notice = Some(notice.into());
        true
    }

    fn accepts(&self, token: LoadToken) -> bool {
        if token.generation != self.generation {
            debug!(
                stale = token.generation,
                current = self.generation,
                "dropping stale fetch resolution"
            );
            return false;
        }
        true
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// True once any fetch has resolved, success or failure.
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Pure client-side filter over the loaded items. Never fetches.
    pub fn filtered_by<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let collection: RemoteCollection<u32> = RemoteCollection::new();
        assert_eq!(collection.status(), LoadStatus::Idle);
        assert!(collection.items().is_empty());
        assert!(collection.notice().is_none());
    }

    #[test]
    fn resolve_stores_items() {
        let mut collection = RemoteCollection::new();
        let token = collection.begin_load();
        assert!(collection.is_loading());

        assert!(collection.resolve(token, vec![1, 2, 3]));
        assert!(collection.is_loaded());
        assert_eq!(collection.items(), &[1, 2, 3]);
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut collection = RemoteCollection::new();
        let old = collection.begin_load();
        let new = collection.begin_load();

        // The newer fetch resolves first; the slow old one must not win.
        assert!(collection.resolve(new, vec![10]));
        assert!(!collection.resolve(old, vec![99]));
        assert_eq!(collection.items(), &[10]);
    }

    #[test]
    fn failure_degrades_to_empty_with_notice() {
        let mut collection: RemoteCollection<u32> = RemoteCollection::new();
        let token = collection.begin_load();
        assert!(collection.resolve_failed(token, "backend unreachable"));

        assert!(collection.is_loaded());
        assert!(collection.items().is_empty());
        assert_eq!(collection.notice(), Some("backend unreachable"));

        collection.dismiss_notice();
        assert!(collection.notice().is_none());
    }

    #[test]
    fn new_load_clears_previous_notice() {
        let mut collection: RemoteCollection<u32> = RemoteCollection::new();
        let token = collection.begin_load();
        collection.resolve_failed(token, "oops");

        collection.begin_load();
        assert!(collection.notice().is_none());
    }

    #[test]
    fn filtering_is_pure_and_repeatable() {
        let mut collection = RemoteCollection::new();
        let token = collection.begin_load();
        collection.resolve(token, vec![1, 2, 3, 4]);

        let even: Vec<&i32> = collection.filtered_by(|n| n % 2 == 0);
        assert_eq!(even, vec![&2, &4]);

        // Re-filtering by the same predicate gives the same view.
        let again: Vec<&i32> = collection.filtered_by(|n| n % 2 == 0);
        assert_eq!(again, even);
        assert_eq!(collection.items(), &[1, 2, 3, 4]);
    }
}
