use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::*;

use crate::api::ReviewBackend;
use crate::models::review::Review;

const FETCH_ERROR: &str = "Failed to fetch bikes. Please try again later.";
const SEARCH_ERROR: &str = "Error searching bikes. Please try again.";

/// Single source of truth for review data visible to the UI. Reconciles the
/// initial bulk fetch, server-side searches, and real-time push ingestion
/// into one consistent view.
///
/// Constructed once in [`crate::app::App`] and handed to views through
/// context; every clone shares the same underlying state.
#[derive(Clone)]
pub struct ReviewStore {
    backend: Rc<dyn ReviewBackend>,
    collection: RwSignal<Vec<Review>>,
    search_results: RwSignal<Vec<Review>>,
    in_flight: RwSignal<u32>,
    loading: Signal<bool>,
    error: RwSignal<Option<String>>,
    // Monotonic ticket per search; responses from superseded searches are
    // discarded instead of overwriting newer results.
    search_seq: Rc<Cell<u64>>,
}

impl ReviewStore {
    pub fn new(backend: Rc<dyn ReviewBackend>) -> Self {
        let in_flight = create_rw_signal(0u32);
        let loading = Signal::derive(move || in_flight.get() > 0);
        Self {
            backend,
            collection: create_rw_signal(Vec::new()),
            search_results: create_rw_signal(Vec::new()),
            in_flight,
            loading,
            error: create_rw_signal(None),
            search_seq: Rc::new(Cell::new(0)),
        }
    }

    pub fn use_store() -> Self {
        use_context::<ReviewStore>().expect("ReviewStore provided by App")
    }

    /// Every review known to this session, newest first.
    pub fn collection(&self) -> ReadSignal<Vec<Review>> {
        self.collection.read_only()
    }

    /// Results of the most recent completed search; empty when no search is
    /// active.
    pub fn search_results(&self) -> ReadSignal<Vec<Review>> {
        self.search_results.read_only()
    }

    /// True while any fetch or search request is outstanding.
    pub fn loading(&self) -> Signal<bool> {
        self.loading
    }

    /// Message from the last failed request; cleared by the next success.
    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Direct access to the backend, for callers whose requests bypass the
    /// cache (detail fallback fetch, review submission).
    pub fn backend(&self) -> Rc<dyn ReviewBackend> {
        Rc::clone(&self.backend)
    }

    /// Fetches the full review collection once at session start. On failure
    /// the collection stays empty and a message lands in `error`; there is no
    /// automatic retry.
    pub async fn initialize(&self) {
        self.in_flight.update(|n| *n += 1);
        match self.backend.fetch_reviews().await {
            Ok(reviews) => {
                log!("[STORE] Loaded {} reviews", reviews.len());
                self.collection.set(reviews);
                self.error.set(None);
            }
            Err(err) => {
                warn!("[STORE] Initial fetch failed: {err}");
                self.error.set(Some(FETCH_ERROR.to_string()));
            }
        }
        self.in_flight.update(|n| *n -= 1);
    }

    /// Runs a server-side search and replaces `search_results` wholesale.
    /// An empty or whitespace query clears the results without touching the
    /// network. When several searches overlap, only the most recently issued
    /// one is allowed to land.
    pub async fn search_bikes(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.search_results.set(Vec::new());
            return;
        }

        let ticket = self.search_seq.get() + 1;
        self.search_seq.set(ticket);

        self.in_flight.update(|n| *n += 1);
        let outcome = self.backend.search_reviews(query).await;
        self.in_flight.update(|n| *n -= 1);

        if self.search_seq.get() != ticket {
            log!("[STORE] Dropping superseded search for {query:?}");
            return;
        }
        match outcome {
            Ok(results) => {
                self.search_results.set(results);
                self.error.set(None);
            }
            Err(err) => {
                warn!("[STORE] Search for {query:?} failed: {err}");
                self.error.set(Some(SEARCH_ERROR.to_string()));
            }
        }
    }

    /// Ingests a review broadcast over the push channel: prepends it to the
    /// collection. Reviews are immutable, so a repeated id is the same entity
    /// redelivered (own-submission echo, reconnect replay) and is ignored.
    pub fn add_new_review(&self, review: Review) {
        self.collection.update(|reviews| {
            if reviews.iter().any(|existing| existing.id == review.id) {
                log!("[STORE] Ignoring duplicate review {}", review.id);
                return;
            }
            reviews.insert(0, review);
        });
    }

    /// Synchronous cache lookup. Never touches the network; callers fall
    /// back to [`ReviewBackend::fetch_review`] on a miss.
    pub fn get_bike_by_id(&self, id: &str) -> Option<Review> {
        self.collection
            .with_untracked(|reviews| reviews.iter().find(|review| review.id == id).cloned())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use chrono::Utc;
    use futures::channel::oneshot;
    use futures::future::{self, FutureExt, LocalBoxFuture};
    use futures::poll;

    use super::*;
    use crate::api::{ApiError, ApiResult};
    use crate::models::draft::ReviewDraft;
    use crate::models::review::WorthTheCost;

    fn review(id: &str, bike: &str) -> Review {
        Review {
            id: id.to_string(),
            rider_name: "Rider".to_string(),
            bike_name: bike.to_string(),
            model_name: "Model".to_string(),
            purchase_year: 2020,
            total_km: 1000.0,
            bike_cost: 150000.0,
            cost_per_service: 1000.0,
            minor_repair_cost: 0.0,
            major_repair_cost: 0.0,
            review: "fine".to_string(),
            rating: 4.0,
            worth_the_cost: WorthTheCost::Yes,
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            created_at: Utc::now(),
        }
    }

    fn ids(reviews: &[Review]) -> Vec<String> {
        reviews.iter().map(|r| r.id.clone()).collect()
    }

    /// Backend with a canned collection; searches filter it the way the
    /// server contract describes (case-insensitive substring on name, model,
    /// brand).
    struct CannedBackend {
        reviews: Vec<Review>,
        fail: bool,
    }

    impl CannedBackend {
        fn with(reviews: Vec<Review>) -> Rc<Self> {
            Rc::new(Self {
                reviews,
                fail: false,
            })
        }

        fn failing() -> Rc<Self> {
            Rc::new(Self {
                reviews: Vec::new(),
                fail: true,
            })
        }
    }

    impl ReviewBackend for CannedBackend {
        fn fetch_reviews(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
            let result = if self.fail {
                Err(ApiError::Network("offline".into()))
            } else {
                Ok(self.reviews.clone())
            };
            future::ready(result).boxed_local()
        }

        fn search_reviews(&self, query: &str) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
            if self.fail {
                return future::ready(Err(ApiError::Network("offline".into()))).boxed_local();
            }
            let needle = query.to_lowercase();
            let hits = self
                .reviews
                .iter()
                .filter(|r| {
                    r.bike_name.to_lowercase().contains(&needle)
                        || r.model_name.to_lowercase().contains(&needle)
                        || r.rider_name.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            future::ready(Ok(hits)).boxed_local()
        }

        fn fetch_review(&self, id: &str) -> LocalBoxFuture<'static, ApiResult<Review>> {
            let result = self
                .reviews
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(ApiError::NotFound);
            future::ready(result).boxed_local()
        }

        fn submit_review(
            &self,
            _draft: &ReviewDraft,
            _images: &[web_sys::File],
        ) -> LocalBoxFuture<'static, ApiResult<Review>> {
            future::ready(Err(ApiError::Network("not supported".into()))).boxed_local()
        }
    }

    /// Backend whose requests complete only when the test fires the matching
    /// gate, so in-flight overlap is controlled exactly.
    #[derive(Default)]
    struct GatedBackend {
        fetches: RefCell<VecDeque<oneshot::Receiver<ApiResult<Vec<Review>>>>>,
        searches: RefCell<VecDeque<oneshot::Receiver<ApiResult<Vec<Review>>>>>,
    }

    impl GatedBackend {
        fn gate_fetch(&self) -> oneshot::Sender<ApiResult<Vec<Review>>> {
            let (tx, rx) = oneshot::channel();
            self.fetches.borrow_mut().push_back(rx);
            tx
        }

        fn gate_search(&self) -> oneshot::Sender<ApiResult<Vec<Review>>> {
            let (tx, rx) = oneshot::channel();
            self.searches.borrow_mut().push_back(rx);
            tx
        }
    }

    impl ReviewBackend for GatedBackend {
        fn fetch_reviews(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
            let rx = self
                .fetches
                .borrow_mut()
                .pop_front()
                .expect("unexpected fetch");
            async move { rx.await.expect("fetch gate dropped") }.boxed_local()
        }

        fn search_reviews(&self, _query: &str) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
            let rx = self
                .searches
                .borrow_mut()
                .pop_front()
                .expect("unexpected search");
            async move { rx.await.expect("search gate dropped") }.boxed_local()
        }

        fn fetch_review(&self, _id: &str) -> LocalBoxFuture<'static, ApiResult<Review>> {
            future::ready(Err(ApiError::NotFound)).boxed_local()
        }

        fn submit_review(
            &self,
            _draft: &ReviewDraft,
            _images: &[web_sys::File],
        ) -> LocalBoxFuture<'static, ApiResult<Review>> {
            future::ready(Err(ApiError::Network("not supported".into()))).boxed_local()
        }
    }

    #[tokio::test]
    async fn initialize_replaces_collection_in_server_order() {
        let runtime = create_runtime();
        let backend = CannedBackend::with(vec![review("1", "Duke 390"), review("2", "CB350")]);
        let store = ReviewStore::new(backend);

        store.initialize().await;

        assert_eq!(ids(&store.collection().get_untracked()), ["1", "2"]);
        assert_eq!(store.error().get_untracked(), None);
        assert!(!store.loading().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_initialize_sets_error_and_leaves_collection_empty() {
        let runtime = create_runtime();
        let store = ReviewStore::new(CannedBackend::failing());

        store.initialize().await;

        assert!(store.collection().get_untracked().is_empty());
        assert_eq!(
            store.error().get_untracked().as_deref(),
            Some("Failed to fetch bikes. Please try again later.")
        );
        assert!(!store.loading().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn empty_query_clears_results_without_a_backend_call() {
        let runtime = create_runtime();
        let backend = Rc::new(GatedBackend::default());
        let store = ReviewStore::new(backend.clone());

        let gate = backend.gate_search();
        gate.send(Ok(vec![review("1", "Duke 390")])).unwrap();
        store.search_bikes("duke").await;
        assert_eq!(ids(&store.search_results().get_untracked()), ["1"]);

        // No gate is registered, so a backend call here would panic.
        store.search_bikes("   ").await;
        assert!(store.search_results().get_untracked().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn search_replaces_results_wholesale() {
        let runtime = create_runtime();
        let backend = CannedBackend::with(vec![
            review("1", "Duke 390"),
            review("2", "Pulsar 150"),
            review("3", "Duke 200"),
        ]);
        let store = ReviewStore::new(backend);

        store.search_bikes("duke").await;
        assert_eq!(ids(&store.search_results().get_untracked()), ["1", "3"]);

        store.search_bikes("pulsar").await;
        assert_eq!(ids(&store.search_results().get_untracked()), ["2"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_search_keeps_prior_results_and_sets_error() {
        let runtime = create_runtime();
        let backend = Rc::new(GatedBackend::default());
        let store = ReviewStore::new(backend.clone());

        let ok = backend.gate_search();
        ok.send(Ok(vec![review("1", "Duke 390")])).unwrap();
        store.search_bikes("duke").await;
        assert_eq!(ids(&store.search_results().get_untracked()), ["1"]);

        let fail = backend.gate_search();
        fail.send(Err(ApiError::Status(500))).unwrap();
        store.search_bikes("pulsar").await;

        assert_eq!(ids(&store.search_results().get_untracked()), ["1"]);
        assert_eq!(
            store.error().get_untracked().as_deref(),
            Some("Error searching bikes. Please try again.")
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_search_response_is_discarded() {
        let runtime = create_runtime();
        let backend = Rc::new(GatedBackend::default());
        let store = ReviewStore::new(backend.clone());

        let first_gate = backend.gate_search();
        let second_gate = backend.gate_search();

        let first = store.search_bikes("pulsar");
        let second = store.search_bikes("duke");
        let resolve = async move {
            // The newer search resolves first; the older response arrives
            // afterwards and must not overwrite it.
            second_gate.send(Ok(vec![review("2", "Duke 390")])).unwrap();
            first_gate.send(Ok(vec![review("1", "Pulsar 150")])).unwrap();
        };
        futures::join!(first, second, resolve);

        assert_eq!(ids(&store.search_results().get_untracked()), ["2"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn loading_stays_true_until_every_request_completes() {
        let runtime = create_runtime();
        let backend = Rc::new(GatedBackend::default());
        let store = ReviewStore::new(backend.clone());

        let fetch_gate = backend.gate_fetch();
        let search_gate = backend.gate_search();

        let mut init = Box::pin(store.initialize());
        assert!(poll!(init.as_mut()).is_pending());
        let mut search = Box::pin(store.search_bikes("duke"));
        assert!(poll!(search.as_mut()).is_pending());
        assert!(store.loading().get_untracked());

        fetch_gate.send(Ok(vec![review("1", "Duke 390")])).unwrap();
        assert!(poll!(init.as_mut()).is_ready());
        assert!(
            store.loading().get_untracked(),
            "search still in flight, loading must hold"
        );

        search_gate.send(Ok(vec![review("1", "Duke 390")])).unwrap();
        assert!(poll!(search.as_mut()).is_ready());
        assert!(!store.loading().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn add_new_review_prepends_and_dedupes_by_id() {
        let runtime = create_runtime();
        let backend = CannedBackend::with(vec![review("1", "Duke 390")]);
        let store = ReviewStore::new(backend);
        store.initialize().await;

        store.add_new_review(review("2", "Interceptor 650"));
        assert_eq!(ids(&store.collection().get_untracked()), ["2", "1"]);

        // Same id redelivered (own-submission echo): no change.
        store.add_new_review(review("2", "Interceptor 650"));
        assert_eq!(ids(&store.collection().get_untracked()), ["2", "1"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn get_bike_by_id_is_a_pure_cache_lookup() {
        let runtime = create_runtime();
        let backend = CannedBackend::with(vec![review("1", "Duke 390"), review("2", "CB350")]);
        let store = ReviewStore::new(backend);
        store.initialize().await;

        assert_eq!(
            store.get_bike_by_id("2").map(|r| r.bike_name),
            Some("CB350".to_string())
        );
        assert_eq!(store.get_bike_by_id("missing"), None);
        runtime.dispose();
    }
}
