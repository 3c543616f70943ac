//! Inventory store.
//!
//! Holds the product collection and the `fetching` flag. `fetch_inventory`
//! is fire-and-forget: the load runs on a worker thread and the result is
//! applied to shared state, then announced to subscribers. Readers never
//! wait on a fetch; they take snapshots.
//!
//! Every fetch gets a request number. A result older than the one already
//! applied is dropped, so overlapping refreshes settle on the newest request.
//! A failure counts as applied: it keeps the previous inventory, and a slower
//! older success arriving afterwards is discarded.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use shelf_types::InventoryCollection;

use crate::source::InventorySource;
use crate::{Error, Result};

/// Notifications published by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FetchStarted { request: u64 },
    FetchFinished { request: u64, products: usize },
    FetchFailed { request: u64, message: String },
    /// A newer request had already been applied.
    FetchDiscarded { request: u64 },
}

/// Point-in-time copy of the store state.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub fetching: bool,
    pub inventory: InventoryCollection,
    pub last_error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct StoreState {
    inventory: InventoryCollection,
    outstanding: usize,
    last_issued: u64,
    last_applied: u64,
    last_error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

struct StoreInner {
    source: Box<dyn InventorySource>,
    state: Mutex<StoreState>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

#[derive(Clone)]
pub struct InventoryStore {
    inner: Arc<StoreInner>,
}

impl InventoryStore {
    pub fn new(source: impl InventorySource + 'static) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source: Box::new(source),
                state: Mutex::new(StoreState::default()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// True while at least one fetch is outstanding.
    pub fn fetching(&self) -> bool {
        self.lock_state().outstanding > 0
    }

    pub fn select_inventory(&self) -> InventoryCollection {
        self.lock_state().inventory.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.lock_state();
        StoreSnapshot {
            fetching: state.outstanding > 0,
            inventory: state.inventory.clone(),
            last_error: state.last_error.clone(),
            last_updated: state.last_updated,
        }
    }

    pub fn source_description(&self) -> String {
        self.inner.source.describe()
    }

    /// Receive every event published from now on.
    ///
    /// Dropping the receiver unsubscribes on the next publish.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.lock_subscribers().push(tx);
        rx
    }

    /// Start a fetch and return its request number without waiting.
    pub fn fetch_inventory(&self) -> u64 {
        let request = {
            let mut state = self.lock_state();
            state.last_issued += 1;
            state.outstanding += 1;
            state.last_issued
        };

        tracing::info!(request, source = %self.inner.source.describe(), "fetching inventory");
        self.publish(StoreEvent::FetchStarted { request });

        let store = self.clone();
        let spawned = thread::Builder::new()
            .name(format!("inventory-fetch-{}", request))
            .spawn(move || {
                let result = store
                    .inner
                    .source
                    .load()
                    .and_then(|products| InventoryCollection::new(products).map_err(Error::from));
                store.complete(request, result);
            });

        if let Err(err) = spawned {
            self.complete(request, Err(Error::Io(err)));
        }

        request
    }

    /// Fetch and block until that request settles.
    pub fn fetch_and_wait(&self, timeout: Duration) -> Result<StoreSnapshot> {
        let events = self.subscribe();
        let request = self.fetch_inventory();
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match events.recv_timeout(remaining) {
                Ok(StoreEvent::FetchFinished { request: r, .. })
                | Ok(StoreEvent::FetchDiscarded { request: r })
                    if r == request =>
                {
                    return Ok(self.snapshot());
                }
                Ok(StoreEvent::FetchFailed { request: r, message }) if r == request => {
                    return Err(Error::FetchFailed(message));
                }
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => return Err(Error::FetchTimeout(timeout)),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(Error::Source("store subscription closed".to_string()));
                }
            }
        }
    }

    fn complete(&self, request: u64, result: Result<InventoryCollection>) {
        let event = {
            let mut state = self.lock_state();
            state.outstanding = state.outstanding.saturating_sub(1);

            if request < state.last_applied {
                StoreEvent::FetchDiscarded { request }
            } else {
                match result {
                    Ok(inventory) => {
                        let products = inventory.len();
                        state.inventory = inventory;
                        state.last_applied = request;
                        state.last_error = None;
                        state.last_updated = Some(Utc::now());
                        StoreEvent::FetchFinished { request, products }
                    }
                    Err(err) => {
                        // failures count as applied
                        let message = err.to_string();
                        state.last_applied = request;
                        state.last_error = Some(message.clone());
                        StoreEvent::FetchFailed { request, message }
                    }
                }
            }
        };

        match &event {
            StoreEvent::FetchFinished { products, .. } => {
                tracing::info!(request, products, "inventory fetched");
            }
            StoreEvent::FetchFailed { message, .. } => {
                tracing::warn!(request, error = %message, "inventory fetch failed");
            }
            StoreEvent::FetchDiscarded { .. } => {
                tracing::debug!(request, "stale inventory fetch discarded");
            }
            StoreEvent::FetchStarted { .. } => {}
        }

        self.publish(event);
    }

    fn publish(&self, event: StoreEvent) {
        self.lock_subscribers()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<Sender<StoreEvent>>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{JsonFileSource, MemorySource};
    use shelf_types::Product;

    const WAIT: Duration = Duration::from_secs(5);

    /// Source whose `load` blocks until the test releases it.
    struct GatedSource {
        gate: Mutex<Receiver<()>>,
        products: Vec<Product>,
    }

    impl InventorySource for GatedSource {
        fn load(&self) -> Result<Vec<Product>> {
            let gate = self.gate.lock().unwrap();
            gate.recv()
                .map_err(|_| Error::Source("gate closed".to_string()))?;
            Ok(self.products.clone())
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("p1", "Chisel", "2024-01-02"),
            Product::new("p2", "Plane", "2024-01-03"),
        ]
    }

    #[test]
    fn test_fetching_flag_follows_request_lifecycle() {
        let (release, gate) = mpsc::channel();
        let store = InventoryStore::new(GatedSource {
            gate: Mutex::new(gate),
            products: sample_products(),
        });
        let events = store.subscribe();

        assert!(!store.fetching());

        let request = store.fetch_inventory();
        assert!(store.fetching());
        assert_eq!(
            events.recv_timeout(WAIT).unwrap(),
            StoreEvent::FetchStarted { request }
        );

        release.send(()).unwrap();
        assert_eq!(
            events.recv_timeout(WAIT).unwrap(),
            StoreEvent::FetchFinished {
                request,
                products: 2
            }
        );
        assert!(!store.fetching());
        assert_eq!(store.select_inventory().len(), 2);
    }

    #[test]
    fn test_fetch_and_wait_returns_snapshot() {
        let store = InventoryStore::new(MemorySource::new(sample_products()));

        let snapshot = store.fetch_and_wait(WAIT).unwrap();
        assert!(!snapshot.fetching);
        assert_eq!(snapshot.inventory.len(), 2);
        assert!(snapshot.last_updated.is_some());
        assert!(snapshot.last_error.is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_inventory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");
        std::fs::write(
            &path,
            r#"[{"id": "a", "fields": {"Product Name": "Rasp", "Posted": "2024-01-01"}}]"#,
        )
        .unwrap();

        let store = InventoryStore::new(JsonFileSource::new(&path));
        store.fetch_and_wait(WAIT).unwrap();

        std::fs::remove_file(&path).unwrap();
        let result = store.fetch_and_wait(WAIT);

        assert!(matches!(result, Err(Error::FetchFailed(_))));
        assert!(!store.fetching());
        assert!(store.last_error().is_some());
        assert_eq!(store.select_inventory().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_fail_the_fetch() {
        let store = InventoryStore::new(MemorySource::new(vec![
            Product::new("dup", "One", "2024-01-01"),
            Product::new("dup", "Two", "2024-01-01"),
        ]));

        let err = store.fetch_and_wait(WAIT).unwrap_err();
        assert!(err.to_string().contains("Duplicate product id: dup"));
        assert!(store.select_inventory().is_empty());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let store = InventoryStore::new(MemorySource::default());
        {
            let mut state = store.lock_state();
            state.last_issued = 2;
            state.outstanding = 2;
        }

        let newer = InventoryCollection::new(sample_products()).unwrap();
        let older = InventoryCollection::new(vec![Product::new("old", "Old", "2023-01-01")])
            .unwrap();

        store.complete(2, Ok(newer.clone()));
        assert!(store.fetching());
        store.complete(1, Ok(older));

        assert!(!store.fetching());
        assert_eq!(store.select_inventory(), newer);
    }

    #[test]
    fn test_older_success_does_not_override_newer_failure() {
        let store = InventoryStore::new(MemorySource::default());
        let before = InventoryCollection::new(sample_products()).unwrap();
        {
            let mut state = store.lock_state();
            state.inventory = before.clone();
            state.last_issued = 2;
            state.outstanding = 2;
        }
        let events = store.subscribe();

        store.complete(2, Err(Error::Source("backend down".to_string())));
        let older = InventoryCollection::new(vec![Product::new("old", "Old", "2023-01-01")])
            .unwrap();
        store.complete(1, Ok(older));

        assert!(matches!(
            events.try_recv().unwrap(),
            StoreEvent::FetchFailed { request: 2, .. }
        ));
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::FetchDiscarded { request: 1 }
        );
        assert!(!store.fetching());
        assert_eq!(store.select_inventory(), before);
        assert!(store.last_error().unwrap().contains("backend down"));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let store = InventoryStore::new(MemorySource::new(sample_products()));
        let kept = store.subscribe();
        drop(store.subscribe());

        store.publish(StoreEvent::FetchDiscarded { request: 0 });
        assert_eq!(store.lock_subscribers().len(), 1);
        assert_eq!(
            kept.try_recv().unwrap(),
            StoreEvent::FetchDiscarded { request: 0 }
        );
    }
}
