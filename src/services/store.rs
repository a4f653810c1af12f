use crate::core::merge_candidates;
use crate::models::{Record, ResourceKind, SearchResult, SourceReport, SourceStatus};
use crate::services::travel_api::{TravelApiClient, TravelApiError};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// One resource list and the outcome of its last fetch
#[derive(Debug, Clone)]
struct Slot {
    status: SourceStatus,
    records: Arc<Vec<Record>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Slot {
    fn pending() -> Self {
        Self {
            status: SourceStatus::Pending,
            records: Arc::new(Vec::new()),
            updated_at: None,
        }
    }
}

struct Inner {
    client: Arc<TravelApiClient>,
    slots: [RwLock<Slot>; 4],
    /// Id of the latest fetch started per slot; older fetches are stale
    generations: [AtomicU64; 4],
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Inner {
    fn slot(&self, kind: ResourceKind) -> &RwLock<Slot> {
        &self.slots[kind.index()]
    }

    fn next_generation(&self, kind: ResourceKind) -> u64 {
        self.generations[kind.index()].fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Abort fetches still in flight and start a new one per kind
    async fn refresh(self: &Arc<Self>) {
        let mut tasks = self.tasks.lock().await;
        for task in tasks.drain(..) {
            task.abort();
        }

        for kind in ResourceKind::ALL {
            tasks.push(spawn_fetch(self, kind));
        }

        tracing::debug!("Started fetching {} resource lists", ResourceKind::ALL.len());
    }

    /// Apply a finished fetch; failures keep the previous records
    ///
    /// Results of a fetch superseded by a later one are dropped.
    async fn complete(
        &self,
        kind: ResourceKind,
        generation: u64,
        result: Result<Vec<Record>, TravelApiError>,
    ) -> bool {
        let mut slot = self.slot(kind).write().await;

        if self.generations[kind.index()].load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale {} response (fetch {})", kind, generation);
            return false;
        }

        match result {
            Ok(records) => {
                tracing::info!("Loaded {} {} records", records.len(), kind);
                slot.records = Arc::new(records);
                slot.status = SourceStatus::Loaded;
                slot.updated_at = Some(Utc::now());
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch {} records, keeping {} cached: {}",
                    kind,
                    slot.records.len(),
                    e
                );
                slot.status = SourceStatus::Failed;
            }
        }
        true
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for task in self.tasks.get_mut().drain(..) {
            task.abort();
        }
    }
}

/// Point-in-time copy of all four resource lists
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    lists: [Arc<Vec<Record>>; 4],
    reports: Vec<SourceReport>,
}

impl StoreSnapshot {
    pub fn records(&self, kind: ResourceKind) -> &[Record] {
        &self.lists[kind.index()]
    }

    /// Tagged candidates in merge order
    pub fn candidates(&self) -> Vec<SearchResult> {
        merge_candidates(
            self.records(ResourceKind::Customer),
            self.records(ResourceKind::Hotel),
            self.records(ResourceKind::Tour),
            self.records(ResourceKind::Flight),
        )
    }

    pub fn reports(&self) -> &[SourceReport] {
        &self.reports
    }

    /// True when any list failed its last fetch
    pub fn degraded(&self) -> bool {
        self.reports.iter().any(|r| r.status == SourceStatus::Failed)
    }

    /// True when every list has loaded
    pub fn complete(&self) -> bool {
        self.reports.iter().all(|r| r.status == SourceStatus::Loaded)
    }
}

/// In-memory holder of the four resource lists
///
/// Each list is fetched by its own task and becomes searchable as soon as it
/// arrives; there is no barrier across kinds. Fetch tasks only hold a weak
/// reference to the store and are aborted when it is dropped, so responses
/// arriving after teardown are discarded.
pub struct ResourceStore {
    inner: Arc<Inner>,
    refresher: Mutex<Option<JoinHandle<()>>>,
}

impl ResourceStore {
    /// Create an empty store; call [`ResourceStore::refresh`] to start loading
    pub fn new(client: Arc<TravelApiClient>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                slots: [
                    RwLock::new(Slot::pending()),
                    RwLock::new(Slot::pending()),
                    RwLock::new(Slot::pending()),
                    RwLock::new(Slot::pending()),
                ],
                generations: Default::default(),
                tasks: Mutex::new(Vec::new()),
            }),
            refresher: Mutex::new(None),
        }
    }

    /// Start fetching all four lists concurrently
    ///
    /// Fetches still in flight from an earlier refresh, manual or periodic,
    /// are aborted first. Returns without waiting for any of them.
    pub async fn refresh(&self) {
        self.inner.refresh().await;
    }

    /// Wait until every fetch started by the last refresh has finished
    pub async fn wait_loaded(&self) {
        let tasks: Vec<JoinHandle<()>> = self.inner.tasks.lock().await.drain(..).collect();
        for task in tasks {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!("Resource fetch task failed: {}", e);
                }
            }
        }
    }

    /// Refresh all lists every `interval` until the store is dropped
    pub async fn start_periodic_refresh(&self, interval: Duration) {
        let weak = Arc::downgrade(&self.inner);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // first tick fires immediately; the initial load is done by the caller
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                tracing::debug!("Periodic refresh of resource lists");
                inner.refresh().await;
            }
        });

        if let Some(previous) = self.refresher.lock().await.replace(handle) {
            previous.abort();
        }
    }

    pub async fn status(&self, kind: ResourceKind) -> SourceStatus {
        self.inner.slot(kind).read().await.status
    }

    /// Copy the current lists; partially loaded data is returned as-is
    pub async fn snapshot(&self) -> StoreSnapshot {
        let mut reports = Vec::with_capacity(ResourceKind::ALL.len());
        let mut lists: [Arc<Vec<Record>>; 4] = Default::default();

        for kind in ResourceKind::ALL {
            let slot = self.inner.slot(kind).read().await;
            lists[kind.index()] = slot.records.clone();
            reports.push(SourceReport {
                kind,
                status: slot.status,
                count: slot.records.len(),
                updated_at: slot.updated_at,
            });
        }

        StoreSnapshot { lists, reports }
    }

    pub fn client(&self) -> &TravelApiClient {
        &self.inner.client
    }
}

impl Drop for ResourceStore {
    fn drop(&mut self) {
        if let Some(refresher) = self.refresher.get_mut().take() {
            refresher.abort();
        }
    }
}

fn spawn_fetch(inner: &Arc<Inner>, kind: ResourceKind) -> JoinHandle<()> {
    let weak: Weak<Inner> = Arc::downgrade(inner);
    let client = inner.client.clone();
    let generation = inner.next_generation(kind);

    tokio::spawn(async move {
        let result = client.fetch_records(kind).await;
        match weak.upgrade() {
            Some(inner) => {
                inner.complete(kind, generation, result).await;
            }
            None => tracing::debug!("Store dropped, discarding {} response", kind),
        }
    })
}
