//! Search controller: turns form submissions into backend queries and
//! backend responses into document updates.
//!
//! The controller is constructed with its collaborators (backend, document,
//! region ids, labels) and holds no global state. Its view state lives
//! behind a mutex shared with the request tasks it spawns.

mod reconcile;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::cancel::CancelHandle;
use crate::config::{Labels, Regions};
use crate::dom::{Document, SubmitEvent};
use crate::search::{Query, SearchBackend, SearchResult};
use crate::ui::mvi::Reducer;
use crate::ui::search::{RequestId, SearchIntent, SearchReducer, SearchState};

pub use reconcile::reconcile;

struct Shared<D> {
    document: D,
    state: SearchState,
    last_request: u64,
    in_flight: Option<CancelHandle>,
}

impl<D: Document> Shared<D> {
    /// Runs the reducer and reconciles the document if the state changed.
    fn dispatch(&mut self, intent: SearchIntent, regions: &Regions, labels: &Labels) {
        let next = SearchReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        reconcile(&mut self.document, regions, labels, &self.state);
    }
}

/// Handle to a dispatched search. Dropping it leaves the request running.
#[derive(Debug)]
pub struct SearchTask {
    request: RequestId,
    handle: JoinHandle<()>,
}

impl SearchTask {
    pub fn request(&self) -> RequestId {
        self.request
    }

    /// Waits until the request has been rendered, failed or was superseded.
    pub async fn finished(self) {
        if let Err(err) = self.handle.await {
            tracing::warn!(request = %self.request, "Search task ended abnormally: {}", err);
        }
    }
}

pub struct SearchController<B, D> {
    backend: Arc<B>,
    shared: Arc<Mutex<Shared<D>>>,
    regions: Arc<Regions>,
    labels: Arc<Labels>,
}

impl<B, D> SearchController<B, D>
where
    B: SearchBackend,
    D: Document,
{
    pub fn new(backend: B, document: D, regions: Regions, labels: Labels) -> Self {
        Self {
            backend: Arc::new(backend),
            shared: Arc::new(Mutex::new(Shared {
                document,
                state: SearchState::Idle,
                last_request: 0,
                in_flight: None,
            })),
            regions: Arc::new(regions),
            labels: Arc::new(labels),
        }
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn state(&self) -> SearchState {
        self.shared.lock().state.clone()
    }

    pub fn with_document<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.shared.lock().document)
    }

    pub fn with_document_mut<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.shared.lock().document)
    }

    /// Handles a form submission.
    ///
    /// Prevents the default submit, switches the document to the loading
    /// state before returning, cancels any pending request and dispatches a
    /// new one. A missing query field is sent as an empty query.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn handle_submit(&self, event: &mut SubmitEvent) -> SearchTask {
        event.prevent_default();
        let query = Query::new(event.field(&self.regions.query_field).unwrap_or_default());
        let cancel = CancelHandle::new();

        let request = {
            let mut shared = self.shared.lock();
            if let Some(previous) = shared.in_flight.replace(cancel.clone()) {
                previous.cancel();
            }
            shared.last_request += 1;
            let request = RequestId(shared.last_request);
            shared.dispatch(
                SearchIntent::Submit {
                    request,
                    query: query.as_str().to_string(),
                },
                &self.regions,
                &self.labels,
            );
            request
        };
        tracing::debug!(request = %request, query = query.as_str(), "Search submitted");

        let backend = Arc::clone(&self.backend);
        let shared = Arc::clone(&self.shared);
        let regions = Arc::clone(&self.regions);
        let labels = Arc::clone(&self.labels);

        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::trace!(request = %request, "Search superseded before completion");
                    return;
                }
                outcome = backend.search(&query) => outcome,
            };

            let intent = match outcome {
                Ok(results) => {
                    tracing::info!(
                        request = %request,
                        count = results.as_ref().map_or(0, Vec::len),
                        "Search completed"
                    );
                    SearchIntent::Completed { request, results }
                }
                Err(err) => {
                    tracing::warn!(
                        request = %request,
                        error_type = err.error_type(),
                        "Search failed: {}",
                        err
                    );
                    SearchIntent::Failed {
                        request,
                        message: err.user_message().to_string(),
                    }
                }
            };

            let mut shared = shared.lock();
            if cancel.is_cancelled() {
                tracing::trace!(request = %request, "Dropping stale search response");
                return;
            }
            shared.in_flight = None;
            shared.dispatch(intent, &regions, &labels);
        });

        SearchTask { request, handle }
    }

    /// Reconciles the table and count indicator with `results`.
    ///
    /// `None` and an empty sequence both render as zero results.
    pub fn render(&self, results: Option<Vec<SearchResult>>) {
        let mut shared = self.shared.lock();
        shared.dispatch(SearchIntent::Render { results }, &self.regions, &self.labels);
    }
}

impl<B, D> Clone for SearchController<B, D> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            shared: Arc::clone(&self.shared),
            regions: Arc::clone(&self.regions),
            labels: Arc::clone(&self.labels),
        }
    }
}
