//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::future::Future;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tempfile::TempDir;
use worksearch::config::{ClientConfig, Labels, Regions};
use worksearch::controller::SearchController;
use worksearch::dom::{MemoryDocument, SubmitEvent};
use worksearch::search::{
    HttpSearchBackend, Query, SearchBackend, SearchError, SearchResult,
};

pub type HttpController = SearchController<HttpSearchBackend, MemoryDocument>;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn client_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ClientConfig::default()
    }
}

/// Controller talking HTTP to `base_url`, rendering into a fresh page.
pub fn http_controller(base_url: &str) -> HttpController {
    let regions = Regions::default();
    let backend = HttpSearchBackend::new(&client_config(base_url)).expect("client");
    SearchController::new(
        backend,
        MemoryDocument::with_regions(&regions),
        regions,
        Labels::default(),
    )
}

pub fn submit_event(query: &str) -> SubmitEvent {
    SubmitEvent::new("form").with_field("query", query)
}

pub fn results(pairs: &[(&str, &str)]) -> Vec<SearchResult> {
    pairs
        .iter()
        .map(|(matched, work)| SearchResult::new(*matched, *work))
        .collect()
}

// -- Scripted backend ---------------------------------------------------------

/// In-process backend answering each query from a script after a delay.
///
/// Unscripted queries answer `Ok(None)` immediately.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Vec<(String, Duration, ScriptedReply)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
pub enum ScriptedReply {
    Results(Option<Vec<SearchResult>>),
    Status(u16),
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, query: &str, delay: Duration, reply: ScriptedReply) -> Self {
        self.script.lock().push((query.to_string(), delay, reply));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl SearchBackend for ScriptedBackend {
    fn search(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Option<Vec<SearchResult>>, SearchError>> + Send {
        let query = query.as_str().to_string();
        self.calls.lock().push(query.clone());
        let entry = self
            .script
            .lock()
            .iter()
            .find(|(scripted, _, _)| *scripted == query)
            .map(|(_, delay, reply)| (*delay, reply.clone()));

        async move {
            let Some((delay, reply)) = entry else {
                return Ok(None);
            };
            tokio::time::sleep(delay).await;
            match reply {
                ScriptedReply::Results(results) => Ok(results),
                ScriptedReply::Status(status) => Err(SearchError::Status {
                    status,
                    body: String::new(),
                }),
            }
        }
    }
}

pub fn scripted_controller(
    backend: ScriptedBackend,
) -> SearchController<ScriptedBackend, MemoryDocument> {
    let regions = Regions::default();
    SearchController::new(
        backend,
        MemoryDocument::with_regions(&regions),
        regions,
        Labels::default(),
    )
}
