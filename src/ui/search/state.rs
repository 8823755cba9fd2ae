use crate::search::SearchResult;
use crate::ui::mvi::UiState;

/// Identifier of one dispatched search request. Increases per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting for the response to `request`.
    Loading { request: RequestId, query: String },
    /// Non-empty result set, in backend order.
    Rendered { results: Vec<SearchResult> },
    /// Zero results (`null`, missing or empty).
    Empty,
    Error { message: String },
}

impl UiState for SearchState {}

impl SearchState {
    /// State for a completed result set; `None` and `[]` are equivalent.
    pub fn from_results(results: Option<Vec<SearchResult>>) -> Self {
        match results {
            Some(results) if !results.is_empty() => SearchState::Rendered { results },
            _ => SearchState::Empty,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            Self::Loading { request, .. } => Some(*request),
            _ => None,
        }
    }

    pub fn result_count(&self) -> usize {
        match self {
            Self::Rendered { results } => results.len(),
            _ => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
