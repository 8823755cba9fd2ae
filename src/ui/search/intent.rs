use crate::search::SearchResult;
use crate::ui::mvi::Intent;
use crate::ui::search::state::RequestId;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Form submitted; `request` identifies the dispatched query.
    Submit { request: RequestId, query: String },
    /// Response for `request` arrived. Ignored unless it is the pending one.
    Completed {
        request: RequestId,
        results: Option<Vec<SearchResult>>,
    },
    /// Request `request` failed. Ignored unless it is the pending one.
    Failed { request: RequestId, message: String },
    /// Direct render of a result set, regardless of any pending request.
    Render { results: Option<Vec<SearchResult>> },
}

impl Intent for SearchIntent {}
