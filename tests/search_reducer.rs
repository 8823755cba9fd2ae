use worksearch::search::SearchResult;
use worksearch::ui::mvi::Reducer;
use worksearch::ui::search::{RequestId, SearchIntent, SearchReducer, SearchState};

fn loading(id: u64) -> SearchState {
    SearchState::Loading {
        request: RequestId(id),
        query: "foo".to_string(),
    }
}

fn one_result() -> Vec<SearchResult> {
    vec![SearchResult::new("alpha", "doc1")]
}

#[test]
fn submit_enters_loading_from_any_state() {
    let states = [
        SearchState::Idle,
        loading(1),
        SearchState::Rendered {
            results: one_result(),
        },
        SearchState::Empty,
        SearchState::Error {
            message: "down".to_string(),
        },
    ];
    for state in states {
        let next = SearchReducer::reduce(
            state,
            SearchIntent::Submit {
                request: RequestId(7),
                query: "foo".to_string(),
            },
        );
        assert_eq!(next, loading(7));
    }
}

#[test]
fn completion_of_pending_request_renders() {
    let state = SearchReducer::reduce(
        loading(1),
        SearchIntent::Completed {
            request: RequestId(1),
            results: Some(one_result()),
        },
    );
    assert_eq!(
        state,
        SearchState::Rendered {
            results: one_result()
        }
    );
}

#[test]
fn null_and_empty_results_are_equivalent() {
    let from_null = SearchReducer::reduce(
        loading(1),
        SearchIntent::Completed {
            request: RequestId(1),
            results: None,
        },
    );
    let from_empty = SearchReducer::reduce(
        loading(1),
        SearchIntent::Completed {
            request: RequestId(1),
            results: Some(Vec::new()),
        },
    );
    assert_eq!(from_null, SearchState::Empty);
    assert_eq!(from_empty, SearchState::Empty);
}

#[test]
fn stale_completion_is_ignored() {
    let state = SearchReducer::reduce(
        loading(2),
        SearchIntent::Completed {
            request: RequestId(1),
            results: Some(one_result()),
        },
    );
    assert_eq!(state, loading(2));
}

#[test]
fn completion_after_render_is_ignored() {
    let rendered = SearchState::Rendered {
        results: vec![SearchResult::new("newer", "doc2")],
    };
    let state = SearchReducer::reduce(
        rendered.clone(),
        SearchIntent::Completed {
            request: RequestId(1),
            results: Some(one_result()),
        },
    );
    assert_eq!(state, rendered);
}

#[test]
fn failure_of_pending_request_shows_error() {
    let state = SearchReducer::reduce(
        loading(3),
        SearchIntent::Failed {
            request: RequestId(3),
            message: "unreachable".to_string(),
        },
    );
    assert_eq!(state.error_message(), Some("unreachable"));
}

#[test]
fn stale_failure_is_ignored() {
    let state = SearchReducer::reduce(
        loading(4),
        SearchIntent::Failed {
            request: RequestId(3),
            message: "old".to_string(),
        },
    );
    assert!(state.is_loading());
    assert_eq!(state.pending_request(), Some(RequestId(4)));
}

#[test]
fn direct_render_applies_regardless_of_pending_request() {
    let state = SearchReducer::reduce(
        loading(5),
        SearchIntent::Render {
            results: Some(one_result()),
        },
    );
    assert_eq!(state.result_count(), 1);
}
