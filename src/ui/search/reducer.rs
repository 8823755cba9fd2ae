use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Submit { request, query } => SearchState::Loading { request, query },
            SearchIntent::Completed { request, results } => {
                if state.pending_request() == Some(request) {
                    SearchState::from_results(results)
                } else {
                    // Superseded by a newer submission
                    state
                }
            }
            SearchIntent::Failed { request, message } => {
                if state.pending_request() == Some(request) {
                    SearchState::Error { message }
                } else {
                    state
                }
            }
            SearchIntent::Render { results } => SearchState::from_results(results),
        }
    }
}
