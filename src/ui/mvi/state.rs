/// Marker trait for view state.
///
/// `PartialEq` lets callers skip reconciling when an intent changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
