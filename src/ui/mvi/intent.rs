/// Marker trait for intents: submissions, responses and direct renders.
pub trait Intent: Send + 'static {}
