//! Model-View-Intent primitives shared by the search views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Document
//!    ↑                                │
//!    └──── submit / response ─────────┘
//! ```
//!
//! The reducer is the only place where the search state changes; the
//! controller reconciles the document from whatever state it returns.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
