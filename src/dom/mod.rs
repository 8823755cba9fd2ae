//! Host page abstraction: element-addressed document, submit events and
//! text-safe table rows.

mod document;
mod event;
mod markup;

pub use document::{Document, Element, MemoryDocument};
pub use event::SubmitEvent;
pub use markup::{escape_text, rows_to_html, Cell, Fragment, TableRow};
