use crate::config::{Labels, Regions};
use crate::dom::{Document, TableRow};
use crate::ui::search::SearchState;

/// Brings the table, table body and count indicator in line with `state`.
///
/// The table body is always replaced as a whole, so applying the same state
/// twice leaves the same document.
pub fn reconcile<D: Document>(
    document: &mut D,
    regions: &Regions,
    labels: &Labels,
    state: &SearchState,
) {
    match state {
        SearchState::Idle => {}
        SearchState::Loading { .. } => {
            hide_table(document, regions);
            document.set_text_content(&regions.count_value, &labels.loading);
        }
        SearchState::Empty => {
            hide_table(document, regions);
            document.set_text_content(&regions.count_value, "0");
        }
        SearchState::Error { .. } => {
            hide_table(document, regions);
            document.set_text_content(&regions.count_value, &labels.error);
        }
        SearchState::Rendered { results } => {
            let rows = results.iter().map(TableRow::from_result).collect();
            document.replace_rows(&regions.table_body, rows);
            document.set_text_content(&regions.count_value, &results.len().to_string());
            document.set_hidden(&regions.table, false);
        }
    }
}

fn hide_table<D: Document>(document: &mut D, regions: &Regions) {
    document.set_hidden(&regions.table, true);
    document.replace_rows(&regions.table_body, Vec::new());
}
