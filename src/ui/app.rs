use crate::controller::{SearchController, SearchTask};
use crate::dom::{MemoryDocument, TableRow};
use crate::search::SearchBackend;
use crate::ui::search::SearchState;

/// Terminal front end state around a search controller.
///
/// The controller's `MemoryDocument` is the single source of what is drawn:
/// the query input lives in the form element, the table and count in their
/// regions.
pub struct App<B> {
    controller: SearchController<B, MemoryDocument>,
    should_quit: bool,
    table_offset: usize,
}

impl<B: SearchBackend> App<B> {
    pub fn new(controller: SearchController<B, MemoryDocument>) -> Self {
        Self {
            controller,
            should_quit: false,
            table_offset: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query_text(&self) -> String {
        let regions = self.controller.regions();
        self.controller.with_document(|document| {
            document
                .input_value(&regions.form, &regions.query_field)
                .unwrap_or_default()
                .to_string()
        })
    }

    pub fn push_char(&mut self, ch: char) {
        self.push_str(ch.encode_utf8(&mut [0; 4]));
    }

    /// Appends `text` to the query input with a single document write.
    pub fn push_str(&mut self, text: &str) {
        let mut query = self.query_text();
        query.push_str(text);
        self.set_query_text(&query);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.query_text();
        text.pop();
        self.set_query_text(&text);
    }

    pub fn clear_query(&mut self) {
        self.set_query_text("");
    }

    fn set_query_text(&mut self, text: &str) {
        let regions = self.controller.regions().clone();
        self.controller.with_document_mut(|document| {
            document.set_input_value(&regions.form, &regions.query_field, text)
        });
    }

    /// Submits the form with its current input values.
    pub fn submit(&mut self) -> SearchTask {
        let form = self.controller.regions().form.clone();
        let mut event = self
            .controller
            .with_document(|document| document.submit_event(&form));
        self.table_offset = 0;
        self.controller.handle_submit(&mut event)
    }

    pub fn count_text(&self) -> String {
        let id = &self.controller.regions().count_value;
        self.controller
            .with_document(|document| document.text_content(id).to_string())
    }

    pub fn table_visible(&self) -> bool {
        let id = &self.controller.regions().table;
        self.controller
            .with_document(|document| !document.is_hidden(id))
    }

    pub fn rows(&self) -> Vec<TableRow> {
        let id = &self.controller.regions().table_body;
        self.controller
            .with_document(|document| document.rows(id).to_vec())
    }

    pub fn state(&self) -> SearchState {
        self.controller.state()
    }

    pub fn table_offset(&self) -> usize {
        self.table_offset
    }

    pub fn scroll(&mut self, delta: isize) {
        let row_count = self.state().result_count();
        let max_offset = row_count.saturating_sub(1);
        self.table_offset = self
            .table_offset
            .saturating_add_signed(delta)
            .min(max_offset);
    }
}
