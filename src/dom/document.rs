use std::collections::{BTreeMap, HashMap};

use crate::config::Regions;
use crate::dom::event::SubmitEvent;
use crate::dom::markup::{rows_to_html, TableRow};

/// Host page the controller writes into, addressed by element id.
///
/// Writes to ids the host does not know are ignored by the host.
pub trait Document: Send + 'static {
    fn set_hidden(&mut self, id: &str, hidden: bool);

    fn set_text_content(&mut self, id: &str, text: &str);

    /// Replaces every child row of `id` with `rows`.
    fn replace_rows(&mut self, id: &str, rows: Vec<TableRow>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub hidden: bool,
    pub text: String,
    pub rows: Vec<TableRow>,
    /// Named input values, for form elements.
    pub inputs: BTreeMap<String, String>,
}

/// In-memory page with a fixed set of elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the regions' elements present: an empty form input,
    /// a hidden table and an empty count indicator.
    pub fn with_regions(regions: &Regions) -> Self {
        let mut document = Self::new();
        document.insert(&regions.form);
        document.insert(&regions.table).hidden = true;
        document.insert(&regions.table_body);
        document.insert(&regions.count_value);
        document.set_input_value(&regions.form, &regions.query_field, "");
        document
    }

    /// Adds an empty element, returning it for further setup.
    pub fn insert(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).is_some_and(|element| element.hidden)
    }

    pub fn text_content(&self, id: &str) -> &str {
        self.element(id)
            .map(|element| element.text.as_str())
            .unwrap_or("")
    }

    pub fn rows(&self, id: &str) -> &[TableRow] {
        self.element(id)
            .map(|element| element.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn rows_html(&self, id: &str) -> String {
        rows_to_html(self.rows(id))
    }

    pub fn input_value(&self, form: &str, field: &str) -> Option<&str> {
        self.element(form)
            .and_then(|element| element.inputs.get(field))
            .map(String::as_str)
    }

    pub fn set_input_value(&mut self, form: &str, field: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(form) {
            element.inputs.insert(field.to_string(), value.to_string());
        } else {
            tracing::warn!(form, "Input update for unknown form ignored");
        }
    }

    /// Builds a submit event from the form's current input values.
    pub fn submit_event(&self, form: &str) -> SubmitEvent {
        let mut event = SubmitEvent::new(form);
        if let Some(element) = self.element(form) {
            for (name, value) in &element.inputs {
                event = event.with_field(name.as_str(), value.as_str());
            }
        }
        event
    }

    fn existing(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            tracing::warn!(id, "Write to unknown element ignored");
        }
        element
    }
}

impl Document for MemoryDocument {
    fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(element) = self.existing(id) {
            element.hidden = hidden;
        }
    }

    fn set_text_content(&mut self, id: &str, text: &str) {
        if let Some(element) = self.existing(id) {
            element.text = text.to_string();
        }
    }

    fn replace_rows(&mut self, id: &str, rows: Vec<TableRow>) {
        if let Some(element) = self.existing(id) {
            element.rows = rows;
        }
    }
}
