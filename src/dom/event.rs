/// Form submission carrying the form's field values at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    form: String,
    fields: Vec<(String, String)>,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            fields: Vec::new(),
            default_prevented: false,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    /// Value of the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Suppresses the host's default submit behavior (page navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
