use serde::{Deserialize, Serialize};

/// Query text captured from the form at submission time.
///
/// Carried verbatim: no trimming or normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One row of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matched text; may contain CR-LF line breaks.
    #[serde(rename = "match")]
    pub matched: String,
    /// Label of the work the match came from.
    pub work: String,
}

impl SearchResult {
    pub fn new(matched: impl Into<String>, work: impl Into<String>) -> Self {
        Self {
            matched: matched.into(),
            work: work.into(),
        }
    }
}

/// Response envelope returned by the backend.
///
/// `results` is `None` both for an explicit `null` and a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}
