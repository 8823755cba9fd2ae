use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub regions: Regions,
}

/// Search backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the search backend (e.g., "http://127.0.0.1:3001").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the search endpoint, appended to the base URL path.
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Name of the query-string parameter carrying the query.
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Human-readable texts shown in the count indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_loading_label")]
    pub loading: String,
    #[serde(default = "default_error_label")]
    pub error: String,
}

/// Element identifiers of the page regions the controller drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regions {
    #[serde(default = "default_form_id")]
    pub form: String,
    /// Name of the form input holding the query text.
    #[serde(default = "default_query_field")]
    pub query_field: String,
    #[serde(default = "default_table_id")]
    pub table: String,
    #[serde(default = "default_table_body_id")]
    pub table_body: String,
    #[serde(default = "default_count_value_id")]
    pub count_value: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

fn default_search_path() -> String {
    "/search".to_string()
}

fn default_query_param() -> String {
    "q".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_loading_label() -> String {
    "Loading...".to_string()
}

fn default_error_label() -> String {
    "Error".to_string()
}

fn default_form_id() -> String {
    "form".to_string()
}

fn default_query_field() -> String {
    "query".to_string()
}

fn default_table_id() -> String {
    "table".to_string()
}

fn default_table_body_id() -> String {
    "table-body".to_string()
}

fn default_count_value_id() -> String {
    "count-value".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            query_param: default_query_param(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            loading: default_loading_label(),
            error: default_error_label(),
        }
    }
}

impl Default for Regions {
    fn default() -> Self {
        Self {
            form: default_form_id(),
            query_field: default_query_field(),
            table: default_table_id(),
            table_body: default_table_body_id(),
            count_value: default_count_value_id(),
        }
    }
}
