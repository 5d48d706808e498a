use serde::{Deserialize, Serialize};

/// Identifies one issued fetch so late completions can be matched or dropped.
pub type RequestId = u64;

/// A single hit as returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
}

/// Which engines the backend asked, and which of them answered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineReport {
    pub requested: Vec<String>,
    pub successful: Vec<String>,
    pub failed: Vec<String>,
}

/// Body of a successful `/api/search` response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub all_results: Vec<SearchResult>,
    pub count: u64,
    /// Backend search time in seconds.
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<EngineReport>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.all_results.is_empty()
    }

    /// Summary text, ignoring blank summaries.
    pub fn summary(&self) -> Option<&str> {
        self.ai_summary
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn failed_engines(&self) -> &[String] {
        self.engines
            .as_ref()
            .map(|report| report.failed.as_slice())
            .unwrap_or(&[])
    }
}
