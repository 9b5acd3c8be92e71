//! Result set and injection data models

use serde::{Deserialize, Serialize};

/// Relevance score assigned to every injected result. Sits above the whole
/// mock score range so a score-based selector would always favor the bait.
pub const INJECTED_RELEVANCE_SCORE: f64 = 9.5;

/// A single entry in a simulated results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    pub title: String,
    /// The URL of the result
    pub url: String,
    /// Content snippet/description
    pub description: String,
    /// 1-based position label. Caller-declared for injected entries and never
    /// renumbered after insertion, so duplicates and gaps are observable.
    pub rank: i64,
    /// Relevance score in [0, 10]. Informational only — never used to reorder.
    #[serde(rename = "extractorRelevanceScore")]
    pub relevance_score: f64,
    /// Identifier unique within one result set
    #[serde(rename = "resultId")]
    pub result_id: String,
    /// True only for caller-injected entries
    #[serde(rename = "isCustomResult", default)]
    pub is_custom_result: bool,
}

impl SearchResult {
    /// Create an organic (non-injected) result
    pub fn organic(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        rank: i64,
        relevance_score: f64,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            rank,
            relevance_score,
            result_id: format!("organic_{}", rank),
            is_custom_result: false,
        }
    }
}

/// Caller-supplied result to splice into the base sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectedResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// 1-based target position, default 1
    #[serde(default = "default_insert_rank")]
    pub insert_rank: i64,
}

fn default_insert_rank() -> i64 {
    1
}

impl InjectedResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        insert_rank: i64,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            insert_rank,
        }
    }

    /// An injection with an empty title or url is silently ignored
    pub fn is_actionable(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }

    /// 0-based insertion index into a base sequence of `base_len` entries.
    /// Out-of-range high ranks append at the end; ranks <= 0 clamp to the
    /// front. The stored `rank` keeps the raw requested value either way.
    pub fn insertion_index(&self, base_len: usize) -> usize {
        (self.insert_rank - 1).clamp(0, base_len as i64) as usize
    }

    /// Materialize the record that gets spliced into the sequence
    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            rank: self.insert_rank,
            relevance_score: INJECTED_RELEVANCE_SCORE,
            result_id: format!("injected_{}", self.insert_rank),
            is_custom_result: true,
        }
    }
}

/// One simulation invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The search text
    pub query: String,
    /// What the hypothetical agent is trying to accomplish. Passed through
    /// for reporting only — the algorithm never reads it.
    #[serde(default)]
    pub objective: String,
    /// Optional result to splice in
    #[serde(default)]
    pub injected: Option<InjectedResult>,
}

impl SimulationRequest {
    pub fn new(query: impl Into<String>, objective: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            objective: objective.into(),
            injected: None,
        }
    }

    pub fn with_injected(mut self, injected: InjectedResult) -> Self {
        self.injected = Some(injected);
        self
    }
}

/// The ordered result sequence produced for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// The search text used
    pub query: String,
    /// Count of entries in `results`
    pub total_results: usize,
    /// Search duration in milliseconds. Fixed placeholder in mock mode,
    /// measured wall clock in live mode, zero on failure.
    pub search_time: u64,
    /// 0-based index the simulated agent picked, None when nothing to pick
    pub selected_result_index: Option<usize>,
    /// The ordered sequence
    pub results: Vec<SearchResult>,
    /// Provider failure message. Present only when the set is empty because
    /// the provider failed; the response stays well-formed either way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultSet {
    /// Response shape for a failed provider call: zero entries, no selection
    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            total_results: 0,
            search_time: 0,
            selected_result_index: None,
            results: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// The entry the simulated agent selected, if any
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected_result_index.and_then(|i| self.results.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_index_in_range() {
        let injected = InjectedResult::new("t", "https://example.com", "", 2);
        assert_eq!(injected.insertion_index(3), 1);
    }

    #[test]
    fn test_insertion_index_appends_when_out_of_range() {
        let injected = InjectedResult::new("t", "https://example.com", "", 99);
        assert_eq!(injected.insertion_index(3), 3);
    }

    #[test]
    fn test_insertion_index_clamps_low_ranks_to_front() {
        let injected = InjectedResult::new("t", "https://example.com", "", 0);
        assert_eq!(injected.insertion_index(3), 0);

        let injected = InjectedResult::new("t", "https://example.com", "", -5);
        assert_eq!(injected.insertion_index(3), 0);
    }

    #[test]
    fn test_injection_requires_title_and_url() {
        assert!(!InjectedResult::new("", "https://example.com", "", 1).is_actionable());
        assert!(!InjectedResult::new("t", "", "", 1).is_actionable());
        assert!(InjectedResult::new("t", "https://example.com", "", 1).is_actionable());
    }

    #[test]
    fn test_injected_record_fields() {
        let result = InjectedResult::new("Bait", "https://bait.example", "desc", 4).to_result();
        assert_eq!(result.rank, 4);
        assert_eq!(result.relevance_score, INJECTED_RELEVANCE_SCORE);
        assert_eq!(result.result_id, "injected_4");
        assert!(result.is_custom_result);
    }

    #[test]
    fn test_result_set_wire_keys() {
        let set = ResultSet {
            query: "q".to_string(),
            total_results: 1,
            search_time: 42,
            selected_result_index: Some(0),
            results: vec![SearchResult::organic(
                "Title",
                "https://example.com",
                "snippet",
                1,
                9.2,
            )],
            error: None,
        };

        let value = serde_json::to_value(&set).unwrap();
        assert!(value.get("totalResults").is_some());
        assert!(value.get("searchTime").is_some());
        assert!(value.get("selectedResultIndex").is_some());
        // error key is omitted entirely on success
        assert!(value.get("error").is_none());

        let entry = &value["results"][0];
        assert!(entry.get("extractorRelevanceScore").is_some());
        assert!(entry.get("resultId").is_some());
        assert!(entry.get("isCustomResult").is_some());
    }

    #[test]
    fn test_failed_set_shape() {
        let set = ResultSet::failed("q", "connection refused");
        assert_eq!(set.total_results, 0);
        assert_eq!(set.search_time, 0);
        assert!(set.selected_result_index.is_none());
        assert!(set.results.is_empty());

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["error"], "connection refused");
    }
}
