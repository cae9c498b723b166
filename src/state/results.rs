use serde::Deserialize;

/// The response-side summary a search service returns for one request.
///
/// Only the fields connectors consume are modeled; the service response
/// carries plenty more (facets, pagination metadata, raw hits) and unknown
/// keys are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResults {
    /// The query string the service actually ran, after any rewriting.
    pub query: String,
    /// Total number of records matching the query across all pages.
    pub total_hits: u64,
    /// Server-side processing time for the request.
    #[serde(rename = "processingTimeMS")]
    pub processing_time_ms: u64,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, total_hits: u64) -> Self {
        Self {
            query: query.into(),
            total_hits,
            processing_time_ms: 0,
        }
    }

    /// True when the query matched nothing at all.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.total_hits == 0
    }
}
