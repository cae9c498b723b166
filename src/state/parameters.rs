use serde::{Deserialize, Serialize};

/// The request-side search state for a single index.
///
/// This is the value a [`Helper`](crate::helper::Helper) mutates and
/// eventually ships to the search service. Connectors never edit it in
/// place; they derive a new value and hand it back through the helper or
/// through the dispose hook.
///
/// `hits_per_page` is optional on purpose: `None` means the parameter is
/// absent from the request and the service falls back to its own default.
/// `Some(0)` is a real, if unusual, page size and is never treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchParameters {
    pub index: String,
    pub query: String,
    pub page: u64,
    pub hits_per_page: Option<u64>,
}

impl SearchParameters {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, hits_per_page: Option<u64>) -> Self {
        self.hits_per_page = hits_per_page;
        self
    }
}
