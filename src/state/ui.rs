use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The routed UI snapshot for a single index.
///
/// Every field is optional and absent fields stay absent on the wire, so a
/// widget that exports nothing leaves no trace in the routed state. This is
/// what keeps shared URLs minimal: only parameters a widget actively owns
/// ever show up here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexUiState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u64>,
}

/// The full routed snapshot: one [`IndexUiState`] per logical index, in
/// insertion order.
///
/// Serializes as a plain JSON object keyed by index name, which is the shape
/// URL-construction callbacks and routers exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiState {
    indices: IndexMap<String, IndexUiState>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot holding a single index entry.
    pub fn for_index(index: impl Into<String>, state: IndexUiState) -> Self {
        let mut ui_state = Self::new();
        ui_state.insert(index, state);
        ui_state
    }

    pub fn insert(&mut self, index: impl Into<String>, state: IndexUiState) {
        self.indices.insert(index.into(), state);
    }

    #[must_use]
    pub fn get(&self, index: &str) -> Option<&IndexUiState> {
        self.indices.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexUiState)> {
        self.indices.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
