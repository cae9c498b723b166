mod context;

pub use context::{CreateUrl, DisposeOptions, InitOptions, RenderOptions};

use crate::state::{IndexUiState, SearchParameters};

/// A search-UI widget driven by an external composition runtime.
///
/// The runtime calls `init` once before the first search, `render` after
/// every completed search, and `dispose` when the widget leaves the page.
/// The two UI-state hooks let the runtime round-trip the widget's share of
/// the routed state; their defaults pass everything through untouched so
/// render-only widgets need not implement them.
pub trait Widget {
    /// Stable tag identifying the widget kind, mainly for diagnostics and
    /// runtime bookkeeping.
    fn kind(&self) -> &'static str;

    /// Called once before the first search completes.
    fn init(&mut self, options: InitOptions<'_>);

    /// Called after every completed search with the fresh results.
    fn render(&mut self, options: RenderOptions<'_>);

    /// Called when the widget is removed. Returns the request state the
    /// runtime should keep using, with this widget's parameters cleared, or
    /// `None` when the widget holds no request parameters.
    fn dispose(&mut self, options: DisposeOptions<'_>) -> Option<SearchParameters>;

    /// Fold this widget's share of the request state into the routed UI
    /// snapshot.
    fn export_ui_state(
        &self,
        ui_state: IndexUiState,
        search_parameters: &SearchParameters,
    ) -> IndexUiState {
        let _ = search_parameters;
        ui_state
    }

    /// Apply a routed UI snapshot back onto the request state.
    fn apply_ui_state(
        &self,
        search_parameters: SearchParameters,
        ui_state: &IndexUiState,
    ) -> SearchParameters {
        let _ = ui_state;
        search_parameters
    }
}
