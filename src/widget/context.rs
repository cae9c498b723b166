use std::rc::Rc;

use crate::helper::SharedHelper;
use crate::state::{SearchParameters, SearchResults, UiState};

/// Embedder-supplied URL construction callback.
///
/// The crate never builds URLs itself; widgets hand the callback a minimal
/// [`UiState`] describing a hypothetical refinement and surface whatever
/// string the embedder's router produces.
pub type CreateUrl = Rc<dyn Fn(&UiState) -> String>;

/// Shared inputs handed to a widget's first lifecycle call.
///
/// Wrapping the inputs in an options struct keeps the [`Widget`](super::Widget)
/// trait stable for external implementors when new shared state is added
/// later.
pub struct InitOptions<'a> {
    helper: &'a SharedHelper,
    create_url: &'a CreateUrl,
}

impl<'a> InitOptions<'a> {
    #[must_use]
    pub fn new(helper: &'a SharedHelper, create_url: &'a CreateUrl) -> Self {
        Self { helper, create_url }
    }

    /// Access the shared search-state helper.
    #[must_use]
    pub fn helper(&self) -> &'a SharedHelper {
        self.helper
    }

    /// Access the embedder's URL construction callback.
    #[must_use]
    pub fn create_url(&self) -> &'a CreateUrl {
        self.create_url
    }
}

/// Shared inputs handed to a widget on every completed search.
pub struct RenderOptions<'a> {
    helper: &'a SharedHelper,
    results: &'a SearchResults,
    create_url: &'a CreateUrl,
}

impl<'a> RenderOptions<'a> {
    #[must_use]
    pub fn new(
        helper: &'a SharedHelper,
        results: &'a SearchResults,
        create_url: &'a CreateUrl,
    ) -> Self {
        Self {
            helper,
            results,
            create_url,
        }
    }

    /// Access the shared search-state helper.
    #[must_use]
    pub fn helper(&self) -> &'a SharedHelper {
        self.helper
    }

    /// Access the results of the search that triggered this render.
    #[must_use]
    pub fn results(&self) -> &'a SearchResults {
        self.results
    }

    /// Access the embedder's URL construction callback.
    #[must_use]
    pub fn create_url(&self) -> &'a CreateUrl {
        self.create_url
    }
}

/// Inputs handed to a widget as it is torn down.
pub struct DisposeOptions<'a> {
    state: &'a SearchParameters,
}

impl<'a> DisposeOptions<'a> {
    #[must_use]
    pub fn new(state: &'a SearchParameters) -> Self {
        Self { state }
    }

    /// Access the request state at teardown time.
    #[must_use]
    pub fn state(&self) -> &'a SearchParameters {
        self.state
    }
}
