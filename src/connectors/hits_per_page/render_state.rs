use crate::helper::SharedHelper;
use crate::state::{IndexUiState, SearchParameters, UiState};
use crate::widget::CreateUrl;

use super::HitsPerPageItem;

/// Clonable handle that applies a page-size choice to the live request.
///
/// Handed out through the render payload so view code can wire it straight
/// into selection events without holding the whole widget.
#[derive(Clone)]
pub struct Refine {
    helper: SharedHelper,
}

impl Refine {
    pub(super) fn new(helper: SharedHelper) -> Self {
        Self { helper }
    }

    /// Sets the page size to `Some(n)`, including `Some(0)`, or clears it
    /// with `None`, then requests a search either way.
    pub fn refine(&self, value: Option<u64>) {
        self.helper.update(|helper| {
            helper.set_page_size(value);
            helper.search();
        });
    }
}

/// Builds shareable URLs for hypothetical page-size choices.
///
/// Bound to the request snapshot of the lifecycle call that produced it, so
/// every candidate URL reflects the page the user was actually looking at.
#[derive(Clone)]
pub struct UrlFactory {
    base: SearchParameters,
    create_url: CreateUrl,
    default_value: u64,
}

impl UrlFactory {
    pub(super) fn new(base: SearchParameters, create_url: CreateUrl, default_value: u64) -> Self {
        Self {
            base,
            create_url,
            default_value,
        }
    }

    /// The URL the embedder's router produces for the snapshot with the
    /// candidate value applied. The default value is omitted from the routed
    /// state, mirroring `export_ui_state`.
    pub fn url_for(&self, value: Option<u64>) -> String {
        let hypothetical = self.base.clone().with_page_size(value);
        let index_state = IndexUiState {
            hits_per_page: super::exported_hits_per_page(&hypothetical, self.default_value),
            ..IndexUiState::default()
        };
        let ui_state = UiState::for_index(hypothetical.index, index_state);
        (self.create_url)(&ui_state)
    }
}

/// Everything the render callback needs to draw the widget and react to the
/// user: the normalized item list, the no-results flag, a refine handle, and
/// URL construction for each candidate value.
///
/// Owns its data outright so callbacks can stash or thread it without
/// borrowing from the widget.
pub struct HitsPerPageRenderState {
    items: Vec<HitsPerPageItem>,
    refine: Refine,
    urls: UrlFactory,
    has_no_results: bool,
}

impl HitsPerPageRenderState {
    pub(super) fn new(
        items: Vec<HitsPerPageItem>,
        refine: Refine,
        urls: UrlFactory,
        has_no_results: bool,
    ) -> Self {
        Self {
            items,
            refine,
            urls,
            has_no_results,
        }
    }

    /// The page-size choices in display order, `is_refined` freshly derived.
    #[must_use]
    pub fn items(&self) -> &[HitsPerPageItem] {
        &self.items
    }

    /// True when the search that triggered this render matched nothing, and
    /// on the first render before any search has completed.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.has_no_results
    }

    /// Apply a page-size choice to the live request and search.
    pub fn refine(&self, value: Option<u64>) {
        self.refine.refine(value);
    }

    /// A standalone refine handle that outlives this payload.
    #[must_use]
    pub fn refine_handle(&self) -> Refine {
        self.refine.clone()
    }

    /// The shareable URL for a candidate page size.
    #[must_use]
    pub fn url_for(&self, value: Option<u64>) -> String {
        self.urls.url_for(value)
    }

    /// A standalone URL factory that outlives this payload.
    #[must_use]
    pub fn url_factory(&self) -> UrlFactory {
        self.urls.clone()
    }
}
