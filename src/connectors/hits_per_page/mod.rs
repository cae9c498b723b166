//! Page-size selector connector.
//!
//! Owns the configured list of page-size choices, keeps `is_refined` in sync
//! with the live request, and hands refine plus URL construction to the
//! embedder's render callback. The widget never talks to the search service;
//! it edits shared request state and asks the helper to search.

mod items;
mod render_state;

pub use items::HitsPerPageItem;
pub use render_state::{HitsPerPageRenderState, Refine, UrlFactory};


use std::fmt;

use log::warn;

use crate::error::ConnectorError;
use crate::helper::SharedHelper;
use crate::state::{IndexUiState, SearchParameters};
use crate::widget::{CreateUrl, DisposeOptions, InitOptions, RenderOptions, Widget};

/// Widget-kind tag reported through [`Widget::kind`].
pub const WIDGET_KIND: &str = "hits-per-page";

/// Hook rearranging or filtering the normalized items before each render.
pub type TransformItems = Box<dyn Fn(Vec<HitsPerPageItem>) -> Vec<HitsPerPageItem>>;

/// Configuration for [`HitsPerPage`]: the selectable items plus an optional
/// transform applied to the normalized list on every render.
pub struct HitsPerPageParams {
    items: Vec<HitsPerPageItem>,
    transform_items: Option<TransformItems>,
}

impl HitsPerPageParams {
    pub fn new(items: Vec<HitsPerPageItem>) -> Self {
        Self {
            items,
            transform_items: None,
        }
    }

    #[must_use]
    pub fn with_transform_items(
        mut self,
        transform: impl Fn(Vec<HitsPerPageItem>) -> Vec<HitsPerPageItem> + 'static,
    ) -> Self {
        self.transform_items = Some(Box::new(transform));
        self
    }
}

/// The page-size selector widget.
///
/// Construction validates the item list (exactly one default entry carrying
/// a number) and retains the default value as the fallback for routed-state
/// import. The render callback receives a fresh [`HitsPerPageRenderState`]
/// on `init` and after every completed search.
pub struct HitsPerPage<R> {
    render_fn: R,
    unmount_fn: Option<Box<dyn FnOnce()>>,
    items: Vec<HitsPerPageItem>,
    transform_items: Option<TransformItems>,
    default_value: u64,
}

impl<R> HitsPerPage<R>
where
    R: FnMut(&HitsPerPageRenderState, bool),
{
    pub fn new(params: HitsPerPageParams, render_fn: R) -> Result<Self, ConnectorError> {
        let default_value = validated_default(&params.items)?;
        Ok(Self {
            render_fn,
            unmount_fn: None,
            items: params.items,
            transform_items: params.transform_items,
            default_value,
        })
    }

    /// Install a callback fired exactly once when the widget is disposed.
    #[must_use]
    pub fn with_unmount(mut self, unmount: impl FnOnce() + 'static) -> Self {
        self.unmount_fn = Some(Box::new(unmount));
        self
    }

    /// The page size of the item flagged as the default.
    #[must_use]
    pub fn default_value(&self) -> u64 {
        self.default_value
    }

    /// When the live page size matches no configured item, warn and prepend
    /// the empty placeholder so select-style views have a blank entry to
    /// fall back to. The placeholder stays for the rest of the widget's
    /// life.
    fn recover_unlisted_value(&mut self, current: Option<u64>) {
        if self.items.iter().any(|item| item.value == current) {
            return;
        }
        warn!(
            "the current page size ({}) is not set through the configured hits-per-page items",
            DisplayValue(current)
        );
        warn!(
            "no hits-per-page item matches the current page size ({}); prepending an empty placeholder entry",
            DisplayValue(current)
        );
        self.items.insert(0, HitsPerPageItem::empty());
    }

    fn render_state(
        &self,
        helper: &SharedHelper,
        create_url: &CreateUrl,
        has_no_results: bool,
    ) -> HitsPerPageRenderState {
        let snapshot = helper.snapshot();
        let mut normalized = items::normalize(&self.items, snapshot.hits_per_page);
        if let Some(transform) = &self.transform_items {
            normalized = transform(normalized);
        }
        let refine = Refine::new(helper.clone());
        let urls = UrlFactory::new(snapshot, create_url.clone(), self.default_value);
        HitsPerPageRenderState::new(normalized, refine, urls, has_no_results)
    }
}

impl<R> Widget for HitsPerPage<R>
where
    R: FnMut(&HitsPerPageRenderState, bool),
{
    fn kind(&self) -> &'static str {
        WIDGET_KIND
    }

    fn init(&mut self, options: InitOptions<'_>) {
        let current = options.helper().snapshot().hits_per_page;
        self.recover_unlisted_value(current);

        // No search has completed yet, so render the no-results shape.
        let state = self.render_state(options.helper(), options.create_url(), true);
        (self.render_fn)(&state, true);
    }

    fn render(&mut self, options: RenderOptions<'_>) {
        let has_no_results = options.results().has_no_results();
        let state = self.render_state(options.helper(), options.create_url(), has_no_results);
        (self.render_fn)(&state, false);
    }

    fn dispose(&mut self, options: DisposeOptions<'_>) -> Option<SearchParameters> {
        if let Some(unmount) = self.unmount_fn.take() {
            unmount();
        }
        Some(options.state().clone().with_page_size(None))
    }

    fn export_ui_state(
        &self,
        mut ui_state: IndexUiState,
        search_parameters: &SearchParameters,
    ) -> IndexUiState {
        ui_state.hits_per_page = exported_hits_per_page(search_parameters, self.default_value);
        ui_state
    }

    fn apply_ui_state(
        &self,
        search_parameters: SearchParameters,
        ui_state: &IndexUiState,
    ) -> SearchParameters {
        let value = ui_state.hits_per_page.unwrap_or(self.default_value);
        search_parameters.with_page_size(Some(value))
    }
}

/// The page-size value as it appears in routed state: absent when unset or
/// when it equals the widget default.
fn exported_hits_per_page(parameters: &SearchParameters, default_value: u64) -> Option<u64> {
    parameters
        .hits_per_page
        .filter(|value| *value != default_value)
}

fn validated_default(items: &[HitsPerPageItem]) -> Result<u64, ConnectorError> {
    let mut defaults = items.iter().filter(|item| item.default);
    let Some(first) = defaults.next() else {
        return Err(ConnectorError::MissingDefaultItem);
    };
    let extras = defaults.count();
    if extras > 0 {
        return Err(ConnectorError::MultipleDefaultItems { count: extras + 1 });
    }
    first.value.ok_or(ConnectorError::EmptyDefaultValue)
}

struct DisplayValue(Option<u64>);

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("unset"),
        }
    }
}
