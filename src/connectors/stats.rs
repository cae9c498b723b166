//! Result statistics connector.
//!
//! Render-only: mirrors the delivered result counts and timings into a
//! snapshot for the embedder's view code. Holds no request parameters, so
//! the UI-state hooks stay at their pass-through defaults and `dispose`
//! returns nothing to persist.

use crate::state::SearchParameters;
use crate::widget::{DisposeOptions, InitOptions, RenderOptions, Widget};

/// Widget-kind tag reported through [`Widget::kind`].
pub const WIDGET_KIND: &str = "stats";

/// Snapshot handed to the render callback.
///
/// `processing_time_ms` is `None` until the first search completes; the
/// other fields fall back to the live request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsRenderState {
    pub query: String,
    pub total_hits: u64,
    pub processing_time_ms: Option<u64>,
    pub hits_per_page: Option<u64>,
}

/// The statistics widget.
pub struct Stats<R> {
    render_fn: R,
    unmount_fn: Option<Box<dyn FnOnce()>>,
}

impl<R> Stats<R>
where
    R: FnMut(&StatsRenderState, bool),
{
    pub fn new(render_fn: R) -> Self {
        Self {
            render_fn,
            unmount_fn: None,
        }
    }

    /// Install a callback fired exactly once when the widget is disposed.
    #[must_use]
    pub fn with_unmount(mut self, unmount: impl FnOnce() + 'static) -> Self {
        self.unmount_fn = Some(Box::new(unmount));
        self
    }
}

impl<R> Widget for Stats<R>
where
    R: FnMut(&StatsRenderState, bool),
{
    fn kind(&self) -> &'static str {
        WIDGET_KIND
    }

    fn init(&mut self, options: InitOptions<'_>) {
        let snapshot = options.helper().snapshot();
        let state = StatsRenderState {
            query: snapshot.query,
            total_hits: 0,
            processing_time_ms: None,
            hits_per_page: snapshot.hits_per_page,
        };
        (self.render_fn)(&state, true);
    }

    fn render(&mut self, options: RenderOptions<'_>) {
        let results = options.results();
        let snapshot = options.helper().snapshot();
        let state = StatsRenderState {
            query: results.query.clone(),
            total_hits: results.total_hits,
            processing_time_ms: Some(results.processing_time_ms),
            hits_per_page: snapshot.hits_per_page,
        };
        (self.render_fn)(&state, false);
    }

    fn dispose(&mut self, _options: DisposeOptions<'_>) -> Option<SearchParameters> {
        if let Some(unmount) = self.unmount_fn.take() {
            unmount();
        }
        None
    }
}
