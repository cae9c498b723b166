//! Framework-agnostic search-UI connectors.
//!
//! A connector is a typed widget controller: it owns a slice of the shared
//! search request, derives a render snapshot for the embedder's view layer,
//! and exposes refine handles that edit the request and queue a search. The
//! composition runtime that schedules the lifecycle calls, issues network
//! requests, and paints the view lives in the embedding application, not
//! here.
//!
//! The root module re-exports the connector types and collaborator seams so
//! embedders can wire a widget without digging through the module hierarchy.

pub mod connectors;
mod error;
mod helper;
pub mod state;
pub mod widget;

pub use connectors::{
    HitsPerPage, HitsPerPageItem, HitsPerPageParams, HitsPerPageRenderState, Refine, Stats,
    StatsRenderState, TransformItems, UrlFactory,
};
pub use error::ConnectorError;
pub use helper::{Helper, SharedHelper};
pub use state::{IndexUiState, SearchParameters, SearchResults, UiState};
pub use widget::{CreateUrl, DisposeOptions, InitOptions, RenderOptions, Widget};
