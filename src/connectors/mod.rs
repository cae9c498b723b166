//! The widget implementations.
//!
//! Connectors are deliberately alike: validate configuration up front, build
//! an owned render snapshot from the shared state on `init` and after every
//! search, and keep teardown idempotent. New connectors should follow the
//! same recipe.

pub mod hits_per_page;
pub mod stats;

pub use hits_per_page::{
    HitsPerPage, HitsPerPageItem, HitsPerPageParams, HitsPerPageRenderState, Refine,
    TransformItems, UrlFactory,
};
pub use stats::{Stats, StatsRenderState};
