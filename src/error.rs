use thiserror::Error;

/// Errors raised while constructing a connector from its widget parameters.
///
/// Construction failures are fatal: a widget with an invalid item list never
/// reaches the lifecycle. Anomalies discovered after construction are logged
/// and compensated for instead (see the hits-per-page recovery path).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectorError {
    /// No entry in the configured item list was flagged as the default.
    #[error(
        "hits-per-page items must flag exactly one entry as the default, found none; \
         mark one entry with `HitsPerPageItem::with_default`"
    )]
    MissingDefaultItem,

    /// More than one entry in the configured item list was flagged as the default.
    #[error(
        "hits-per-page items must flag exactly one entry as the default, found {count}; \
         keep `HitsPerPageItem::with_default` on a single entry"
    )]
    MultipleDefaultItems { count: usize },

    /// The default entry carries the empty placeholder sentinel instead of a page size.
    #[error("the default hits-per-page item must carry a numeric page size")]
    EmptyDefaultValue,
}
