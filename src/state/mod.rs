mod parameters;
mod results;
mod ui;

pub use parameters::SearchParameters;
pub use results::SearchResults;
pub use ui::{IndexUiState, UiState};

#[cfg(test)]
mod tests;
