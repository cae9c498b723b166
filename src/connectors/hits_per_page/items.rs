/// One selectable page-size choice offered to the user.
///
/// `value: None` is the empty placeholder only ever produced by the
/// unlisted-value recovery path; items built through [`HitsPerPageItem::new`]
/// always carry a number. `is_refined` is derived state: it is recomputed
/// from the live request on every lifecycle call and any value set by the
/// caller is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitsPerPageItem {
    pub label: String,
    pub value: Option<u64>,
    pub default: bool,
    pub is_refined: bool,
}

impl HitsPerPageItem {
    pub fn new(value: u64, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            default: false,
            is_refined: false,
        }
    }

    /// Flag this item as the widget's default choice. Exactly one item per
    /// widget must carry the flag.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// The placeholder entry prepended when the live page size matches no
    /// configured item.
    pub(crate) fn empty() -> Self {
        Self {
            label: String::new(),
            value: None,
            default: false,
            is_refined: false,
        }
    }
}

/// Recomputes `is_refined` against the current page size without touching
/// the source list. An unset current value refines only the empty
/// placeholder, never a configured item.
pub(crate) fn normalize(items: &[HitsPerPageItem], current: Option<u64>) -> Vec<HitsPerPageItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            item.is_refined = item.value == current;
            item
        })
        .collect()
}
