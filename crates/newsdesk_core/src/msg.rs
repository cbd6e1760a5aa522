use crate::{Article, Category, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The dashboard came up; starts the initial trending-then-main sequence.
    Mounted,
    /// User picked a category.
    CategorySelected(Category),
    /// User submitted the search box (raw, untrimmed text).
    SearchSubmitted(String),
    /// Repository answer for a trending fetch.
    TrendingLoaded {
        request: RequestId,
        result: Result<Vec<Article>, String>,
    },
    /// Repository answer for a main list fetch.
    ArticlesLoaded {
        request: RequestId,
        result: Result<Vec<Article>, String>,
    },
    /// User clicked the summary button of the card with this key.
    SummaryToggled { key: String },
    /// Summarizer answer for a card.
    SummaryLoaded {
        key: String,
        request: RequestId,
        result: Result<String, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
