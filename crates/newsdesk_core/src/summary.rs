use std::collections::BTreeMap;

use crate::{Article, RequestId};

/// Material handed to the summarizer for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInput {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl SummaryInput {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            content: article.content.clone(),
        }
    }

    /// Body to summarize: content when present, otherwise the description.
    pub fn material(&self) -> Option<&str> {
        [self.content.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}

/// Summary sub-state of a single card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Collapsed,
    Summarizing { request: RequestId },
    Shown(String),
    Failed(String),
}

/// What a toggle on a card asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toggle {
    Start,
    Hidden,
    Ignored,
}

/// Card-local summary states keyed by article key. Lives beside the list
/// controller and never influences list state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SummaryCards {
    cards: BTreeMap<String, SummaryState>,
}

impl SummaryCards {
    pub(crate) fn state(&self, key: &str) -> SummaryState {
        self.cards.get(key).cloned().unwrap_or_default()
    }

    /// Decides the transition for a click; `begin` must follow a `Start`.
    pub(crate) fn toggle(&mut self, key: &str) -> Toggle {
        match self.state(key) {
            SummaryState::Collapsed | SummaryState::Failed(_) => Toggle::Start,
            SummaryState::Shown(_) => {
                self.cards.remove(key);
                Toggle::Hidden
            }
            SummaryState::Summarizing { .. } => Toggle::Ignored,
        }
    }

    pub(crate) fn begin(&mut self, key: &str, request: RequestId) {
        self.cards
            .insert(key.to_string(), SummaryState::Summarizing { request });
    }

    /// Applies a summarizer response. Returns false when the card is gone or
    /// a different request is outstanding for it.
    pub(crate) fn resolve(
        &mut self,
        key: &str,
        request: RequestId,
        result: Result<String, String>,
    ) -> bool {
        let Some(entry) = self.cards.get_mut(key) else {
            return false;
        };
        if *entry != (SummaryState::Summarizing { request }) {
            return false;
        }
        *entry = match result {
            Ok(text) => SummaryState::Shown(text),
            Err(message) => SummaryState::Failed(message),
        };
        true
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.cards.retain(|key, _| keep(key));
    }
}
