use crate::{
    image_or_placeholder, Article, AppState, Category, ListPhase, ListState, Locale,
    SummaryState, Text,
};

/// Placeholder cards shown while the main list loads.
pub const MAIN_SKELETONS: usize = 9;
/// Placeholder cards shown while the trending strip loads.
pub const TRENDING_SKELETONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    Category(Category),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading { skeletons: usize },
    Error(String),
    Empty,
    Ready(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    Collapsed,
    Generating,
    Shown(String),
    Failed(String),
}

impl SummaryView {
    pub fn button_text(&self, locale: Locale) -> &'static str {
        match self {
            SummaryView::Collapsed => Text::AiSummary.get(locale),
            SummaryView::Generating => Text::Generating.get(locale),
            SummaryView::Shown(_) => Text::HideSummary.get(locale),
            SummaryView::Failed(_) => Text::RetrySummary.get(locale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub title: String,
    pub source_name: String,
    /// Raw timestamp; formatting is locale dependent and happens at render.
    pub published_at: String,
    pub description: Option<String>,
    pub url: String,
    /// Always safe to hand to a renderer.
    pub image_url: String,
    pub summary: SummaryView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub heading: Heading,
    pub main: ListView,
    pub trending: ListView,
    pub active_category: Option<Category>,
    pub search_term: Option<String>,
    pub initial_load_complete: bool,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let heading = match state.search_term() {
            Some(term) => Heading::Search(term.to_string()),
            None => Heading::Category(state.active_category().unwrap_or(Category::DEFAULT)),
        };
        Self {
            heading,
            main: list_view(state, state.main(), MAIN_SKELETONS),
            trending: list_view(state, state.trending(), TRENDING_SKELETONS),
            active_category: state.active_category(),
            search_term: state.search_term().map(ToOwned::to_owned),
            initial_load_complete: state.initial_load_complete(),
        }
    }
}

fn list_view(state: &AppState, list: &ListState, skeletons: usize) -> ListView {
    match list.phase() {
        ListPhase::Idle | ListPhase::Loading { .. } => ListView::Loading { skeletons },
        ListPhase::Failed(message) => ListView::Error(message.clone()),
        ListPhase::Ready(articles) if articles.is_empty() => ListView::Empty,
        ListPhase::Ready(articles) => ListView::Ready(
            articles
                .iter()
                .map(|article| card_view(article, state.summary_state(article.key())))
                .collect(),
        ),
    }
}

fn card_view(article: &Article, summary: SummaryState) -> CardView {
    CardView {
        key: article.key().to_string(),
        title: article.title.clone(),
        source_name: article.source.name.clone(),
        published_at: article.published_at.clone(),
        description: article.description.clone(),
        url: article.url.clone(),
        image_url: image_or_placeholder(article),
        summary: match summary {
            SummaryState::Collapsed => SummaryView::Collapsed,
            SummaryState::Summarizing { .. } => SummaryView::Generating,
            SummaryState::Shown(text) => SummaryView::Shown(text),
            SummaryState::Failed(message) => SummaryView::Failed(message),
        },
    }
}
