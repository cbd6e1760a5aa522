use newsdesk_logging::newsdesk_debug;

use crate::summary::{SummaryCards, Toggle};
use crate::view_model::AppViewModel;
use crate::{dedupe_by_key, Article, Category, Effect, SummaryInput, SummaryState};

/// Tag carried by every outbound request so late answers can be matched
/// against the latest one issued.
pub type RequestId = u64;

/// Lifecycle of one list (main or trending).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading {
        request: RequestId,
        query: String,
    },
    Ready(Vec<Article>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    phase: ListPhase,
}

impl ListState {
    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ListPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.phase {
            ListPhase::Loading { request, .. } => Some(request),
            _ => None,
        }
    }

    pub fn articles(&self) -> &[Article] {
        match &self.phase {
            ListPhase::Ready(articles) => articles,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enters loading for `request`, returning a request it supersedes.
    fn begin(&mut self, request: RequestId, query: String) -> Option<RequestId> {
        let superseded = self.in_flight();
        self.phase = ListPhase::Loading { request, query };
        superseded
    }

    /// Commits an answer if it belongs to the latest request, returning the
    /// query that request carried. Stale answers leave the list untouched.
    fn resolve(
        &mut self,
        request: RequestId,
        result: Result<Vec<Article>, String>,
    ) -> Option<String> {
        let query = match &self.phase {
            ListPhase::Loading {
                request: latest,
                query,
            } if *latest == request => query.clone(),
            _ => return None,
        };
        self.phase = match result {
            Ok(articles) => ListPhase::Ready(dedupe_by_key(articles)),
            Err(message) => ListPhase::Failed(message),
        };
        Some(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    mounted: bool,
    category: Option<Category>,
    search: Option<String>,
    main: ListState,
    trending: ListState,
    initial_load_complete: bool,
    next_request: RequestId,
    summaries: SummaryCards,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mounted: false,
            category: Some(Category::DEFAULT),
            search: None,
            main: ListState::default(),
            trending: ListState::default(),
            initial_load_complete: false,
            next_request: 1,
            summaries: SummaryCards::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn active_category(&self) -> Option<Category> {
        self.category
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn main(&self) -> &ListState {
        &self.main
    }

    pub fn trending(&self) -> &ListState {
        &self.trending
    }

    /// Error shown in the main panel.
    pub fn error(&self) -> Option<&str> {
        self.main.error()
    }

    pub fn initial_load_complete(&self) -> bool {
        self.initial_load_complete
    }

    pub fn summary_state(&self, key: &str) -> SummaryState {
        self.summaries.state(key)
    }

    /// Query for the current intent: the search term wins over the category.
    pub fn current_query(&self) -> String {
        match (&self.search, self.category) {
            (Some(term), _) => term.clone(),
            (None, Some(category)) => category.query_term().to_string(),
            (None, None) => Category::DEFAULT.query_term().to_string(),
        }
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    fn allocate_request(&mut self) -> RequestId {
        let id = self.next_request;
        self.next_request += 1;
        id
    }

    /// Selects a category and clears the search term. Returns false when the
    /// intent did not change.
    pub(crate) fn select_category(&mut self, category: Category) -> bool {
        if self.category == Some(category) && self.search.is_none() {
            return false;
        }
        self.category = Some(category);
        self.search = None;
        self.mark_dirty();
        true
    }

    /// Sets a (trimmed, non-empty) search term and clears the category.
    pub(crate) fn select_search(&mut self, term: &str) -> bool {
        if self.search.as_deref() == Some(term) {
            return false;
        }
        self.search = Some(term.to_string());
        self.category = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn begin_trending_fetch(&mut self) -> Vec<Effect> {
        let request = self.allocate_request();
        let mut effects = Vec::with_capacity(2);
        if let Some(old) = self.trending.begin(request, String::new()) {
            effects.push(Effect::CancelRequest { request: old });
        }
        effects.push(Effect::FetchTrending { request });
        self.mark_dirty();
        effects
    }

    pub(crate) fn begin_main_fetch(&mut self) -> Vec<Effect> {
        let request = self.allocate_request();
        let query = self.current_query();
        let mut effects = Vec::with_capacity(2);
        if let Some(old) = self.main.begin(request, query.clone()) {
            newsdesk_debug!("main request {} superseded by {}", old, request);
            effects.push(Effect::CancelRequest { request: old });
        }
        effects.push(Effect::FetchArticles { request, query });
        self.mark_dirty();
        effects
    }

    pub(crate) fn commit_trending(
        &mut self,
        request: RequestId,
        result: Result<Vec<Article>, String>,
    ) -> bool {
        match self.trending.resolve(request, result) {
            Some(_) => {
                self.prune_summaries();
                self.mark_dirty();
                true
            }
            None => {
                newsdesk_debug!("discarding stale trending response {}", request);
                false
            }
        }
    }

    pub(crate) fn commit_main(
        &mut self,
        request: RequestId,
        result: Result<Vec<Article>, String>,
    ) -> Option<String> {
        match self.main.resolve(request, result) {
            Some(query) => {
                self.prune_summaries();
                self.mark_dirty();
                Some(query)
            }
            None => {
                newsdesk_debug!("discarding stale article response {}", request);
                None
            }
        }
    }

    pub(crate) fn complete_initial_load(&mut self) {
        self.initial_load_complete = true;
        self.mark_dirty();
    }

    pub(crate) fn toggle_summary(&mut self, key: &str) -> Vec<Effect> {
        let Some(article) = self.find_article(key).cloned() else {
            newsdesk_debug!("summary toggle for unknown card {}", key);
            return Vec::new();
        };
        match self.summaries.toggle(key) {
            Toggle::Start => {
                let request = self.allocate_request();
                self.summaries.begin(key, request);
                self.mark_dirty();
                vec![Effect::Summarize {
                    key: key.to_string(),
                    request,
                    input: SummaryInput::from_article(&article),
                }]
            }
            Toggle::Hidden => {
                self.mark_dirty();
                Vec::new()
            }
            Toggle::Ignored => Vec::new(),
        }
    }

    pub(crate) fn resolve_summary(
        &mut self,
        key: &str,
        request: RequestId,
        result: Result<String, String>,
    ) {
        if self.summaries.resolve(key, request, result) {
            self.mark_dirty();
        } else {
            newsdesk_debug!("discarding stale summary {} for {}", request, key);
        }
    }

    fn find_article(&self, key: &str) -> Option<&Article> {
        self.main
            .articles()
            .iter()
            .chain(self.trending.articles())
            .find(|article| article.key() == key)
    }

    fn prune_summaries(&mut self) {
        let main = &self.main;
        let trending = &self.trending;
        self.summaries.retain(|key| {
            main.articles()
                .iter()
                .chain(trending.articles())
                .any(|article| article.key() == key)
        });
    }
}
