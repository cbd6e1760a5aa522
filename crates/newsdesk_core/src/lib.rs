//! Newsdesk core: domain model, pure state machine and view-model helpers.
mod article;
mod category;
mod effect;
mod i18n;
mod msg;
mod query;
mod state;
mod summary;
mod theme;
mod update;
mod view_model;

pub use article::{
    dedupe_by_key, image_or_placeholder, placeholder_image, source_name_from_url, Article, Source,
};
pub use category::Category;
pub use effect::Effect;
pub use i18n::{format_published, Locale, Text};
pub use msg::Msg;
pub use query::{Query, QueryError, MIN_QUERY_LEN};
pub use state::{AppState, ListPhase, ListState, RequestId};
pub use summary::{SummaryInput, SummaryState};
pub use theme::{ResolvedTheme, ThemeMode};
pub use update::update;
pub use view_model::{
    AppViewModel, CardView, Heading, ListView, SummaryView, MAIN_SKELETONS, TRENDING_SKELETONS,
};
