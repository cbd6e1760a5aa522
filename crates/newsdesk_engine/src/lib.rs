//! Newsdesk engine: article repositories, the summarizer and effect execution.
mod engine;
mod fetch;
mod repository;
mod summarize;
mod types;
mod worldnews;

pub use engine::EngineHandle;
pub use fetch::FetchSettings;
pub use repository::{ArticleRepository, FixtureRepository};
pub use summarize::{
    build_prompt, GeminiSettings, GeminiSummarizer, Summarizer, SummaryError, NO_CONTENT_MARKER,
};
pub use types::{EngineEvent, FailureKind, FetchError};
pub use worldnews::{WorldNewsRepository, WorldNewsSettings};
