use newsdesk_core::{Effect, Msg};
use newsdesk_engine::{EngineEvent, EngineHandle};
use newsdesk_logging::{newsdesk_info, newsdesk_warn};

/// Turns core effects into engine commands and engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchTrending { request } => {
                    newsdesk_info!("FetchTrending request={}", request);
                    self.engine.fetch_trending(request);
                }
                Effect::FetchArticles { request, query } => {
                    newsdesk_info!("FetchArticles request={} query={:?}", request, query);
                    self.engine.fetch_articles(request, query);
                }
                Effect::CancelRequest { request } => {
                    self.engine.cancel(request);
                }
                Effect::Summarize {
                    key,
                    request,
                    input,
                } => {
                    newsdesk_info!("Summarize request={} key={}", request, key);
                    self.engine.summarize(key, request, input);
                }
            }
        }
    }

    /// Everything the engine finished since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut messages = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            messages.push(event_to_msg(event));
        }
        messages
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TrendingFetched { request, result } => Msg::TrendingLoaded {
            request,
            result: result.map_err(|err| {
                newsdesk_warn!("Trending request {} failed ({}): {}", request, err.kind, err);
                err.to_string()
            }),
        },
        EngineEvent::ArticlesFetched { request, result } => Msg::ArticlesLoaded {
            request,
            result: result.map_err(|err| {
                newsdesk_warn!("Articles request {} failed ({}): {}", request, err.kind, err);
                err.to_string()
            }),
        },
        EngineEvent::SummaryFinished {
            key,
            request,
            result,
        } => Msg::SummaryLoaded {
            key,
            request,
            result: result.map_err(|err| {
                newsdesk_warn!("Summary request {} failed: {}", request, err);
                err.to_string()
            }),
        },
    }
}
