use newsdesk_logging::newsdesk_info;

use crate::{AppState, Category, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // Trending first; the main list waits for it so the two initial
            // requests never hit the backing source together.
            if state.is_mounted() {
                Vec::new()
            } else {
                state.mark_mounted();
                state.begin_trending_fetch()
            }
        }
        Msg::CategorySelected(category) => {
            if state.select_category(category) {
                refetch_if_ready(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::SearchSubmitted(raw) => {
            let term = raw.trim();
            let changed = if term.is_empty() {
                state.select_category(Category::DEFAULT)
            } else {
                state.select_search(term)
            };
            if changed {
                refetch_if_ready(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::TrendingLoaded { request, result } => {
            let committed = state.commit_trending(request, result);
            if committed && !state.initial_load_complete() && state.main().is_idle() {
                state.begin_main_fetch()
            } else {
                Vec::new()
            }
        }
        Msg::ArticlesLoaded { request, result } => match state.commit_main(request, result) {
            Some(query) if !state.initial_load_complete() => {
                state.complete_initial_load();
                newsdesk_info!("initial load complete");
                // Intent moved while the first main fetch was in flight.
                if query != state.current_query() {
                    state.begin_main_fetch()
                } else {
                    Vec::new()
                }
            }
            Some(_) | None => Vec::new(),
        },
        Msg::SummaryToggled { key } => state.toggle_summary(&key),
        Msg::SummaryLoaded {
            key,
            request,
            result,
        } => {
            state.resolve_summary(&key, request, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn refetch_if_ready(state: &mut AppState) -> Vec<Effect> {
    if state.initial_load_complete() {
        state.begin_main_fetch()
    } else {
        Vec::new()
    }
}
