use std::sync::Once;

use newsdesk_core::{
    update, AppState, Article, Category, Effect, ListView, Msg, Source, MAIN_SKELETONS,
    TRENDING_SKELETONS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(newsdesk_logging::initialize_for_tests);
}

fn article(slug: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: "Wire".to_string(),
        },
        author: None,
        title: format!("Story {slug}"),
        description: Some(format!("About {slug}")),
        content: None,
        url: format!("https://news.example.com/{slug}"),
        url_to_image: None,
        published_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

#[test]
fn mount_fetches_trending_only() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);

    assert_eq!(effects, vec![Effect::FetchTrending { request: 1 }]);
    assert!(state.trending().is_loading());
    assert!(state.main().is_idle());
    assert!(!state.initial_load_complete());

    let view = state.view();
    assert_eq!(view.main, ListView::Loading { skeletons: MAIN_SKELETONS });
    assert_eq!(
        view.trending,
        ListView::Loading {
            skeletons: TRENDING_SKELETONS
        }
    );
}

#[test]
fn second_mount_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (next, effects) = update(state.clone(), Msg::Mounted);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn main_fetch_waits_for_trending_then_completes_initial_load() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, effects) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(vec![article("hot")]),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::FetchArticles {
            request: 2,
            query: Category::DEFAULT.query_term().to_string(),
        }]
    );
    assert_eq!(state.trending().articles().len(), 1);
    assert!(state.main().is_loading());
    assert!(!state.initial_load_complete());

    let (mut state, effects) = update(
        state,
        Msg::ArticlesLoaded {
            request: 2,
            result: Ok(vec![article("a"), article("b")]),
        },
    );
    assert!(effects.is_empty());
    assert!(state.initial_load_complete());
    assert_eq!(state.main().articles().len(), 2);
    assert!(state.error().is_none());
    assert!(state.consume_dirty());
}

#[test]
fn trending_failure_still_starts_main_list() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, effects) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Err("rate limited".to_string()),
        },
    );

    assert_eq!(state.view().trending, ListView::Error("rate limited".to_string()));
    assert!(matches!(effects.as_slice(), [Effect::FetchArticles { request: 2, .. }]));
    // The main panel does not show the trending failure.
    assert!(state.error().is_none());
}

#[test]
fn main_failure_completes_initial_load_with_error_panel() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(Vec::new()),
        },
    );
    let (state, effects) = update(
        state,
        Msg::ArticlesLoaded {
            request: 2,
            result: Err("API request failed with status 500".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert!(state.initial_load_complete());
    assert!(!state.main().is_loading());
    assert_eq!(state.error(), Some("API request failed with status 500"));
    assert_eq!(
        state.view().main,
        ListView::Error("API request failed with status 500".to_string())
    );
}

#[test]
fn intent_changes_before_initial_load_do_not_fetch() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, effects) = update(state, Msg::CategorySelected(Category::Robotics));
    assert!(effects.is_empty());

    // The deferred intent is what the first main fetch asks for.
    let (_state, effects) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::FetchArticles {
            request: 2,
            query: "robotics".to_string(),
        }]
    );
}

#[test]
fn intent_change_during_initial_main_fetch_is_caught_up() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(Vec::new()),
        },
    );
    let (state, effects) = update(state, Msg::SearchSubmitted("quantum".to_string()));
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::ArticlesLoaded {
            request: 2,
            result: Ok(vec![article("a")]),
        },
    );
    assert!(state.initial_load_complete());
    assert_eq!(
        effects,
        vec![Effect::FetchArticles {
            request: 3,
            query: "quantum".to_string(),
        }]
    );
}

#[test]
fn duplicate_urls_are_collapsed_on_commit() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(Vec::new()),
        },
    );
    let mut twin = article("a");
    twin.title = "Same url, different title".to_string();
    let (state, _) = update(
        state,
        Msg::ArticlesLoaded {
            request: 2,
            result: Ok(vec![article("a"), article("b"), twin]),
        },
    );

    let ListView::Ready(cards) = state.view().main else {
        panic!("expected ready list");
    };
    let keys: Vec<_> = cards.iter().map(|card| card.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["https://news.example.com/a", "https://news.example.com/b"]
    );
    assert_eq!(cards[0].title, "Story a");
}

#[test]
fn empty_result_renders_empty_state() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::TrendingLoaded {
            request: 1,
            result: Ok(Vec::new()),
        },
    );
    let (state, _) = update(
        state,
        Msg::ArticlesLoaded {
            request: 2,
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(state.view().main, ListView::Empty);
}
