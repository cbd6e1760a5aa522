use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use newsdesk_core::{update, AppState, ListView, Msg};
use newsdesk_engine::{
    ArticleRepository, EngineHandle, FixtureRepository, GeminiSummarizer, WorldNewsRepository,
};
use newsdesk_logging::{level_from_name, newsdesk_info, newsdesk_warn};

use super::commands::{self, Command};
use super::config::{AppConfig, Backend, Credentials, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::preferences::UserPreferences;
use super::system_theme::system_prefers_dark;
use super::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(75);

enum Input {
    Line(String),
    Tick,
    Closed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load(Path::new(CONFIG_FILENAME))?;
    logging::initialize(config.log_destination, level_from_name(&config.log_level));
    newsdesk_info!("Starting newsdesk with {:?} backend", config.backend);

    let credentials = Credentials::from_env();
    let repository = build_repository(&config, &credentials)?;
    let summarizer = GeminiSummarizer::new(config.gemini_settings(&credentials));
    if !summarizer.is_configured() {
        newsdesk_warn!("GEMINI_API_KEY is not set; AI summaries will report an error");
    }
    let runner = EffectRunner::new(EngineHandle::new(repository, Arc::new(summarizer)));
    let preferences = UserPreferences::persisted_at(config.preferences_path.clone());

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx.clone());
    // Background tick to poll the engine and coalesce renders.
    thread::spawn(move || {
        while input_tx.send(Input::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut dashboard = Dashboard::new(runner, preferences);
    dashboard.dispatch(Msg::Mounted);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dashboard.draw(&mut out)?;

    for input in input_rx {
        match input {
            Input::Tick => {
                for msg in dashboard.runner.drain() {
                    dashboard.dispatch(msg);
                }
                dashboard.dispatch(Msg::Tick);
            }
            Input::Line(line) => {
                if dashboard.handle_line(&line) == Flow::Quit {
                    break;
                }
            }
            Input::Closed => break,
        }
        if dashboard.needs_redraw() {
            dashboard.draw(&mut out)?;
        }
    }

    newsdesk_info!("Newsdesk shutting down");
    Ok(())
}

fn build_repository(
    config: &AppConfig,
    credentials: &Credentials,
) -> anyhow::Result<Arc<dyn ArticleRepository>> {
    match config.backend {
        Backend::Fixture => {
            let fixtures = FixtureRepository::bundled()
                .context("bundled fixture data is invalid")?
                .with_latency(config.fixture_latency());
            Ok(Arc::new(fixtures))
        }
        Backend::Live => Ok(Arc::new(WorldNewsRepository::new(
            config.worldnews_settings(credentials),
        ))),
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Closed);
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the controller state and everything the terminal front end adds to it.
struct Dashboard {
    state: AppState,
    runner: EffectRunner,
    preferences: UserPreferences,
    notice: Option<String>,
    show_help: bool,
    redraw: bool,
}

impl Dashboard {
    fn new(runner: EffectRunner, preferences: UserPreferences) -> Self {
        Self {
            state: AppState::new(),
            runner,
            preferences,
            notice: None,
            show_help: false,
            redraw: true,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        self.redraw = true;
        self.notice = None;
        self.show_help = false;
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Flow::Continue,
            Err(err) => {
                self.notice = Some(err.to_string());
                return Flow::Continue;
            }
        };

        match command {
            Command::Category(category) => self.dispatch(Msg::CategorySelected(category)),
            Command::Search(text) => self.dispatch(Msg::SearchSubmitted(text)),
            Command::Summary(number) => self.toggle_summary(number),
            Command::Lang(locale) => {
                self.preferences.locale.set(locale);
            }
            Command::Theme(mode) => {
                self.preferences.theme.set(mode);
            }
            Command::Help => self.show_help = true,
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn toggle_summary(&mut self, number: usize) {
        let key = match self.state.view().main {
            ListView::Ready(cards) => cards.get(number - 1).map(|card| card.key.clone()),
            _ => None,
        };
        match key {
            Some(key) => self.dispatch(Msg::SummaryToggled { key }),
            None => self.notice = Some(format!("there is no card {number}")),
        }
    }

    fn needs_redraw(&mut self) -> bool {
        // Evaluate all three so each flag is cleared.
        let state_dirty = self.state.consume_dirty();
        let preferences_changed = self.preferences.take_redraw();
        let requested = std::mem::take(&mut self.redraw);
        state_dirty || preferences_changed || requested
    }

    fn frame(&self) -> Vec<String> {
        let locale = self.preferences.locale.get();
        let theme = self
            .preferences
            .theme
            .get()
            .resolve(system_prefers_dark());
        let mut lines = ui::render::render(&self.state.view(), locale, theme);
        if self.show_help {
            lines.push(String::new());
            lines.extend(ui::constants::HELP_LINES.iter().map(|line| format!("  {line}")));
        }
        if let Some(notice) = &self.notice {
            lines.push(format!("  {notice}"));
        }
        lines
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", ui::constants::CLEAR_SCREEN)?;
        for line in self.frame() {
            writeln!(out, "{line}")?;
        }
        write!(out, "{}", ui::constants::PROMPT)?;
        out.flush()
    }
}
