mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod persistence;
mod preferences;
mod system_theme;
mod ui;

pub use app::run_app;
