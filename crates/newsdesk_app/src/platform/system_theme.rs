//! Detects whether the terminal prefers a dark palette.

const OVERRIDE_VAR: &str = "NEWSDESK_SYSTEM_THEME";

pub(crate) fn system_prefers_dark() -> bool {
    prefers_dark(
        std::env::var(OVERRIDE_VAR).ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); ANSI backgrounds
/// 0-6 and 8 are dark.
fn prefers_dark(explicit: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match explicit.map(|value| value.trim().to_ascii_lowercase()) {
        Some(value) if value == "dark" => return true,
        Some(value) if value == "light" => return false,
        _ => {}
    }
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
