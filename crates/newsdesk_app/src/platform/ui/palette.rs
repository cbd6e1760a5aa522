use newsdesk_core::ResolvedTheme;

/// ANSI escape sequences for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self {
                title: "\x1b[1;34m",
                heading: "\x1b[1;30m",
                text: "\x1b[30m",
                muted: "\x1b[90m",
                accent: "\x1b[35m",
                error: "\x1b[31m",
                reset: "\x1b[0m",
            },
            ResolvedTheme::Dark => Self {
                title: "\x1b[1;96m",
                heading: "\x1b[1;97m",
                text: "\x1b[37m",
                muted: "\x1b[2;37m",
                accent: "\x1b[95m",
                error: "\x1b[91m",
                reset: "\x1b[0m",
            },
        }
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{color}{text}{}", self.reset)
    }
}
