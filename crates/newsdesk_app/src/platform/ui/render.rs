use newsdesk_core::{
    format_published, AppViewModel, CardView, Category, Heading, ListView, Locale, ResolvedTheme,
    SummaryView, Text,
};

use super::constants::{RULE_WIDTH, SKELETON_LINE};
use super::palette::Palette;

/// Full dashboard as terminal lines.
pub fn render(view: &AppViewModel, locale: Locale, theme: ResolvedTheme) -> Vec<String> {
    let palette = Palette::for_theme(theme);
    let mut lines = Vec::new();

    lines.push(format!(
        "{} | {}",
        palette.paint(palette.title, Text::AppTitle.get(locale)),
        palette.paint(palette.muted, Text::AppSubtitle.get(locale)),
    ));
    lines.push(category_bar(view.active_category, locale, &palette));
    lines.push(search_line(view.search_term.as_deref(), locale, &palette));
    lines.push(rule(&palette));

    lines.push(palette.paint(palette.heading, Text::TrendingNow.get(locale)));
    render_trending(&mut lines, &view.trending, locale, &palette);
    lines.push(rule(&palette));

    lines.push(palette.paint(palette.heading, &heading_text(&view.heading, locale)));
    render_main(&mut lines, &view.main, locale, &palette);
    lines.push(rule(&palette));

    lines.push(palette.paint(
        palette.muted,
        &format!(
            "{}. {}",
            Text::AppTitle.get(locale),
            Text::FooterRights.get(locale)
        ),
    ));
    lines
}

pub fn heading_text(heading: &Heading, locale: Locale) -> String {
    match heading {
        Heading::Search(term) => format!("{} \"{}\"", Text::ResultsFor.get(locale), term),
        Heading::Category(category) => {
            let label = category.label(locale);
            match locale {
                Locale::En => format!("{} {}", label, Text::News.get(locale)),
                Locale::Fr => format!("{} {}", Text::News.get(locale), label),
            }
        }
    }
}

fn category_bar(active: Option<Category>, locale: Locale, palette: &Palette) -> String {
    let entries: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            let entry = format!("{}:{}", category.key(), category.label(locale));
            if Some(*category) == active {
                palette.paint(palette.accent, &format!("[{entry}]"))
            } else {
                entry
            }
        })
        .collect();
    format!("  {}", entries.join("  "))
}

fn search_line(term: Option<&str>, locale: Locale, palette: &Palette) -> String {
    match term {
        Some(term) => format!("  search: {}", palette.paint(palette.accent, term)),
        None => format!(
            "  search: {}",
            palette.paint(palette.muted, Text::SearchPlaceholder.get(locale))
        ),
    }
}

fn rule(palette: &Palette) -> String {
    palette.paint(palette.muted, &"─".repeat(RULE_WIDTH))
}

fn render_trending(lines: &mut Vec<String>, list: &ListView, locale: Locale, palette: &Palette) {
    match list {
        ListView::Loading { skeletons } => push_skeletons(lines, *skeletons, palette),
        ListView::Error(message) => lines.push(palette.paint(palette.error, &format!("  ! {message}"))),
        ListView::Empty => lines.push(palette.paint(
            palette.muted,
            &format!("  {}", Text::NoArticlesFound.get(locale)),
        )),
        ListView::Ready(cards) => {
            for (index, card) in cards.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} {}",
                    index + 1,
                    palette.paint(palette.text, &card.title),
                    palette.paint(
                        palette.muted,
                        &format!(
                            "({}, {})",
                            card.source_name,
                            format_published(&card.published_at, locale)
                        )
                    ),
                ));
            }
        }
    }
}

fn render_main(lines: &mut Vec<String>, list: &ListView, locale: Locale, palette: &Palette) {
    match list {
        ListView::Loading { skeletons } => push_skeletons(lines, *skeletons, palette),
        ListView::Error(message) => {
            lines.push(palette.paint(palette.error, &format!("  {}", Text::ErrorOccurred.get(locale))));
            lines.push(palette.paint(palette.error, &format!("  {message}")));
        }
        ListView::Empty => {
            lines.push(palette.paint(
                palette.heading,
                &format!("  {}", Text::NoArticlesFound.get(locale)),
            ));
            lines.push(palette.paint(
                palette.muted,
                &format!("  {}", Text::NoArticlesFoundDesc.get(locale)),
            ));
        }
        ListView::Ready(cards) => {
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    lines.push(String::new());
                }
                render_card(lines, index + 1, card, locale, palette);
            }
        }
    }
}

fn render_card(
    lines: &mut Vec<String>,
    number: usize,
    card: &CardView,
    locale: Locale,
    palette: &Palette,
) {
    lines.push(format!(
        "  [{number}] {}",
        palette.paint(palette.heading, &card.title)
    ));
    lines.push(palette.paint(
        palette.muted,
        &format!(
            "      {} · {}",
            card.source_name,
            format_published(&card.published_at, locale)
        ),
    ));
    if let Some(description) = &card.description {
        lines.push(palette.paint(palette.text, &format!("      {description}")));
    }
    lines.push(format!("      {}", card.url));
    lines.push(palette.paint(palette.muted, &format!("      image: {}", card.image_url)));
    lines.push(palette.paint(
        palette.accent,
        &format!("      < {} >", card.summary.button_text(locale)),
    ));
    match &card.summary {
        SummaryView::Shown(text) => {
            for line in text.lines().filter(|line| !line.trim().is_empty()) {
                lines.push(palette.paint(palette.text, &format!("      | {}", line.trim())));
            }
        }
        SummaryView::Failed(message) => {
            lines.push(palette.paint(palette.error, &format!("      ! {message}")));
        }
        SummaryView::Collapsed | SummaryView::Generating => {}
    }
}

fn push_skeletons(lines: &mut Vec<String>, count: usize, palette: &Palette) {
    for _ in 0..count {
        lines.push(palette.paint(palette.muted, SKELETON_LINE));
    }
}
