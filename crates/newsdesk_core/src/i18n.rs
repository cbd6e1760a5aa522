//! Display strings and date formatting for the two supported locales.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Every user-visible string the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    AppSubtitle,
    SearchPlaceholder,
    TrendingNow,
    ResultsFor,
    News,
    ErrorOccurred,
    NoArticlesFound,
    NoArticlesFoundDesc,
    AiSummary,
    HideSummary,
    RetrySummary,
    Generating,
    InvalidDate,
    FooterRights,
}

impl Text {
    pub fn get(self, locale: Locale) -> &'static str {
        let (en, fr) = match self {
            Text::AppTitle => ("AI News Hub", "AI News Hub"),
            Text::AppSubtitle => (
                "Your Daily Dose of AI Intelligence",
                "Votre Dose Quotidienne d'Intelligence IA",
            ),
            Text::SearchPlaceholder => ("Search news...", "Rechercher des actualités..."),
            Text::TrendingNow => ("Trending Now", "Tendances Actuelles"),
            Text::ResultsFor => ("Results for", "Résultats pour"),
            Text::News => ("News", "Actualités"),
            Text::ErrorOccurred => ("An Error Occurred", "Une Erreur est Survenue"),
            Text::NoArticlesFound => ("No Articles Found", "Aucun Article Trouvé"),
            Text::NoArticlesFoundDesc => (
                "Try adjusting your search or selecting a different category.",
                "Essayez de modifier votre recherche ou de sélectionner une autre catégorie.",
            ),
            Text::AiSummary => ("AI Summary", "Résumé IA"),
            Text::HideSummary => ("Hide Summary", "Cacher le Résumé"),
            Text::RetrySummary => ("Retry Summary", "Réessayer le Résumé"),
            Text::Generating => ("Generating...", "Génération en cours..."),
            Text::InvalidDate => ("Invalid Date", "Date invalide"),
            Text::FooterRights => ("All rights reserved.", "Tous droits réservés."),
        };
        match locale {
            Locale::En => en,
            Locale::Fr => fr,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Long-form publication date, or the locale's invalid-date marker.
pub fn format_published(raw: &str, locale: Locale) -> String {
    match parse_published(raw) {
        Some(date) => format_long_date(date, locale),
        None => Text::InvalidDate.get(locale).to_string(),
    }
}

fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(stamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Locale::Fr => format!("{} {} {}", date.day(), MONTHS_FR[month], date.year()),
    }
}
