use crate::Locale;

/// Predefined topical filter. State and equality use the variant; labels are
/// resolved per locale at render time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ai,
    Ml,
    Robotics,
    Nlp,
    Cv,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ai,
        Category::Ml,
        Category::Robotics,
        Category::Nlp,
        Category::Cv,
    ];

    pub const DEFAULT: Category = Category::Ai;

    pub fn key(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Ml => "ml",
            Category::Robotics => "robotics",
            Category::Nlp => "nlp",
            Category::Cv => "cv",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Canonical repository query for the category. Locale independent and
    /// always long enough to pass query validation.
    pub fn query_term(self) -> &'static str {
        match self {
            Category::Ai => "artificial intelligence",
            Category::Ml => "machine learning",
            Category::Robotics => "robotics",
            Category::Nlp => "natural language processing",
            Category::Cv => "computer vision",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Ai, Locale::En) => "Artificial Intelligence",
            (Category::Ai, Locale::Fr) => "Intelligence Artificielle",
            (Category::Ml, Locale::En) => "Machine Learning",
            (Category::Ml, Locale::Fr) => "Apprentissage Automatique",
            (Category::Robotics, Locale::En) => "Robotics",
            (Category::Robotics, Locale::Fr) => "Robotique",
            (Category::Nlp, Locale::En) => "NLP",
            (Category::Nlp, Locale::Fr) => "TAL",
            (Category::Cv, Locale::En) => "Computer Vision",
            (Category::Cv, Locale::Fr) => "Vision par Ordinateur",
        }
    }
}
