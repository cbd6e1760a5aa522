use crate::Article;

/// Shortest non-empty query a repository accepts.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Search term must be at least {} characters long.", MIN_QUERY_LEN)]
    TooShort { len: usize },
}

/// A validated repository query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// No filter: the repository's default set.
    Default,
    Term(String),
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len == 0 {
            Ok(Query::Default)
        } else if len < MIN_QUERY_LEN {
            Err(QueryError::TooShort { len })
        } else {
            Ok(Query::Term(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Query::Default => "",
            Query::Term(term) => term,
        }
    }

    /// Case-insensitive substring match on title, description and source name.
    pub fn matches(&self, article: &Article) -> bool {
        let needle = match self {
            Query::Default => return true,
            Query::Term(term) => term.to_lowercase(),
        };
        let fields = [
            Some(article.title.as_str()),
            article.description.as_deref(),
            Some(article.source.name.as_str()),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
