use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A single news item. Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
}

impl Article {
    /// Identity of the article within a result set: the url, or the title
    /// when a provider hands out an article without one.
    pub fn key(&self) -> &str {
        if self.url.trim().is_empty() {
            &self.title
        } else {
            &self.url
        }
    }
}

/// Keeps the first article for each key, preserving relative order.
pub fn dedupe_by_key(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::with_capacity(articles.len());
    articles
        .into_iter()
        .filter(|article| seen.insert(article.key().to_string()))
        .collect()
}

/// Image to show for an article. Anything that is not an absolute http(s)
/// url is replaced with a placeholder seeded by the title.
pub fn image_or_placeholder(article: &Article) -> String {
    match article.url_to_image.as_deref() {
        Some(candidate) if is_usable_image_url(candidate) => candidate.trim().to_string(),
        _ => placeholder_image(&article.title),
    }
}

pub fn placeholder_image(title: &str) -> String {
    format!("https://picsum.photos/seed/{}/400/200", short_hash(title))
}

fn is_usable_image_url(candidate: &str) -> bool {
    match url::Url::parse(candidate.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Display name for a source the provider did not name.
pub fn source_name_from_url(article_url: &str) -> String {
    url::Url::parse(article_url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToOwned::to_owned))
        .map(|host| host.trim_start_matches("www.").to_string())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| "Unknown Source".to_string())
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, title: &str, image: Option<&str>) -> Article {
        Article {
            source: Source {
                id: None,
                name: "Wire".to_string(),
            },
            author: None,
            title: title.to_string(),
            description: None,
            content: None,
            url: url.to_string(),
            url_to_image: image.map(ToOwned::to_owned),
            published_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn key_falls_back_to_title_without_url() {
        assert_eq!(article("https://a.example/1", "A", None).key(), "https://a.example/1");
        assert_eq!(article("  ", "Untitled piece", None).key(), "Untitled piece");
    }

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        let list = vec![
            article("https://a.example/1", "first", None),
            article("https://a.example/2", "second", None),
            article("https://a.example/1", "duplicate", None),
        ];
        let titles: Vec<_> = dedupe_by_key(list).into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn invalid_images_get_a_stable_placeholder() {
        let missing = article("https://a.example/1", "Robots at work", None);
        let broken = article("https://a.example/2", "Robots at work", Some("not a url"));
        let relative = article("https://a.example/3", "Robots at work", Some("/img/a.png"));
        let data = article("https://a.example/4", "Robots at work", Some("data:image/png;base64,xx"));

        let expected = placeholder_image("Robots at work");
        assert!(expected.starts_with("https://picsum.photos/seed/"));
        for candidate in [&missing, &broken, &relative, &data] {
            assert_eq!(image_or_placeholder(candidate), expected);
        }
        assert_ne!(placeholder_image("Another title"), expected);
    }

    #[test]
    fn valid_images_pass_through() {
        let item = article(
            "https://a.example/1",
            "t",
            Some("https://cdn.example.com/pic.jpg"),
        );
        assert_eq!(image_or_placeholder(&item), "https://cdn.example.com/pic.jpg");
    }

    #[test]
    fn source_name_uses_host() {
        assert_eq!(
            source_name_from_url("https://www.theverge.com/2024/ai"),
            "theverge.com"
        );
        assert_eq!(source_name_from_url("garbage"), "Unknown Source");
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let json = r#"{
            "source": { "id": null, "name": "Wire" },
            "author": null,
            "title": "T",
            "description": "D",
            "url": "https://a.example/1",
            "urlToImage": null,
            "publishedAt": "2024-05-01T10:00:00Z",
            "content": null
        }"#;
        let parsed: Article = serde_json::from_str(json).expect("article json");
        assert_eq!(parsed.published_at, "2024-05-01T10:00:00Z");
        assert_eq!(parsed.description.as_deref(), Some("D"));
        assert!(parsed.url_to_image.is_none());
    }
}
