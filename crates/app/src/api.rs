//! The one call this shell makes to the podcast API. Fetching is delegated
//! to the listing page; everything here is independent of the bootstrap
//! sequence and carries its own failure path.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Episode number within the feed, when the API knows it.
    #[serde(default)]
    pub episode: Option<u32>,
    /// Publication date, ISO 8601.
    pub published_at: String,
    /// Link out to the episode on its primary platform.
    #[serde(default)]
    pub url: Option<String>,
}

/// Fetches the full episode listing from `{endpoint}/podcasts`.
pub async fn fetch_episodes(endpoint: &str) -> Result<Vec<Episode>, gloo_net::Error> {
    let url = format!("{}/podcasts", endpoint.trim_end_matches('/'));
    Request::get(&url).send().await?.json().await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn episode_deserializes_with_optional_fields_absent() {
        let episode: Episode = serde_json::from_str(
            r#"{"id": 12, "title": "Ep. 12", "published_at": "2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(episode.description, "");
        assert_eq!(episode.episode, None);
        assert_eq!(episode.url, None);
    }

    #[test]
    fn episode_deserializes_fully_populated() {
        let episode: Episode = serde_json::from_str(
            r#"{
                "id": 41,
                "title": "The One About Bases",
                "description": "Base tours and bad decisions.",
                "episode": 41,
                "published_at": "2024-06-14",
                "url": "https://youtu.be/abc123"
            }"#,
        )
        .unwrap();
        assert_eq!(episode.episode, Some(41));
        assert_eq!(episode.url.as_deref(), Some("https://youtu.be/abc123"));
    }
}
