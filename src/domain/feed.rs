use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::errors::NewsletterResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Reddit,
    YouTube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Reddit => "reddit",
            Platform::YouTube => "youtube",
        }
    }

    /// Subject line of the digest email
    pub fn subject(&self) -> &'static str {
        match self {
            Platform::Reddit => "Media Newsletter: Reddit Digest",
            Platform::YouTube => "Media Newsletter: Youtube Digest",
        }
    }

    pub fn output_file(&self) -> &'static str {
        match self {
            Platform::Reddit => "reddit_output.html",
            Platform::YouTube => "youtube_output.html",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Reddit => "Reddit",
            Platform::YouTube => "Youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named group of sources rendered as one digest section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub name: String,
    pub sources: Vec<String>,
}

impl Feed {
    pub fn new(name: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sources,
        }
    }
}

/// Feed name → source list, in the order the JSON object declares them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedConfig {
    feeds: Vec<Feed>,
}

impl FeedConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> NewsletterResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> NewsletterResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Later duplicates replace the source list but keep the first position
    fn insert(&mut self, feed: Feed) {
        match self.feeds.iter_mut().find(|f| f.name == feed.name) {
            Some(existing) => existing.sources = feed.sources,
            None => self.feeds.push(feed),
        }
    }
}

impl<'a> IntoIterator for &'a FeedConfig {
    type Item = &'a Feed;
    type IntoIter = std::slice::Iter<'a, Feed>;

    fn into_iter(self) -> Self::IntoIter {
        self.feeds.iter()
    }
}

impl<'de> Deserialize<'de> for FeedConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeedConfigVisitor;

        impl<'de> Visitor<'de> for FeedConfigVisitor {
            type Value = FeedConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping feed names to lists of sources")
            }

            fn visit_map<A>(self, mut map: A) -> Result<FeedConfig, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = FeedConfig::default();
                while let Some((name, sources)) = map.next_entry::<String, Vec<String>>()? {
                    config.insert(Feed::new(name, sources));
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(FeedConfigVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NewsletterError;

    #[test]
    fn test_preserves_declaration_order() {
        let config = FeedConfig::from_json(
            r#"{"Zebra": ["z1", "z2"], "Apple": ["a1"], "Middle": []}"#,
        )
        .unwrap();

        let names: Vec<&str> = config.feeds().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Middle"]);
        assert_eq!(config.feeds()[0].sources, vec!["z1", "z2"]);
        assert!(config.feeds()[2].sources.is_empty());
    }

    #[test]
    fn test_duplicate_feed_keeps_first_position() {
        let config =
            FeedConfig::from_json(r#"{"Tech": ["a"], "News": ["b"], "Tech": ["c"]}"#).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(config.feeds()[0], Feed::new("Tech", vec!["c".to_string()]));
    }

    #[test]
    fn test_rejects_non_list_sources() {
        let err = FeedConfig::from_json(r#"{"Tech": "aww"}"#).unwrap_err();
        assert!(matches!(err, NewsletterError::Json(_)));
    }

    #[test]
    fn test_rejects_top_level_array() {
        assert!(FeedConfig::from_json(r#"["aww"]"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = FeedConfig::load("/nonexistent/feeds.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_platform_subjects() {
        assert_eq!(Platform::Reddit.subject(), "Media Newsletter: Reddit Digest");
        assert_eq!(Platform::YouTube.subject(), "Media Newsletter: Youtube Digest");
        assert_eq!(Platform::YouTube.output_file(), "youtube_output.html");
    }

    #[test]
    fn test_empty_feed_name_is_kept() {
        let config = FeedConfig::from_json(r#"{"": ["aww"], "Tech": []}"#).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(config.feeds()[0], Feed::new("", vec!["aww".to_string()]));
    }
}
