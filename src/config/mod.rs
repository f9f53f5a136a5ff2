use std::path::PathBuf;

use crate::errors::{NewsletterError, NewsletterResult};

pub const DEFAULT_USER_AGENT: &str = "media-newsletter/0.1";

#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

/// How to obtain a Google access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleCredentials {
    AccessToken(String),
    RefreshToken {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

/// Files read and written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub reddit_feeds: PathBuf,
    pub youtube_feeds: PathBuf,
    pub channels: PathBuf,
    pub reddit_style: PathBuf,
    pub youtube_style: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            reddit_feeds: PathBuf::from("reddit_feeds.json"),
            youtube_feeds: PathBuf::from("youtube_feeds.json"),
            channels: PathBuf::from("channels.json"),
            reddit_style: PathBuf::from("reddit_style.css"),
            youtube_style: PathBuf::from("youtube_style.css"),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub reddit: RedditCredentials,
    pub google: GoogleCredentials,
    pub paths: Paths,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsletterResult<Self> {
        // Try to load env files from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            for name in [".env.reddit", ".env"] {
                let env_path = dir.join(name);
                if env_path.exists() {
                    dotenvy::from_path(&env_path).ok();
                }
            }
        }
        // Fall back to current directory
        dotenvy::from_filename(".env.reddit").ok();
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> NewsletterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NewsletterError::MissingEnvVar(key.to_string()))
        };

        let reddit = RedditCredentials {
            client_id: require("REDDIT_CLIENT_ID")?,
            client_secret: require("REDDIT_CLIENT_SECRET")?,
            user_agent: lookup("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        let google = match lookup("GOOGLE_ACCESS_TOKEN").filter(|v| !v.trim().is_empty()) {
            Some(token) => GoogleCredentials::AccessToken(token),
            None => GoogleCredentials::RefreshToken {
                client_id: require("GOOGLE_CLIENT_ID")?,
                client_secret: require("GOOGLE_CLIENT_SECRET")?,
                refresh_token: require("GOOGLE_REFRESH_TOKEN")?,
            },
        };

        Ok(Self {
            reddit,
            google,
            paths: Paths::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_access_token_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("GOOGLE_ACCESS_TOKEN", "ya29.token"),
            ("GOOGLE_REFRESH_TOKEN", "ignored"),
        ]))
        .unwrap();

        assert_eq!(
            config.google,
            GoogleCredentials::AccessToken("ya29.token".to_string())
        );
        assert_eq!(config.reddit.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.paths, Paths::default());
    }

    #[test]
    fn test_refresh_token_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("REDDIT_USER_AGENT", "digest-bot/1.0"),
            ("GOOGLE_CLIENT_ID", "cid"),
            ("GOOGLE_CLIENT_SECRET", "csecret"),
            ("GOOGLE_REFRESH_TOKEN", "rtoken"),
        ]))
        .unwrap();

        assert_eq!(config.reddit.user_agent, "digest-bot/1.0");
        assert_eq!(
            config.google,
            GoogleCredentials::RefreshToken {
                client_id: "cid".to_string(),
                client_secret: "csecret".to_string(),
                refresh_token: "rtoken".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_reddit_credentials() {
        let err = Config::from_lookup(lookup_from(&[("GOOGLE_ACCESS_TOKEN", "t")])).unwrap_err();
        assert!(matches!(err, NewsletterError::MissingEnvVar(ref k) if k == "REDDIT_CLIENT_ID"));
    }

    #[test]
    fn test_missing_google_credentials() {
        let err = Config::from_lookup(lookup_from(&[
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("GOOGLE_CLIENT_ID", "cid"),
        ]))
        .unwrap_err();
        assert!(matches!(err, NewsletterError::MissingEnvVar(ref k) if k == "GOOGLE_CLIENT_SECRET"));
    }
}
