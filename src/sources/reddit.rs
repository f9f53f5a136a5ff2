use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use crate::config::RedditCredentials;
use crate::domain::Submission;
use crate::errors::{NewsletterError, NewsletterResult};
use crate::sources::traits::{api_base, RedditSource, TimeWindow};

pub const REDDIT_AUTH_URL: &str = "https://www.reddit.com";
pub const REDDIT_API_URL: &str = "https://oauth.reddit.com";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct AboutData {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing<Submission>>,
}

/// Reddit API client using application-only OAuth
pub struct RedditClient {
    client: Client,
    api_url: String,
    access_token: String,
}

impl RedditClient {
    pub fn connect(credentials: &RedditCredentials) -> NewsletterResult<Self> {
        Self::connect_with(REDDIT_AUTH_URL, REDDIT_API_URL, credentials)
    }

    /// Obtain an app token from `auth_url` and query `api_url` with it
    pub fn connect_with(
        auth_url: &str,
        api_url: &str,
        credentials: &RedditCredentials,
    ) -> NewsletterResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&credentials.user_agent).map_err(|_| {
                NewsletterError::Config(format!(
                    "Invalid Reddit user agent: {}",
                    credentials.user_agent
                ))
            })?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let response = client
            .post(format!("{}/api/v1/access_token", api_base(auth_url)?))
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsletterError::Auth(format!(
                "Reddit token request returned {}",
                status
            )));
        }

        let token: TokenResponse = response.json()?;

        Ok(Self {
            client,
            api_url: api_base(api_url)?,
            access_token: token.access_token,
        })
    }

    /// Normalize `r/name` to `name` and reject anything that is not a subreddit name
    fn subreddit_path(name: &str) -> NewsletterResult<String> {
        let name = name.trim().trim_start_matches("/r/").trim_start_matches("r/");
        let pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]{1,20}$")
            .map_err(|e| NewsletterError::Config(e.to_string()))?;

        if !pattern.is_match(name) {
            return Err(NewsletterError::InvalidInput(format!(
                "Invalid subreddit name: {}",
                name
            )));
        }

        Ok(format!("r/{}", name))
    }

    fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> NewsletterResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(format!("{}/{}", self.api_url, path))
            .bearer_auth(&self.access_token)
            .query(query)
            .query(&[("raw_json", "1")])
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}

impl RedditSource for RedditClient {
    fn subreddit_title(&self, name: &str) -> NewsletterResult<String> {
        let path = format!("{}/about", Self::subreddit_path(name)?);
        let about: Thing<AboutData> = self.get(&path, &[])?;
        Ok(about.data.title)
    }

    fn top_submissions(
        &self,
        name: &str,
        window: TimeWindow,
        limit: u32,
    ) -> NewsletterResult<Vec<Submission>> {
        let path = format!("{}/top", Self::subreddit_path(name)?);
        let limit = limit.to_string();
        let listing: Thing<ListingData> =
            self.get(&path, &[("t", window.as_str()), ("limit", limit.as_str())])?;

        Ok(listing.data.children.into_iter().map(|c| c.data).collect())
    }
}
