use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::GoogleCredentials;
use crate::errors::{NewsletterError, NewsletterResult};
use crate::sources::youtube::YouTubeClient;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Authenticated handle for the Google APIs, passed to each client that needs it
#[derive(Debug, Clone)]
pub struct GoogleSession {
    access_token: String,
}

impl GoogleSession {
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn authenticate(credentials: &GoogleCredentials) -> NewsletterResult<Self> {
        Self::authenticate_with(GOOGLE_TOKEN_URL, credentials)
    }

    /// Exchange a refresh token at `token_url`, or use a supplied access token as is
    pub fn authenticate_with(
        token_url: &str,
        credentials: &GoogleCredentials,
    ) -> NewsletterResult<Self> {
        let (client_id, client_secret, refresh_token) = match credentials {
            GoogleCredentials::AccessToken(token) => {
                return Ok(Self::from_access_token(token.clone()))
            }
            GoogleCredentials::RefreshToken {
                client_id,
                client_secret,
                refresh_token,
            } => (client_id, client_secret, refresh_token),
        };

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let response = client
            .post(token_url)
            .form(&[
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("refresh_token", refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NewsletterError::Auth(format!(
                "Google token exchange returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json()?;
        log::debug!(
            "Obtained Google access token (expires in {}s)",
            token.expires_in.unwrap_or_default()
        );

        Ok(Self::from_access_token(token.access_token))
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn youtube_client(&self) -> NewsletterResult<YouTubeClient> {
        YouTubeClient::new(self)
    }

    pub fn gmail_client(&self) -> NewsletterResult<mailer::GmailClient> {
        Ok(mailer::GmailClient::new(&self.access_token)?)
    }
}
