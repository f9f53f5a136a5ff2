//! Gmail bindings for Rust
//! Builds HTML messages and sends them through the Gmail `users.messages.send` endpoint

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GMAIL_API_URL: &str = "https://gmail.googleapis.com";

/// RFC 2045 limit for base64 body lines
const BODY_LINE_LEN: usize = 76;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Gmail rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Invalid header value")]
    InvalidHeader,
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),
}

/// Gmail's reply to a successful send
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub id: String,
    #[serde(default, alias = "threadId")]
    pub thread_id: Option<String>,
    #[serde(default, alias = "labelIds")]
    pub label_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SendMessagePayload {
    raw: String,
}

/// An HTML email ready to be encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl HtmlMessage {
    pub fn new(to: &str, subject: &str, html: &str) -> Result<Self, MailError> {
        let to = to.trim();
        if to.is_empty() || to.contains(['\r', '\n']) {
            return Err(MailError::InvalidRecipient(to.to_string()));
        }

        Ok(Self {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        })
    }

    /// Render as an RFC 2822 message with a base64 encoded HTML body
    pub fn to_mime(&self) -> String {
        format!(
            "To: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=\"utf-8\"\r\nContent-Transfer-Encoding: base64\r\n\r\n{}",
            self.to,
            encode_header(&self.subject),
            encode_body(&self.html)
        )
    }

    /// The `raw` field Gmail expects: the MIME message, base64url encoded
    pub fn to_raw(&self) -> String {
        URL_SAFE.encode(self.to_mime().as_bytes())
    }
}

fn encode_body(body: &str) -> String {
    let encoded = STANDARD.encode(body.as_bytes());
    encoded
        .as_bytes()
        .chunks(BODY_LINE_LEN)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Encode a header value per RFC 2047 when it is not plain ASCII
fn encode_header(value: &str) -> String {
    let value = value.replace(['\r', '\n'], " ");
    if value.is_ascii() {
        value
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(value.as_bytes()))
    }
}

pub struct GmailClient {
    url: String,
    client: Client,
}

impl GmailClient {
    pub fn new(access_token: &str) -> Result<Self, MailError> {
        Self::with_base_url(GMAIL_API_URL, access_token)
    }

    pub fn with_base_url(url: &str, access_token: &str) -> Result<Self, MailError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|_| MailError::InvalidHeader)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Send a message as the authenticated user
    pub fn send(&self, message: &HtmlMessage) -> Result<SentMessage, MailError> {
        let payload = SendMessagePayload {
            raw: message.to_raw(),
        };

        let response = self
            .client
            .post(format!("{}/gmail/v1/users/me/messages/send", self.url))
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json()?)
    }

    /// Build and send an HTML message in one call
    pub fn send_html(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<SentMessage, MailError> {
        let message = HtmlMessage::new(to, subject, html)?;
        self.send(&message)
    }
}
