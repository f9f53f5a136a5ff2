use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsletterError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Authentication errors
    #[error("Authentication failed: {0}")]
    Auth(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Upstream API errors
    #[error("Unexpected {service} response: {message}")]
    UnexpectedResponse {
        service: &'static str,
        message: String,
    },

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid feed configuration: {0}")]
    FeedConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Mail errors from the gmail library
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<mailer::MailError> for NewsletterError {
    fn from(err: mailer::MailError) -> Self {
        NewsletterError::Mail(err.to_string())
    }
}

impl From<url::ParseError> for NewsletterError {
    fn from(err: url::ParseError) -> Self {
        NewsletterError::InvalidUrl(err.to_string())
    }
}

impl NewsletterError {
    pub fn unexpected(service: &'static str, message: impl Into<String>) -> Self {
        NewsletterError::UnexpectedResponse {
            service,
            message: message.into(),
        }
    }

    /// True when the error is a missing file, which callers may treat as empty state
    pub fn is_not_found(&self) -> bool {
        matches!(self, NewsletterError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type NewsletterResult<T> = Result<T, NewsletterError>;
