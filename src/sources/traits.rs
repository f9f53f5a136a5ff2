use crate::domain::{Submission, Video};
use crate::errors::{NewsletterError, NewsletterResult};

/// Reddit's `t` parameter for top listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
        }
    }
}

/// First hit of a channel search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMatch {
    pub id: String,
    pub title: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait RedditSource: Send + Sync {
    /// Display title of a subreddit
    fn subreddit_title(&self, name: &str) -> NewsletterResult<String>;

    /// Top posts of a subreddit within a time window
    fn top_submissions(
        &self,
        name: &str,
        window: TimeWindow,
        limit: u32,
    ) -> NewsletterResult<Vec<Submission>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait YouTubeSource: Send + Sync {
    /// Search channels by title, returning the first result if any
    fn search_channel(&self, title: &str) -> NewsletterResult<Option<ChannelMatch>>;

    /// Id of the channel's uploads playlist
    fn uploads_playlist_id(&self, channel_id: &str) -> NewsletterResult<String>;

    /// Most recent items of a playlist, single page
    fn latest_uploads(&self, playlist_id: &str, max_results: u32) -> NewsletterResult<Vec<Video>>;
}

impl<T: RedditSource + ?Sized> RedditSource for &T {
    fn subreddit_title(&self, name: &str) -> NewsletterResult<String> {
        (**self).subreddit_title(name)
    }

    fn top_submissions(
        &self,
        name: &str,
        window: TimeWindow,
        limit: u32,
    ) -> NewsletterResult<Vec<Submission>> {
        (**self).top_submissions(name, window, limit)
    }
}

impl<T: YouTubeSource + ?Sized> YouTubeSource for &T {
    fn search_channel(&self, title: &str) -> NewsletterResult<Option<ChannelMatch>> {
        (**self).search_channel(title)
    }

    fn uploads_playlist_id(&self, channel_id: &str) -> NewsletterResult<String> {
        (**self).uploads_playlist_id(channel_id)
    }

    fn latest_uploads(&self, playlist_id: &str, max_results: u32) -> NewsletterResult<Vec<Video>> {
        (**self).latest_uploads(playlist_id, max_results)
    }
}

/// Validate an API base URL and strip its trailing slash
pub(crate) fn api_base(url: &str) -> NewsletterResult<String> {
    let parsed = url::Url::parse(url)?;
    if parsed.cannot_be_a_base() {
        return Err(NewsletterError::InvalidUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
