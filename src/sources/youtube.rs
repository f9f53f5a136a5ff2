use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::Video;
use crate::errors::{NewsletterError, NewsletterResult};
use crate::sources::google::GoogleSession;
use crate::sources::traits::{api_base, ChannelMatch, YouTubeSource};

pub const YOUTUBE_API_URL: &str = "https://www.googleapis.com";

const SERVICE: &str = "YouTube";

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    id: SearchId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistSnippet {
    title: String,
    published_at: DateTime<Utc>,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

impl PlaylistItem {
    fn into_video(self) -> Video {
        let snippet = self.snippet;
        Video::new(snippet.title, snippet.resource_id.video_id, snippet.published_at)
    }
}

/// YouTube Data API v3 client
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl YouTubeClient {
    pub fn new(session: &GoogleSession) -> NewsletterResult<Self> {
        Self::with_base_url(YOUTUBE_API_URL, session)
    }

    pub fn with_base_url(base_url: &str, session: &GoogleSession) -> NewsletterResult<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base_url: api_base(base_url)?,
            access_token: session.access_token().to_string(),
        })
    }

    fn list<T>(&self, resource: &str, query: &[(&str, &str)]) -> NewsletterResult<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(format!("{}/youtube/v3/{}", self.base_url, resource))
            .bearer_auth(&self.access_token)
            .query(query)
            .send()?
            .error_for_status()?;

        let body: ListResponse<T> = response.json()?;
        Ok(body.items)
    }
}

impl YouTubeSource for YouTubeClient {
    fn search_channel(&self, title: &str) -> NewsletterResult<Option<ChannelMatch>> {
        let items: Vec<SearchItem> = self.list(
            "search",
            &[("part", "snippet"), ("type", "channel"), ("q", title)],
        )?;

        let Some(first) = items.into_iter().next() else {
            return Ok(None);
        };

        let id = first.id.channel_id.ok_or_else(|| {
            NewsletterError::unexpected(SERVICE, "search result without a channelId")
        })?;

        Ok(Some(ChannelMatch {
            id,
            title: first.snippet.title,
        }))
    }

    fn uploads_playlist_id(&self, channel_id: &str) -> NewsletterResult<String> {
        let items: Vec<ChannelItem> =
            self.list("channels", &[("part", "contentDetails"), ("id", channel_id)])?;

        items
            .into_iter()
            .next()
            .map(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| NewsletterError::ChannelNotFound(channel_id.to_string()))
    }

    fn latest_uploads(&self, playlist_id: &str, max_results: u32) -> NewsletterResult<Vec<Video>> {
        let max_results = max_results.to_string();
        let items: Vec<PlaylistItem> = self.list(
            "playlistItems",
            &[
                ("part", "snippet,contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ],
        )?;

        Ok(items.into_iter().map(PlaylistItem::into_video).collect())
    }
}
