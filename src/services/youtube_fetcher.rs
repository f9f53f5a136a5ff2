use chrono::{DateTime, Utc};

use crate::domain::{ChannelListing, Feed, Platform};
use crate::errors::NewsletterResult;
use crate::render::{channel_block, feed_block, Markup};
use crate::services::channel_cache::ChannelCache;
use crate::services::fetcher::FeedFetcher;
use crate::sources::YouTubeSource;
use crate::storage::ChannelRepository;

pub const DEFAULT_VIDEO_LIMIT: u32 = 5;

/// Latest uploads for every channel of a feed
pub struct YouTubeFetcher<S: YouTubeSource, R: ChannelRepository> {
    source: S,
    cache: ChannelCache<R>,
    max_results: u32,
    now: Option<DateTime<Utc>>,
}

impl<S: YouTubeSource, R: ChannelRepository> YouTubeFetcher<S, R> {
    pub fn new(source: S, cache: ChannelCache<R>) -> Self {
        Self {
            source,
            cache,
            max_results: DEFAULT_VIDEO_LIMIT,
            now: None,
        }
    }

    /// Pin the time used for "new" highlighting instead of the wall clock
    pub fn with_render_time(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn cache(&self) -> &ChannelCache<R> {
        &self.cache
    }

    pub fn fetch_channel(&mut self, title: &str) -> NewsletterResult<ChannelListing> {
        let channel = self.cache.resolve(title, &self.source)?;
        log::info!("\tGetting {} content...", channel.title);
        let videos = self
            .source
            .latest_uploads(&channel.uploads_id, self.max_results)?;

        Ok(ChannelListing { channel, videos })
    }

    pub fn fetch_feed(&mut self, feed: &Feed) -> NewsletterResult<Vec<ChannelListing>> {
        feed.sources
            .iter()
            .map(|title| self.fetch_channel(title))
            .collect()
    }
}

impl<S: YouTubeSource, R: ChannelRepository> FeedFetcher for YouTubeFetcher<S, R> {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn render_feed(&mut self, feed: &Feed) -> NewsletterResult<Markup> {
        let now = self.now.unwrap_or_else(Utc::now);
        let blocks: Vec<Markup> = self
            .fetch_feed(feed)?
            .iter()
            .map(|listing| channel_block(listing, now))
            .collect();
        Ok(feed_block(&feed.name, &blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Channel, FeedConfig, Video};
    use crate::sources::traits::{ChannelMatch, MockYouTubeSource};
    use crate::storage::traits::{ChannelMap, MockChannelRepository};
    use chrono::{Duration, TimeZone};
    use mockall::predicate::eq;

    fn render_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn cache_with(channels: Vec<Channel>) -> ChannelCache<MockChannelRepository> {
        let mut repo = MockChannelRepository::new();
        let map: ChannelMap = channels
            .into_iter()
            .map(|c| (c.title.clone(), c))
            .collect();
        repo.expect_load().returning(move || Ok(map.clone()));
        repo.expect_save().returning(|_| Ok(()));
        ChannelCache::open(repo).unwrap()
    }

    #[test]
    fn test_fetches_five_latest_uploads() {
        let cached = Channel::new("Veritasium".to_string(), "UCv".to_string(), "UUv".to_string());
        let mut source = MockYouTubeSource::new();
        source.expect_search_channel().times(0);
        source
            .expect_latest_uploads()
            .with(eq("UUv"), eq(5u32))
            .times(1)
            .returning(|_, _| {
                Ok(vec![Video::new(
                    "Sky".to_string(),
                    "v1".to_string(),
                    Utc.with_ymd_and_hms(2024, 6, 9, 8, 30, 0).unwrap(),
                )])
            });

        let mut fetcher = YouTubeFetcher::new(source, cache_with(vec![cached]))
            .with_render_time(render_time());
        let section = fetcher
            .render_feed(&Feed::new("Science", vec!["Veritasium".to_string()]))
            .unwrap();

        assert_eq!(
            section.as_str(),
            "<h2>Science</h2>\n<h3>Veritasium</h3>\n<table>\n<tr><td style=\"color:red\">2024-06-09 08:30</td><td><a href=\"https://youtube.com/watch?v=v1\">Sky</a></td></tr>\n</table>"
        );
    }

    #[test]
    fn test_unknown_channel_is_resolved_then_cached() {
        let mut source = MockYouTubeSource::new();
        source
            .expect_search_channel()
            .with(eq("Tom Scott"))
            .times(1)
            .returning(|_| {
                Ok(Some(ChannelMatch {
                    id: "UCt".to_string(),
                    title: "Tom Scott".to_string(),
                }))
            });
        source
            .expect_uploads_playlist_id()
            .times(1)
            .returning(|_| Ok("UUt".to_string()));
        source
            .expect_latest_uploads()
            .times(2)
            .returning(|_, _| Ok(vec![]));

        let mut fetcher = YouTubeFetcher::new(source, cache_with(vec![]));
        let config = FeedConfig::from_json(r#"{"A": ["Tom Scott"], "B": ["Tom Scott"]}"#).unwrap();

        fetcher.get_html_content(&config, "").unwrap();
        assert_eq!(fetcher.cache().len(), 1);
    }

    #[test]
    fn test_old_uploads_are_not_highlighted() {
        let cached = Channel::new("Old".to_string(), "UCo".to_string(), "UUo".to_string());
        let mut source = MockYouTubeSource::new();
        source.expect_latest_uploads().returning(|_, _| {
            Ok(vec![Video::new(
                "Archive".to_string(),
                "o1".to_string(),
                render_time() - Duration::days(8),
            )])
        });

        let mut fetcher =
            YouTubeFetcher::new(source, cache_with(vec![cached])).with_render_time(render_time());
        let section = fetcher
            .render_feed(&Feed::new("Misc", vec!["Old".to_string()]))
            .unwrap();

        assert!(!section.as_str().contains("color:red"));
        assert_eq!(fetcher.platform(), Platform::YouTube);
    }
}
