use crate::domain::{Feed, Platform, SubredditListing};
use crate::errors::NewsletterResult;
use crate::render::{feed_block, subreddit_block, Markup};
use crate::services::fetcher::FeedFetcher;
use crate::sources::{RedditSource, TimeWindow};

pub const DEFAULT_SUBMISSION_LIMIT: u32 = 10;

/// Today's top posts for every subreddit of a feed
pub struct RedditFetcher<S: RedditSource> {
    source: S,
    window: TimeWindow,
    limit: u32,
}

impl<S: RedditSource> RedditFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            window: TimeWindow::Day,
            limit: DEFAULT_SUBMISSION_LIMIT,
        }
    }

    pub fn fetch_subreddit(&self, name: &str) -> NewsletterResult<SubredditListing> {
        log::info!("\tGetting {} content...", name);
        let title = self.source.subreddit_title(name)?;
        let submissions = self.source.top_submissions(name, self.window, self.limit)?;

        Ok(SubredditListing {
            name: name.to_string(),
            title,
            submissions,
        })
    }

    pub fn fetch_feed(&self, feed: &Feed) -> NewsletterResult<Vec<SubredditListing>> {
        feed.sources
            .iter()
            .map(|name| self.fetch_subreddit(name))
            .collect()
    }
}

impl<S: RedditSource> FeedFetcher for RedditFetcher<S> {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    fn render_feed(&mut self, feed: &Feed) -> NewsletterResult<Markup> {
        let blocks: Vec<Markup> = self
            .fetch_feed(feed)?
            .iter()
            .map(subreddit_block)
            .collect();
        Ok(feed_block(&feed.name, &blocks))
    }
}
