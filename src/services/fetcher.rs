use crate::domain::{Feed, FeedConfig, Platform};
use crate::errors::NewsletterResult;
use crate::render::{render_page, Markup};

/// Turns one platform's feed configuration into a digest page
pub trait FeedFetcher {
    fn platform(&self) -> Platform;

    /// Fetch every source of `feed` and render the feed's section
    fn render_feed(&mut self, feed: &Feed) -> NewsletterResult<Markup>;

    /// Render all feeds in configuration order and wrap them in a page
    fn get_html_content(&mut self, config: &FeedConfig, style: &str) -> NewsletterResult<String> {
        let mut sections = Vec::with_capacity(config.len());
        for feed in config {
            log::info!("Getting {} content...", feed.name);
            sections.push(self.render_feed(feed)?);
        }
        Ok(render_page(style, &sections))
    }
}
