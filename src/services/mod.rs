pub mod channel_cache;
pub mod fetcher;
pub mod reddit_fetcher;
pub mod youtube_fetcher;
pub mod notification_service;
pub mod digest_service;

pub use channel_cache::ChannelCache;
pub use fetcher::FeedFetcher;
pub use reddit_fetcher::RedditFetcher;
pub use youtube_fetcher::YouTubeFetcher;
pub use notification_service::{MailTransport, NotificationService};
pub use digest_service::DigestService;
