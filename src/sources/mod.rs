pub mod traits;
pub mod google;
pub mod reddit;
pub mod youtube;

pub use traits::{ChannelMatch, RedditSource, TimeWindow, YouTubeSource};
pub use google::GoogleSession;
pub use reddit::RedditClient;
pub use youtube::YouTubeClient;
