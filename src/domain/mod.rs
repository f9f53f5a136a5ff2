pub mod feed;
pub mod channel;
pub mod video;
pub mod submission;
pub mod notification;

pub use feed::{Feed, FeedConfig, Platform};
pub use channel::{Channel, ChannelListing};
pub use video::Video;
pub use submission::{Submission, SubredditListing};
pub use notification::DeliveryStatus;
