pub mod traits;
pub mod json;

pub use traits::{ChannelMap, ChannelRepository};
pub use json::JsonChannelRepository;
