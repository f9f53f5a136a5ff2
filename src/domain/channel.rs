use serde::{Deserialize, Serialize};

/// A YouTube channel resolved from its human title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub title: String,
    pub id: String,
    pub uploads_id: String,
}

impl Channel {
    pub fn new(title: String, id: String, uploads_id: String) -> Self {
        Self {
            title,
            id,
            uploads_id,
        }
    }
}

/// One channel's latest uploads
#[derive(Debug, Clone)]
pub struct ChannelListing {
    pub channel: Channel,
    pub videos: Vec<super::Video>,
}
