use std::collections::BTreeMap;

use crate::domain::Channel;
use crate::errors::NewsletterResult;

/// Channel records keyed by the title they were looked up with
pub type ChannelMap = BTreeMap<String, Channel>;

#[cfg_attr(test, mockall::automock)]
pub trait ChannelRepository: Send + Sync {
    /// Read every stored channel; a missing backing file is an IO `NotFound` error
    fn load(&self) -> NewsletterResult<ChannelMap>;

    /// Replace the stored channels with `channels`
    fn save(&self, channels: &ChannelMap) -> NewsletterResult<()>;
}
