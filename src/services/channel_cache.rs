use crate::domain::Channel;
use crate::errors::{NewsletterError, NewsletterResult};
use crate::sources::YouTubeSource;
use crate::storage::traits::{ChannelMap, ChannelRepository};

/// Memoizes channel title lookups, persisting after every new entry
pub struct ChannelCache<R: ChannelRepository> {
    repository: R,
    channels: ChannelMap,
}

impl<R: ChannelRepository> ChannelCache<R> {
    /// Load the stored channels; a missing backing file starts an empty cache
    pub fn open(repository: R) -> NewsletterResult<Self> {
        let channels = match repository.load() {
            Ok(channels) => channels,
            Err(e) if e.is_not_found() => {
                log::info!("No channel cache found, starting empty");
                ChannelMap::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            repository,
            channels,
        })
    }

    pub fn get(&self, title: &str) -> Option<&Channel> {
        self.channels.get(title)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Return the cached channel, or look it up and persist the whole cache
    pub fn resolve<S>(&mut self, title: &str, source: &S) -> NewsletterResult<Channel>
    where
        S: YouTubeSource + ?Sized,
    {
        if let Some(channel) = self.channels.get(title) {
            return Ok(channel.clone());
        }

        log::info!("Could not find {} in channel cache, searching...", title);
        let channel = Self::lookup(title, source)?;

        let mut updated = self.channels.clone();
        updated.insert(title.to_string(), channel.clone());
        self.repository.save(&updated)?;
        self.channels = updated;

        Ok(channel)
    }

    /// First search result wins
    fn lookup<S>(title: &str, source: &S) -> NewsletterResult<Channel>
    where
        S: YouTubeSource + ?Sized,
    {
        let found = source
            .search_channel(title)?
            .ok_or_else(|| NewsletterError::ChannelNotFound(title.to_string()))?;

        if !found.title.eq_ignore_ascii_case(title) {
            log::warn!(
                "Channel search for {:?} matched {:?} ({}); using it anyway",
                title,
                found.title,
                found.id
            );
        }

        let uploads_id = source.uploads_playlist_id(&found.id)?;
        Ok(Channel::new(title.to_string(), found.id, uploads_id))
    }
}
