mod channel_repository;

pub use channel_repository::JsonChannelRepository;
