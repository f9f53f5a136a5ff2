//! HTML digest rendering. Text is escaped unless wrapped with [`Markup::raw`].

pub mod markup;
pub mod fragments;
pub mod page;

pub use markup::Markup;
pub use fragments::{channel_block, feed_block, submission_row, subreddit_block, video_row};
pub use page::render_page;
