use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub score: i64,
    pub num_comments: u64,
    pub created_utc: f64,
}

impl Submission {
    pub fn permalink(&self) -> String {
        format!("https://reddit.com/{}", self.id)
    }

    pub fn created_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.created_utc.trunc() as i64, 0).single()
    }

    /// Creation time in local time, empty when the timestamp is out of range
    pub fn created_display(&self) -> String {
        self.created_local()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

/// One subreddit's top posts
#[derive(Debug, Clone)]
pub struct SubredditListing {
    pub name: String,
    pub title: String,
    pub submissions: Vec<Submission>,
}
