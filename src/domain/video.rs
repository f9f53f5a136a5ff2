use chrono::{DateTime, Duration, Utc};

/// Videos younger than this are highlighted in the digest
pub const NEW_VIDEO_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub id: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
}

impl Video {
    pub fn new(title: String, id: String, published_at: DateTime<Utc>) -> Self {
        let url = Self::watch_url(&id);
        Self {
            title,
            id,
            published_at,
            url,
        }
    }

    pub fn watch_url(id: &str) -> String {
        format!("https://youtube.com/watch?v={}", id)
    }

    /// Strictly younger than the new-video window at `now`
    pub fn is_new(&self, now: DateTime<Utc>) -> bool {
        now - self.published_at < Duration::days(NEW_VIDEO_WINDOW_DAYS)
    }

    pub fn published_display(&self) -> String {
        self.published_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn video_published(published_at: DateTime<Utc>) -> Video {
        Video::new("Title".to_string(), "dQw4w9WgXcQ".to_string(), published_at)
    }

    #[test]
    fn test_url_derived_from_id() {
        let video = video_published(Utc::now());
        assert_eq!(video.url, "https://youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_six_days_old_is_new() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let video = video_published(now - Duration::days(6));
        assert!(video.is_new(now));
    }

    #[test]
    fn test_eight_days_old_is_not_new() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let video = video_published(now - Duration::days(8));
        assert!(!video.is_new(now));
    }

    #[test]
    fn test_exactly_seven_days_is_not_new() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let video = video_published(now - Duration::days(7));
        assert!(!video.is_new(now));
    }

    #[test]
    fn test_published_display() {
        let video = video_published(Utc.with_ymd_and_hms(2024, 5, 27, 12, 4, 7).unwrap());
        assert_eq!(video.published_display(), "2024-05-27 12:04");
    }
}
