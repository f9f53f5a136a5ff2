use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DeliveryStatus, Platform};
use crate::errors::NewsletterResult;
use crate::services::notification_service::{MailTransport, NotificationService};

/// Writes each digest to disk, then emails it when a notifier is configured
pub struct DigestService<T: MailTransport> {
    notifier: Option<NotificationService<T>>,
    output_dir: PathBuf,
}

impl<T: MailTransport> DigestService<T> {
    pub fn new<P: AsRef<Path>>(notifier: Option<NotificationService<T>>, output_dir: P) -> Self {
        Self {
            notifier,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self, platform: Platform) -> PathBuf {
        self.output_dir.join(platform.output_file())
    }

    pub fn write(&self, platform: Platform, html: &str) -> NewsletterResult<PathBuf> {
        let path = self.output_path(platform);
        fs::write(&path, html)?;
        log::info!("Wrote {} digest to {}", platform, path.display());
        Ok(path)
    }

    /// File errors abort; a failed send only shows up in the returned status
    pub fn publish(
        &self,
        platform: Platform,
        html: &str,
        recipient: &str,
    ) -> NewsletterResult<DeliveryStatus> {
        self.write(platform, html)?;

        Ok(match &self.notifier {
            Some(notifier) => notifier.send(html, recipient, platform.subject()),
            None => DeliveryStatus::Skipped,
        })
    }
}
