use mailer::GmailClient;

use crate::domain::DeliveryStatus;
use crate::errors::NewsletterResult;

/// Anything that can deliver an HTML email and report its message id
#[cfg_attr(test, mockall::automock)]
pub trait MailTransport: Send + Sync {
    fn send_html(&self, recipient: &str, subject: &str, html: &str) -> NewsletterResult<String>;
}

impl MailTransport for GmailClient {
    fn send_html(&self, recipient: &str, subject: &str, html: &str) -> NewsletterResult<String> {
        let sent = GmailClient::send_html(self, recipient, subject, html)?;
        Ok(sent.id)
    }
}

pub struct NotificationService<T: MailTransport> {
    transport: T,
}

impl<T: MailTransport> NotificationService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send a digest; failures are logged and reported, never raised
    pub fn send(&self, html: &str, recipient: &str, subject: &str) -> DeliveryStatus {
        match self.transport.send_html(recipient, subject, html) {
            Ok(message_id) => {
                log::info!("Sent message to {} Message Id: {}", recipient, message_id);
                DeliveryStatus::Sent { message_id }
            }
            Err(e) => {
                log::error!("An error occurred sending {:?} to {}: {}", subject, recipient, e);
                DeliveryStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NewsletterError;
    use mockall::predicate::eq;

    #[test]
    fn test_send_success() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send_html()
            .with(eq("me@example.com"), eq("Media Newsletter: Reddit Digest"), eq("<html></html>"))
            .times(1)
            .returning(|_, _, _| Ok("18f0a".to_string()));

        let service = NotificationService::new(transport);
        let status = service.send("<html></html>", "me@example.com", "Media Newsletter: Reddit Digest");

        assert_eq!(
            status,
            DeliveryStatus::Sent {
                message_id: "18f0a".to_string()
            }
        );
    }

    #[test]
    fn test_send_failure_is_reported_not_raised() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send_html()
            .times(1)
            .returning(|_, _, _| Err(NewsletterError::Mail("Gmail rejected the message (403)".to_string())));

        let service = NotificationService::new(transport);
        let status = service.send("<html></html>", "me@example.com", "subject");

        assert_eq!(
            status,
            DeliveryStatus::Failed {
                reason: "Mail error: Gmail rejected the message (403)".to_string()
            }
        );
    }
}
