use std::fmt;

/// Outcome of a best-effort digest email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent { message_id: String },
    Failed { reason: String },
    Skipped,
}

impl DeliveryStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryStatus::Sent { .. })
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Sent { message_id } => write!(f, "sent (message id {})", message_id),
            DeliveryStatus::Failed { reason } => write!(f, "FAILED: {}", reason),
            DeliveryStatus::Skipped => write!(f, "skipped"),
        }
    }
}
