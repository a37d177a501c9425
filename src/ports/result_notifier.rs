//! Result Notifier Port - Delivery interface for ranked tables.
//!
//! The application depends on this trait; adapters (like the Resend email
//! notifier) provide the implementation. Delivery failures are reported
//! through this port's own error type, never through the engine's.

use async_trait::async_trait;
use thiserror::Error;

/// A file attached to an outgoing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultAttachment {
    /// Suggested filename for the recipient.
    pub filename: String,
    /// MIME content type.
    pub content_type: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

impl ResultAttachment {
    /// Creates a CSV attachment.
    pub fn csv(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "text/csv".to_string(),
            content,
        }
    }
}

/// Errors that can occur while delivering a result.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// The recipient address was rejected by the delivery channel.
    #[error("Recipient rejected: {0}")]
    InvalidRecipient(String),

    /// The delivery channel accepted the request but reported a failure.
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    /// The delivery channel could not be reached.
    #[error("Delivery service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Port for delivering a ranked result table to a recipient.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Delivers the attachment to the recipient.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the delivery channel rejects the recipient
    /// or the send fails.
    async fn deliver(
        &self,
        recipient: &str,
        attachment: &ResultAttachment,
    ) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_attachment_sets_content_type() {
        let attachment = ResultAttachment::csv("result.csv", b"a,b\n".to_vec());
        assert_eq!(attachment.filename, "result.csv");
        assert_eq!(attachment.content_type, "text/csv");
        assert_eq!(attachment.content, b"a,b\n");
    }

    #[test]
    fn notify_error_displays_messages() {
        let err = NotifyError::InvalidRecipient("bounced".to_string());
        assert!(err.to_string().contains("Recipient rejected"));

        let err = NotifyError::ServiceUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn result_notifier_is_object_safe() {
        fn check<T: ResultNotifier + ?Sized>() {}
        check::<dyn ResultNotifier>();
    }
}
