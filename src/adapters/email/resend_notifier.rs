//! Resend email notifier - delivers ranked tables as CSV attachments.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::ports::{NotifyError, ResultAttachment, ResultNotifier};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const SUBJECT: &str = "Your TOPSIS Result";
const BODY_TEXT: &str = "Your TOPSIS result is attached.";

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    attachments: Vec<AttachmentPayload>,
}

#[derive(Debug, Serialize)]
struct AttachmentPayload {
    filename: String,
    /// Base64-encoded file bytes, per the Resend REST contract.
    content: String,
    content_type: String,
}

/// Delivers results by email through Resend.
pub struct ResendNotifier {
    client: reqwest::Client,
    config: EmailConfig,
    endpoint: String,
}

impl ResendNotifier {
    pub fn new(client: reqwest::Client, config: EmailConfig) -> Self {
        Self {
            client,
            config,
            endpoint: RESEND_ENDPOINT.to_string(),
        }
    }

    /// Overrides the API endpoint (for tests against a local server).
    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, recipient: &str, attachment: &ResultAttachment) -> SendEmailRequest {
        SendEmailRequest {
            from: self.config.from_header(),
            to: vec![recipient.to_string()],
            subject: SUBJECT.to_string(),
            text: BODY_TEXT.to_string(),
            attachments: vec![AttachmentPayload {
                filename: attachment.filename.clone(),
                content: STANDARD.encode(&attachment.content),
                content_type: attachment.content_type.clone(),
            }],
        }
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    async fn deliver(
        &self,
        recipient: &str,
        attachment: &ResultAttachment,
    ) -> Result<(), NotifyError> {
        let request = self.build_request(recipient, attachment);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.config.resend_api_key.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(recipient, "result email accepted for delivery");
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(recipient, %status, "result email rejected");
        if status.as_u16() == 422 || status.as_u16() == 400 {
            Err(NotifyError::InvalidRecipient(detail))
        } else {
            Err(NotifyError::DeliveryFailed(format!("{status}: {detail}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            resend_api_key: "re_test".to_string(),
            from_email: "results@example.com".to_string(),
            from_name: "Topsis Ranker".to_string(),
        }
    }

    #[test]
    fn build_request_encodes_attachment_as_base64() {
        let notifier = ResendNotifier::new(reqwest::Client::new(), test_config());
        let attachment = ResultAttachment::csv("result.csv", b"a,b\n1,2\n".to_vec());

        let request = notifier.build_request("user@example.com", &attachment);

        assert_eq!(request.to, vec!["user@example.com"]);
        assert_eq!(request.subject, "Your TOPSIS Result");
        assert_eq!(request.attachments.len(), 1);
        assert_eq!(request.attachments[0].filename, "result.csv");
        assert_eq!(
            STANDARD.decode(&request.attachments[0].content).unwrap(),
            b"a,b\n1,2\n"
        );
    }

    #[test]
    fn build_request_uses_configured_from_header() {
        let notifier = ResendNotifier::new(reqwest::Client::new(), test_config());
        let attachment = ResultAttachment::csv("result.csv", Vec::new());

        let request = notifier.build_request("user@example.com", &attachment);
        assert_eq!(request.from, "Topsis Ranker <results@example.com>");
    }

    #[tokio::test]
    async fn deliver_reports_unreachable_service() {
        // Nothing listens on this port; the notifier must surface a
        // transport error rather than panic.
        let notifier = ResendNotifier::new(reqwest::Client::new(), test_config())
            .with_endpoint("http://127.0.0.1:1/emails");
        let attachment = ResultAttachment::csv("result.csv", Vec::new());

        let result = notifier.deliver("user@example.com", &attachment).await;
        assert!(matches!(result, Err(NotifyError::ServiceUnavailable(_))));
    }
}
