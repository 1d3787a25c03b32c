//! Transport that sends the request as an email through a Resend-compatible HTTP API

use super::traits::{Transport, TransportError};
use crate::submission::FormSubmission;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Default email API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything needed to talk to the email API
#[derive(Debug, Clone)]
pub struct EmailApiSettings {
    pub endpoint: String,
    pub api_key: String,
    /// `From` address of the generated email
    pub sender: String,
    /// Inbox that receives contact requests
    pub recipient: String,
    pub timeout: Duration,
}

/// Request body accepted by the email API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct EmailApiTransport {
    client: reqwest::Client,
    endpoint: String,
    sender: String,
    recipient: String,
}

impl EmailApiTransport {
    pub fn new(settings: EmailApiSettings) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| TransportError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint,
            sender: settings.sender,
            recipient: settings.recipient,
        })
    }

    /// Build the email for a submission
    pub fn build_request(&self, submission: &FormSubmission) -> EmailRequest {
        EmailRequest {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: format!("New enquiry from {}", submission.name()),
            html: render_html(submission),
        }
    }
}

#[async_trait]
impl Transport for EmailApiTransport {
    fn name(&self) -> &'static str {
        "email-api"
    }

    async fn deliver(&self, submission: &FormSubmission) -> Result<(), TransportError> {
        let body = self.build_request(submission);
        let idempotency_key = Uuid::new_v4();

        tracing::debug!(endpoint = %self.endpoint, %idempotency_key, "Sending contact email");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%idempotency_key, "Contact email accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// HTML body listing every field of the request
fn render_html(submission: &FormSubmission) -> String {
    let address = or_placeholder(submission.address(), "Not provided");
    let project_type = or_placeholder(submission.project_type(), "Not selected");
    let site_visit = if submission.site_visit() { "Yes" } else { "No" };

    format!(
        "<h2>New enquiry from the website</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Address:</strong> {}</p>\n\
         <p><strong>Project type:</strong> {}</p>\n\
         <p><strong>Description:</strong></p>\n\
         <p>{}</p>\n\
         <p><strong>Wants a site visit:</strong> {}</p>\n\
         <p><small>Sent {}</small></p>\n",
        escape_html(submission.name()),
        escape_html(submission.email()),
        escape_html(submission.phone()),
        escape_html(address),
        escape_html(project_type),
        escape_html(submission.description()).replace('\n', "<br>\n"),
        site_visit,
        submission.timestamp_iso(),
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactForm;
    use crate::submission::fixtures::submission_with;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn transport() -> EmailApiTransport {
        EmailApiTransport::new(EmailApiSettings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "re_test".to_string(),
            sender: "website@example.no".to_string(),
            recipient: "post@example.no".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn submission_edited(edit: impl FnOnce(&mut ContactForm)) -> FormSubmission {
        submission_with(
            |form| {
                form.project_type.next_choice();
                form.project_type.next_choice();
                form.description.set_text("Line one\nLine two");
                form.site_visit.toggle();
                edit(form);
            },
            Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap(),
        )
    }

    fn submission() -> FormSubmission {
        submission_edited(|_| {})
    }

    #[test]
    fn test_request_addresses_and_subject() {
        let request = transport().build_request(&submission());
        assert_eq!(request.from, "website@example.no");
        assert_eq!(request.to, "post@example.no");
        assert_eq!(request.subject, "New enquiry from Kari Nordmann");
    }

    #[test]
    fn test_html_lists_fields_with_placeholders() {
        let html = transport().build_request(&submission()).html;
        assert!(html.contains("<strong>Name:</strong> Kari Nordmann"));
        assert!(html.contains("<strong>Address:</strong> Not provided"));
        assert!(html.contains("<strong>Project type:</strong> Drainage and sewer"));
        assert!(html.contains("<strong>Wants a site visit:</strong> Yes"));
        assert!(html.contains("Line one<br>\nLine two"));
        assert!(html.contains("2026-10-17T09:30:00.000Z"));
    }

    #[test]
    fn test_html_escapes_user_input() {
        let submission = submission_edited(|form| {
            form.name.set_text("<script>alert('x')</script>");
            form.project_type.prev_choice();
            form.project_type.prev_choice();
        });

        let html = transport().build_request(&submission).html;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<strong>Project type:</strong> Not selected"));
    }

    #[test]
    fn test_request_serializes_to_api_shape() {
        let request = transport().build_request(&submission());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"], "post@example.no");
        assert!(json["html"].as_str().unwrap().starts_with("<h2>"));
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let result = EmailApiTransport::new(EmailApiSettings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "bad\nkey".to_string(),
            sender: "a@b.co".to_string(),
            recipient: "a@b.co".to_string(),
            timeout: Duration::from_secs(5),
        });
        assert!(matches!(result, Err(TransportError::InvalidApiKey)));
    }
}
