//! services/api/src/adapters/bug_report.rs
//!
//! Best-effort delivery of user bug reports to a configured webhook.
//!
//! The report path must never fail the primary conversation flow: delivery
//! runs in a detached task, and every error is captured and discarded at
//! this boundary.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A user-submitted bug report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugReport {
    pub name: String,
    pub issue: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    subject: String,
    body: String,
}

fn webhook_payload(report: &BugReport) -> WebhookPayload {
    WebhookPayload {
        subject: format!("[MET CURATOR ISSUE] {}", report.issue),
        body: format!(
            "Name: {}\n\nIssue: {}\n\nDescription:\n{}\n\n---\nSubmitted from MET Museum Art Curator App",
            report.name, report.issue, report.description
        ),
    }
}

/// Fire-and-forget notifier posting reports to a webhook.
#[derive(Clone)]
pub struct WebhookBugReporter {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl WebhookBugReporter {
    /// Creates a new `WebhookBugReporter`. With no webhook configured,
    /// reports are logged and dropped.
    pub fn new(client: reqwest::Client, webhook_url: Option<String>) -> Self {
        Self {
            client,
            webhook_url,
        }
    }

    /// Queues a report for delivery and returns immediately.
    pub fn notify(&self, report: BugReport) {
        let Some(url) = self.webhook_url.clone() else {
            info!(issue = %report.issue, "no bug-report webhook configured, dropping report");
            return;
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            let payload = webhook_payload(&report);
            let result = client
                .post(&url)
                .json(&payload)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => info!(issue = %report.issue, "bug report delivered"),
                Err(err) => warn!(error = %err, "bug report delivery failed"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_the_issue_subject_and_full_body() {
        let payload = webhook_payload(&BugReport {
            name: "Ada".to_string(),
            issue: "Artwork image missing".to_string(),
            description: "The card rendered without an image.".to_string(),
        });

        assert_eq!(payload.subject, "[MET CURATOR ISSUE] Artwork image missing");
        assert!(payload.body.starts_with("Name: Ada"));
        assert!(payload.body.contains("Issue: Artwork image missing"));
        assert!(payload.body.contains("The card rendered without an image."));
    }
}
