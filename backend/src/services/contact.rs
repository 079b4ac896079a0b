//! Contact form intake

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use shared::{validate_email, ContactReceipt, ContactRecord, ContactSubmission};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Validates and records contact submissions
#[derive(Clone)]
pub struct ContactService {
    inbox_path: Option<PathBuf>,
}

impl ContactService {
    /// Create a new ContactService instance
    pub fn new(inbox_path: Option<PathBuf>) -> Self {
        Self { inbox_path }
    }

    /// Validate a submission and record it
    pub async fn submit(&self, input: ContactSubmission) -> AppResult<ContactReceipt> {
        let record = Self::validate(input)?;

        tracing::info!(
            id = %record.id,
            email = %record.email,
            message_len = record.message.chars().count(),
            "Contact received"
        );

        if let Some(path) = &self.inbox_path {
            self.append(path, &record)
                .await
                .with_context(|| format!("Failed to record contact {}", record.id))?;
        }

        Ok(ContactReceipt {
            success: true,
            message: "문의가 접수되었습니다.".to_string(),
            id: record.id,
            received_at: record.received_at,
        })
    }

    fn validate(input: ContactSubmission) -> AppResult<ContactRecord> {
        // Only empty values count as missing; the email format check rejects
        // padded addresses and the message is kept as submitted.
        let email = input.email.unwrap_or_default();
        let message = input.message.unwrap_or_default();

        let missing = if email.is_empty() {
            Some("email")
        } else if message.is_empty() {
            Some("message")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(AppError::field(
                field,
                "Missing required fields: email, message",
                "필수 항목이 누락되었습니다: 이메일, 메시지",
            ));
        }

        validate_email(&email)
            .map_err(|msg| AppError::field("email", msg, "이메일 형식이 올바르지 않습니다"))?;

        Ok(ContactRecord {
            id: Uuid::new_v4(),
            email,
            message,
            received_at: Utc::now(),
        })
    }

    async fn append(&self, path: &Path, record: &ContactRecord) -> anyhow::Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
