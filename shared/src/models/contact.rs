//! Contact form models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact form submission as received.
///
/// Both fields are optional on the wire so a missing field can be reported
/// as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactSubmission {
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Acknowledgement returned once a submission is recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// A submission that passed validation, as written to the inbox
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Uuid,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}
