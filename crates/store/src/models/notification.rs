//! Notification entity model and DTOs.
//!
//! Notifications are a global broadcast list for the admin dashboard; there
//! is no per-user ownership link.

use atelier_core::ids;
use atelier_core::types::Timestamp;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::inquiry::ProjectInquiry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Project,
    User,
    System,
    Inquiry,
}

/// A record in `notifications.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub category: NotificationCategory,
    pub is_read: bool,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
}

impl Notification {
    /// The notification appended as a side effect of `create-inquiry`,
    /// pointing the admin at the new inquiry.
    pub fn inquiry_received(inquiry: &ProjectInquiry) -> Self {
        Notification {
            id: ids::next_string_id(),
            title: "New project inquiry".to_string(),
            message: format!(
                "{} submitted a new inquiry: {}",
                inquiry.client_name, inquiry.project_title
            ),
            notification_type: NotificationType::Info,
            category: NotificationCategory::Inquiry,
            is_read: false,
            created_at: Utc::now(),
            action_url: Some(format!("/admin/inquiries/{}", inquiry.id)),
            action_text: Some("View inquiry".to_string()),
        }
    }
}

/// Payload for `create-notification` (admin broadcast).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub message: String,
    /// Defaults to `info`.
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
    /// Defaults to `system`.
    pub category: Option<NotificationCategory>,
    pub action_url: Option<String>,
    pub action_text: Option<String>,
}

/// Payload for `mark-notification-read`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkNotificationRead {
    pub notification_id: String,
}
