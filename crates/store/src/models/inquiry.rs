//! Project inquiry entity model and DTOs.
//!
//! The richest record type: a client-submitted project request owning five
//! append-only sub-collections (messages, tasks, documents, invoices, team
//! members). Every nested mutation bumps the parent's `updatedAt`. Nested
//! records carry a denormalized `projectId` back-reference for display; it
//! is never used to reconstruct the collection.

use atelier_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Who wrote a message in the inquiry thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Client,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Contract,
    Agreement,
    Nda,
    Proposal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    Draft,
    PendingSignature,
    Signed,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

// ---------------------------------------------------------------------------
// Nested records
// ---------------------------------------------------------------------------

/// One message in the inquiry's client/admin thread. Append-only, ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryMessage {
    pub id: i64,
    /// Back-reference to the owning inquiry, display only.
    pub project_id: i64,
    pub sender: MessageSender,
    pub message: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryTask {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    pub priority: InquiryPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDocument {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<Timestamp>,
}

/// One line item on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryInvoice {
    pub id: i64,
    pub project_id: i64,
    /// `INV-{id}`, shown on the client dashboard.
    pub invoice_number: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub issued_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Parent record
// ---------------------------------------------------------------------------

/// A record in `inquiries.json`.
///
/// Sub-collection fields default to empty so records persisted before a
/// field existed still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInquiry {
    /// Millisecond-timestamp id, numeric on the wire.
    pub id: i64,
    pub client_name: String,
    pub client_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    pub project_title: String,
    pub description: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub messages: Vec<InquiryMessage>,
    #[serde(default)]
    pub tasks: Vec<InquiryTask>,
    #[serde(default)]
    pub documents: Vec<InquiryDocument>,
    #[serde(default)]
    pub invoices: Vec<InquiryInvoice>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for `create-inquiry` (the public contact form).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    #[validate(length(min = 1, message = "clientName must not be empty"))]
    pub client_name: String,
    #[validate(email(message = "clientEmail must be a valid email address"))]
    pub client_email: String,
    pub client_phone: Option<String>,
    #[validate(length(min = 1, message = "projectTitle must not be empty"))]
    pub project_title: String,
    pub description: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    /// Defaults to `medium`.
    pub priority: Option<InquiryPriority>,
}

/// Payload for `update-inquiry-status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiryStatus {
    pub inquiry_id: i64,
    pub status: Option<InquiryStatus>,
    pub priority: Option<InquiryPriority>,
}

/// Payload for `add-message`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMessage {
    pub inquiry_id: i64,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    pub sender: MessageSender,
}

/// Payload for `add-task`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTask {
    pub inquiry_id: i64,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<Timestamp>,
    /// Defaults to `medium`.
    pub priority: Option<InquiryPriority>,
}

/// Payload for `update-task-status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatus {
    pub inquiry_id: i64,
    pub task_id: i64,
    pub status: TaskStatus,
}

/// Payload for `add-team-member`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTeamMember {
    pub inquiry_id: i64,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

/// Payload for `update-project-progress`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectProgress {
    pub inquiry_id: i64,
    /// Clamped to 100 on apply.
    pub progress: u8,
}

/// Payload for `add-document`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddDocument {
    pub inquiry_id: i64,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub document_type: DocumentType,
    pub url: Option<String>,
}

/// Payload for `sign-document`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignDocument {
    pub inquiry_id: i64,
    pub document_id: i64,
    #[validate(length(min = 1, message = "signedBy must not be empty"))]
    pub signed_by: String,
}

/// Payload for `create-invoice`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoice {
    pub inquiry_id: i64,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    /// Defaults to `USD`.
    pub currency: Option<String>,
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

/// Payload for `update-invoice-status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceStatus {
    pub inquiry_id: i64,
    pub invoice_id: i64,
    pub status: InvoiceStatus,
}
