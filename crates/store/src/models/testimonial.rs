//! Testimonial entity model and DTOs.

use atelier_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Moderation status. Public submissions start `pending`; only `approved`
/// testimonials are rendered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialStatus {
    Pending,
    Approved,
    Rejected,
}

/// A record in `testimonials.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    /// 1-5 stars.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub status: TestimonialStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for `create-testimonial`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub position: String,
    pub company: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
    pub avatar_url: Option<String>,
}

/// Payload for `update-testimonial`. Absent fields are preserved; `status`
/// is how the admin dashboard moderates submissions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub id: String,
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
    pub avatar_url: Option<String>,
    pub status: Option<TestimonialStatus>,
}

/// Payload for `delete-testimonial`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTestimonial {
    pub id: String,
}
