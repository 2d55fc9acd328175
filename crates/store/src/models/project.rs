//! Portfolio project entity model and DTOs.

use atelier_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Publication status of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Live,
    InProgress,
    Upcoming,
    /// A rebuild of an existing product, shown in the "clones" section.
    Clone,
}

/// A record in `projects.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Millisecond-timestamp id in string form.
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Featured projects are ordered first on the landing page.
    #[serde(default)]
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for `create-project`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    /// Defaults to `upcoming` if omitted.
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

/// Payload for `update-project`. Absent fields are preserved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

/// Payload for `delete-project`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProject {
    pub id: String,
}
