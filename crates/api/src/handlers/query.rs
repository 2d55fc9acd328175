//! GET dispatch for `/api/graphql?type=...`.

use atelier_core::error::CoreError;
use atelier_store::models::inquiry::InquiryStatus;
use atelier_store::models::project::ProjectStatus;
use atelier_store::models::testimonial::TestimonialStatus;
use atelier_store::repositories::{InquiryRepo, NotificationRepo, ProjectRepo, TestimonialRepo};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/graphql`.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// Which collection to fetch.
    #[serde(rename = "type")]
    pub resource: String,
}

/// Aggregate counters backing the dashboard overview cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_projects: usize,
    pub live_projects: usize,
    pub total_testimonials: usize,
    pub approved_testimonials: usize,
    pub pending_testimonials: usize,
    pub total_inquiries: usize,
    pub pending_inquiries: usize,
    pub active_inquiries: usize,
    pub completed_inquiries: usize,
    pub total_notifications: usize,
    pub unread_notifications: usize,
}

/// GET /api/graphql?type={projects|testimonials|inquiries|notifications|analytics}
///
/// Projects, testimonials, notifications and analytics are public.
/// Inquiries require a bearer token: admins see the full list, client
/// tokens see only inquiries submitted under their own email claim.
pub async fn query(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Query(params): Query<QueryParams>,
) -> AppResult<Response> {
    match params.resource.as_str() {
        "projects" => {
            let projects = ProjectRepo::list(&state.store).await?;
            Ok(Json(ApiResponse::new(projects)).into_response())
        }
        "testimonials" => {
            let testimonials = TestimonialRepo::list(&state.store).await?;
            Ok(Json(ApiResponse::new(testimonials)).into_response())
        }
        "notifications" => {
            let notifications = NotificationRepo::list(&state.store).await?;
            Ok(Json(ApiResponse::new(notifications)).into_response())
        }
        "inquiries" => {
            let user = auth.0.ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "A bearer token is required to list inquiries".into(),
                ))
            })?;
            let inquiries = if user.is_admin() {
                InquiryRepo::list(&state.store).await?
            } else {
                InquiryRepo::list_for_client(&state.store, &user.email).await?
            };
            Ok(Json(ApiResponse::new(inquiries)).into_response())
        }
        "analytics" => {
            let summary = analytics(&state).await?;
            Ok(Json(ApiResponse::new(summary)).into_response())
        }
        other => Err(AppError::BadRequest(format!("Unknown query type: {other}"))),
    }
}

/// Compute the dashboard counters from the four collections.
async fn analytics(state: &AppState) -> AppResult<AnalyticsSummary> {
    let projects = ProjectRepo::list(&state.store).await?;
    let testimonials = TestimonialRepo::list(&state.store).await?;
    let inquiries = InquiryRepo::list(&state.store).await?;
    let notifications = NotificationRepo::list(&state.store).await?;

    Ok(AnalyticsSummary {
        total_projects: projects.len(),
        live_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Live)
            .count(),
        total_testimonials: testimonials.len(),
        approved_testimonials: testimonials
            .iter()
            .filter(|t| t.status == TestimonialStatus::Approved)
            .count(),
        pending_testimonials: testimonials
            .iter()
            .filter(|t| t.status == TestimonialStatus::Pending)
            .count(),
        total_inquiries: inquiries.len(),
        pending_inquiries: inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::Pending)
            .count(),
        active_inquiries: inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::InProgress)
            .count(),
        completed_inquiries: inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::Completed)
            .count(),
        total_notifications: notifications.len(),
        unread_notifications: notifications.iter().filter(|n| !n.is_read).count(),
    })
}
