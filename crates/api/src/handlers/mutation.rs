//! POST dispatch for `/api/graphql`: the mutation router.
//!
//! The body `{type, data}` deserializes into the [`Mutation`] tagged enum,
//! so every operation name carries its own typed payload and a malformed
//! payload is rejected before anything touches the store.

use atelier_core::error::CoreError;
use atelier_store::models::inquiry::{
    AddDocument, AddMessage, AddTask, AddTeamMember, CreateInquiry, CreateInvoice, SignDocument,
    UpdateInquiryStatus, UpdateInvoiceStatus, UpdateProjectProgress, UpdateTaskStatus,
};
use atelier_store::models::notification::{CreateNotification, MarkNotificationRead};
use atelier_store::models::project::{CreateProject, DeleteProject, UpdateProject};
use atelier_store::models::testimonial::{
    CreateTestimonial, DeleteTestimonial, UpdateTestimonial,
};
use atelier_store::repositories::{InquiryRepo, NotificationRepo, ProjectRepo, TestimonialRepo};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Every operation name the router accepts. Kept in sync with [`Mutation`];
/// used to tell "unknown operation" apart from "known operation, bad
/// payload" when deserialization fails.
const KNOWN_OPERATIONS: [&str; 20] = [
    "create-project",
    "update-project",
    "delete-project",
    "create-testimonial",
    "update-testimonial",
    "delete-testimonial",
    "create-inquiry",
    "update-inquiry-status",
    "add-message",
    "add-task",
    "update-task-status",
    "add-team-member",
    "update-project-progress",
    "add-document",
    "sign-document",
    "create-invoice",
    "update-invoice-status",
    "mark-notification-read",
    "mark-all-notifications-read",
    "create-notification",
];

/// Payload for operations that carry no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Empty {}

/// One mutation per operation name, each with its own typed payload.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Mutation {
    CreateProject(CreateProject),
    UpdateProject(UpdateProject),
    DeleteProject(DeleteProject),
    CreateTestimonial(CreateTestimonial),
    UpdateTestimonial(UpdateTestimonial),
    DeleteTestimonial(DeleteTestimonial),
    CreateInquiry(CreateInquiry),
    UpdateInquiryStatus(UpdateInquiryStatus),
    AddMessage(AddMessage),
    AddTask(AddTask),
    UpdateTaskStatus(UpdateTaskStatus),
    AddTeamMember(AddTeamMember),
    UpdateProjectProgress(UpdateProjectProgress),
    AddDocument(AddDocument),
    SignDocument(SignDocument),
    CreateInvoice(CreateInvoice),
    UpdateInvoiceStatus(UpdateInvoiceStatus),
    MarkNotificationRead(MarkNotificationRead),
    MarkAllNotificationsRead(Empty),
    CreateNotification(CreateNotification),
}

/// POST /api/graphql
///
/// Dispatch a mutation. 200 with the affected entity on success, 404 when a
/// referenced record is missing, 400 for unknown operations or payloads
/// that fail to deserialize or validate.
pub async fn mutate(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let mutation = parse_mutation(body)?;

    match mutation {
        // --- Projects ---
        Mutation::CreateProject(input) => {
            envelope(ProjectRepo::create(&state.store, input).await?)
        }
        Mutation::UpdateProject(input) => {
            envelope(ProjectRepo::update(&state.store, input).await?)
        }
        Mutation::DeleteProject(input) => {
            envelope(ProjectRepo::delete(&state.store, input).await?)
        }

        // --- Testimonials ---
        Mutation::CreateTestimonial(input) => {
            // Public submissions start pending; an admin token approves
            // immediately.
            let approved = auth.0.as_ref().is_some_and(AuthUser::is_admin);
            envelope(TestimonialRepo::create(&state.store, input, approved).await?)
        }
        Mutation::UpdateTestimonial(input) => {
            envelope(TestimonialRepo::update(&state.store, input).await?)
        }
        Mutation::DeleteTestimonial(input) => {
            envelope(TestimonialRepo::delete(&state.store, input).await?)
        }

        // --- Inquiries and nested sub-resources ---
        Mutation::CreateInquiry(input) => {
            envelope(InquiryRepo::create(&state.store, input).await?)
        }
        Mutation::UpdateInquiryStatus(input) => {
            envelope(InquiryRepo::update_status(&state.store, input).await?)
        }
        Mutation::AddMessage(input) => {
            envelope(InquiryRepo::add_message(&state.store, input).await?)
        }
        Mutation::AddTask(input) => envelope(InquiryRepo::add_task(&state.store, input).await?),
        Mutation::UpdateTaskStatus(input) => {
            envelope(InquiryRepo::update_task_status(&state.store, input).await?)
        }
        Mutation::AddTeamMember(input) => {
            envelope(InquiryRepo::add_team_member(&state.store, input).await?)
        }
        Mutation::UpdateProjectProgress(input) => {
            envelope(InquiryRepo::update_progress(&state.store, input).await?)
        }
        Mutation::AddDocument(input) => {
            envelope(InquiryRepo::add_document(&state.store, input).await?)
        }
        Mutation::SignDocument(input) => {
            envelope(InquiryRepo::sign_document(&state.store, input).await?)
        }
        Mutation::CreateInvoice(input) => {
            envelope(InquiryRepo::create_invoice(&state.store, input).await?)
        }
        Mutation::UpdateInvoiceStatus(input) => {
            envelope(InquiryRepo::update_invoice_status(&state.store, input).await?)
        }

        // --- Notifications ---
        Mutation::MarkNotificationRead(input) => {
            envelope(NotificationRepo::mark_read(&state.store, input).await?)
        }
        Mutation::MarkAllNotificationsRead(_) => {
            let marked = NotificationRepo::mark_all_read(&state.store).await?;
            envelope(serde_json::json!({ "markedRead": marked }))
        }
        Mutation::CreateNotification(input) => {
            // Broadcasts are admin-only.
            let user = auth.0.as_ref().ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "A bearer token is required to create notifications".into(),
                ))
            })?;
            if !user.is_admin() {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Only admins may create notifications".into(),
                )));
            }
            envelope(NotificationRepo::create(&state.store, input).await?)
        }
    }
}

/// Parse the `{type, data}` body into a [`Mutation`].
///
/// A missing `data` field is treated as an empty object so operations
/// without a payload accept both shapes.
fn parse_mutation(body: Value) -> Result<Mutation, AppError> {
    let operation = body
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("Missing operation type".to_string()))?;

    if !KNOWN_OPERATIONS.contains(&operation.as_str()) {
        return Err(AppError::Core(CoreError::UnknownOperation(operation)));
    }

    let data = body
        .get("data")
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));

    serde_json::from_value(serde_json::json!({ "type": operation.as_str(), "data": data }))
        .map_err(|err| AppError::BadRequest(format!("Invalid payload for {operation}: {err}")))
}

fn envelope<T: Serialize>(data: T) -> AppResult<Response> {
    Ok(Json(ApiResponse::new(data)).into_response())
}
