//! Repository for the `inquiries` collection and its nested sub-resources.
//!
//! Nested mutations all follow one shape: find the parent inquiry by id
//! (404 if absent), find or append within the nested array, bump the
//! parent's `updatedAt`, and write the whole collection back.

use atelier_core::error::CoreError;
use atelier_core::ids;
use chrono::Utc;
use validator::Validate;

use crate::models::inquiry::{
    AddDocument, AddMessage, AddTask, AddTeamMember, CreateInquiry, CreateInvoice, DocumentStatus,
    InquiryDocument, InquiryInvoice, InquiryMessage, InquiryPriority, InquiryStatus, InquiryTask,
    InvoiceStatus, ProjectInquiry, SignDocument, TaskStatus, TeamMember, UpdateInquiryStatus,
    UpdateInvoiceStatus, UpdateProjectProgress, UpdateTaskStatus,
};
use crate::models::notification::Notification;
use crate::JsonStore;

pub struct InquiryRepo;

impl InquiryRepo {
    /// List every inquiry. Callers gate access; clients must go through
    /// [`InquiryRepo::list_for_client`].
    pub async fn list(store: &JsonStore) -> Result<Vec<ProjectInquiry>, CoreError> {
        Ok(store.inquiries.load().await?)
    }

    /// List only the inquiries submitted under the given client email.
    pub async fn list_for_client(
        store: &JsonStore,
        client_email: &str,
    ) -> Result<Vec<ProjectInquiry>, CoreError> {
        let all = store.inquiries.load().await?;
        Ok(all
            .into_iter()
            .filter(|inquiry| inquiry.client_email.eq_ignore_ascii_case(client_email))
            .collect())
    }

    /// Append a new inquiry from the public contact form, plus the derived
    /// admin notification. Both writes are coordinated by the store; a
    /// failed notification write rolls the inquiry back.
    pub async fn create(
        store: &JsonStore,
        input: CreateInquiry,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let now = Utc::now();
        let inquiry = ProjectInquiry {
            id: ids::next_id(),
            client_name: input.client_name,
            client_email: input.client_email,
            client_phone: input.client_phone,
            project_title: input.project_title,
            description: input.description,
            project_type: input.project_type,
            budget: input.budget,
            timeline: input.timeline,
            status: InquiryStatus::Pending,
            priority: input.priority.unwrap_or(InquiryPriority::Medium),
            progress: 0,
            messages: Vec::new(),
            tasks: Vec::new(),
            documents: Vec::new(),
            invoices: Vec::new(),
            team_members: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let notification = Notification::inquiry_received(&inquiry);
        store
            .append_inquiry_with_notification(inquiry.clone(), notification)
            .await?;
        Ok(inquiry)
    }

    /// Update the parent's status and/or priority.
    pub async fn update_status(
        store: &JsonStore,
        input: UpdateInquiryStatus,
    ) -> Result<ProjectInquiry, CoreError> {
        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            if let Some(status) = input.status {
                inquiry.status = status;
            }
            if let Some(priority) = input.priority {
                inquiry.priority = priority;
            }
            Ok(())
        })
        .await
    }

    /// Append a message to the inquiry thread.
    pub async fn add_message(
        store: &JsonStore,
        input: AddMessage,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            inquiry.messages.push(InquiryMessage {
                id: ids::next_id(),
                project_id: inquiry.id,
                sender: input.sender,
                message: input.message,
                timestamp: Utc::now(),
            });
            Ok(())
        })
        .await
    }

    /// Append a task; new tasks start `pending`.
    pub async fn add_task(store: &JsonStore, input: AddTask) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            inquiry.tasks.push(InquiryTask {
                id: ids::next_id(),
                project_id: inquiry.id,
                title: input.title,
                description: input.description,
                status: TaskStatus::Pending,
                assignee: input.assignee,
                due_date: input.due_date,
                priority: input.priority.unwrap_or(InquiryPriority::Medium),
            });
            Ok(())
        })
        .await
    }

    /// Set one task's status.
    pub async fn update_task_status(
        store: &JsonStore,
        input: UpdateTaskStatus,
    ) -> Result<ProjectInquiry, CoreError> {
        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            let task = inquiry
                .tasks
                .iter_mut()
                .find(|t| t.id == input.task_id)
                .ok_or_else(|| CoreError::not_found("Task", input.task_id))?;
            task.status = input.status;
            Ok(())
        })
        .await
    }

    /// Append a team member.
    pub async fn add_team_member(
        store: &JsonStore,
        input: AddTeamMember,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            inquiry.team_members.push(TeamMember {
                id: ids::next_id(),
                project_id: inquiry.id,
                name: input.name,
                role: input.role,
                email: input.email,
            });
            Ok(())
        })
        .await
    }

    /// Set the completion percentage, clamped to 100.
    pub async fn update_progress(
        store: &JsonStore,
        input: UpdateProjectProgress,
    ) -> Result<ProjectInquiry, CoreError> {
        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            inquiry.progress = input.progress.min(100);
            Ok(())
        })
        .await
    }

    /// Append a document; new documents start `draft`.
    pub async fn add_document(
        store: &JsonStore,
        input: AddDocument,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            inquiry.documents.push(InquiryDocument {
                id: ids::next_id(),
                project_id: inquiry.id,
                name: input.name,
                document_type: input.document_type,
                status: DocumentStatus::Draft,
                url: input.url,
                signed_by: None,
                signed_at: None,
            });
            Ok(())
        })
        .await
    }

    /// Record a signature: status becomes `signed` with signer and time.
    pub async fn sign_document(
        store: &JsonStore,
        input: SignDocument,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            let document = inquiry
                .documents
                .iter_mut()
                .find(|d| d.id == input.document_id)
                .ok_or_else(|| CoreError::not_found("Document", input.document_id))?;
            document.status = DocumentStatus::Signed;
            document.signed_by = Some(input.signed_by);
            document.signed_at = Some(Utc::now());
            Ok(())
        })
        .await
    }

    /// Append an invoice; new invoices start `draft` and get an
    /// `INV-{id}` number.
    pub async fn create_invoice(
        store: &JsonStore,
        input: CreateInvoice,
    ) -> Result<ProjectInquiry, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            let id = ids::next_id();
            inquiry.invoices.push(InquiryInvoice {
                id,
                project_id: inquiry.id,
                invoice_number: format!("INV-{id}"),
                amount: input.amount,
                currency: input.currency.unwrap_or_else(|| "USD".to_string()),
                status: InvoiceStatus::Draft,
                due_date: input.due_date,
                items: input.items,
                issued_at: Utc::now(),
            });
            Ok(())
        })
        .await
    }

    /// Set one invoice's status.
    pub async fn update_invoice_status(
        store: &JsonStore,
        input: UpdateInvoiceStatus,
    ) -> Result<ProjectInquiry, CoreError> {
        Self::with_inquiry(store, input.inquiry_id, move |inquiry| {
            let invoice = inquiry
                .invoices
                .iter_mut()
                .find(|i| i.id == input.invoice_id)
                .ok_or_else(|| CoreError::not_found("Invoice", input.invoice_id))?;
            invoice.status = input.status;
            Ok(())
        })
        .await
    }

    /// Locate the parent inquiry, apply the nested mutation, bump the
    /// parent's `updatedAt`, and return the updated record.
    async fn with_inquiry<F>(
        store: &JsonStore,
        inquiry_id: i64,
        apply: F,
    ) -> Result<ProjectInquiry, CoreError>
    where
        F: FnOnce(&mut ProjectInquiry) -> Result<(), CoreError>,
    {
        store
            .inquiries
            .update(move |items| {
                let inquiry = items
                    .iter_mut()
                    .find(|i| i.id == inquiry_id)
                    .ok_or_else(|| CoreError::not_found("Inquiry", inquiry_id))?;
                apply(inquiry)?;
                inquiry.updated_at = Utc::now();
                Ok(inquiry.clone())
            })
            .await
    }
}
