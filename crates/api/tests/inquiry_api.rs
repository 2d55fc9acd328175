//! Integration tests for inquiry mutations and their nested sub-resources
//! through `/api/graphql`.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{admin_token, body_json, build_test_app, expect_data, get_with_token, post_json};
use serde_json::json;

/// Submit an inquiry through the public form and return its record.
async fn submit_inquiry(app: Router) -> serde_json::Value {
    expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "create-inquiry",
                "data": {
                    "clientName": "Dana Cruz",
                    "clientEmail": "dana@example.com",
                    "projectTitle": "Booking platform",
                    "description": "Online booking for a small studio.",
                    "projectType": "web-app",
                    "budget": "$10k-$25k",
                    "timeline": "3 months"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await
}

async fn list_inquiries(app: Router) -> Vec<serde_json::Value> {
    expect_data(
        get_with_token(app, "/api/graphql?type=inquiries", &admin_token()).await,
        StatusCode::OK,
    )
    .await
    .as_array()
    .expect("array")
    .clone()
}

async fn list_notifications(app: Router) -> Vec<serde_json::Value> {
    expect_data(
        common::get(app, "/api/graphql?type=notifications").await,
        StatusCode::OK,
    )
    .await
    .as_array()
    .expect("array")
    .clone()
}

// ---------------------------------------------------------------------------
// Create: inquiry plus derived notification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_inquiry_appends_exactly_one_of_each() {
    let (app, _dir) = build_test_app().await;
    let inquiries_before = list_inquiries(app.clone()).await.len();
    let notifications_before = list_notifications(app.clone()).await.len();

    let created = submit_inquiry(app.clone()).await;
    assert!(created["id"].is_i64(), "inquiry id is numeric on the wire");
    assert_eq!(created["status"], "pending");
    assert_eq!(created["priority"], "medium");
    assert_eq!(created["progress"], 0);
    assert_eq!(created["messages"], json!([]));
    assert_eq!(created["tasks"], json!([]));

    let inquiries = list_inquiries(app.clone()).await;
    assert_eq!(inquiries.len(), inquiries_before + 1);

    let notifications = list_notifications(app).await;
    assert_eq!(notifications.len(), notifications_before + 1);

    let derived = notifications.last().expect("derived notification");
    assert_eq!(derived["category"], "inquiry");
    assert!(
        derived["message"]
            .as_str()
            .unwrap()
            .contains("Booking platform"),
        "notification must reference the submitted projectTitle: {derived}"
    );
}

#[tokio::test]
async fn create_inquiry_rejects_a_bad_email() {
    let (app, _dir) = build_test_app().await;

    let response = post_json(
        app,
        "/api/graphql",
        json!({
            "type": "create-inquiry",
            "data": {
                "clientName": "Dana",
                "clientEmail": "not-an-email",
                "projectTitle": "t",
                "description": "d",
                "projectType": "web",
                "budget": "$1",
                "timeline": "1w"
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_message_appends_with_sender_and_fresh_timestamp() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let updated = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "add-message",
                "data": {
                    "inquiryId": inquiry["id"],
                    "message": "Hello",
                    "sender": "client"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let messages = updated["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "client");
    assert_eq!(messages[0]["message"], "Hello");
    assert!(messages[0]["timestamp"].is_string());
    assert_eq!(messages[0]["projectId"], inquiry["id"]);
}

#[tokio::test]
async fn add_message_to_unknown_inquiry_is_404_and_changes_nothing() {
    let (app, _dir) = build_test_app().await;
    let before = list_inquiries(app.clone()).await;

    let response = post_json(
        app.clone(),
        "/api/graphql",
        json!({
            "type": "add-message",
            "data": { "inquiryId": 0, "message": "Hello", "sender": "client" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("not found"));

    let after = list_inquiries(app).await;
    assert_eq!(json!(before), json!(after));
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn task_lifecycle_over_http() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let with_task = expect_data(
        post_json(
            app.clone(),
            "/api/graphql",
            json!({
                "type": "add-task",
                "data": {
                    "inquiryId": inquiry["id"],
                    "title": "Wireframes",
                    "assignee": "Riley",
                    "priority": "high"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let task = &with_task["tasks"][0];
    assert_eq!(task["status"], "pending");
    assert_eq!(task["priority"], "high");

    let done = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "update-task-status",
                "data": {
                    "inquiryId": inquiry["id"],
                    "taskId": task["id"],
                    "status": "completed"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(done["tasks"][0]["status"], "completed");
}

#[tokio::test]
async fn concurrent_add_task_calls_both_survive() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let task = |title: &str| {
        json!({
            "type": "add-task",
            "data": { "inquiryId": inquiry["id"], "title": title }
        })
    };

    // Two near-simultaneous writers against the same inquiry. The store's
    // per-resource lock serializes the read-modify-write cycles, so
    // neither update may be lost.
    let (first, second) = tokio::join!(
        post_json(app.clone(), "/api/graphql", task("First")),
        post_json(app.clone(), "/api/graphql", task("Second")),
    );
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let inquiries = list_inquiries(app).await;
    let stored = inquiries
        .iter()
        .find(|i| i["id"] == inquiry["id"])
        .expect("inquiry present");
    let titles: Vec<&str> = stored["tasks"]
        .as_array()
        .expect("tasks")
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2, "no task may be lost: {titles:?}");
    assert!(titles.contains(&"First") && titles.contains(&"Second"));
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn document_signing_records_metadata() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let with_doc = expect_data(
        post_json(
            app.clone(),
            "/api/graphql",
            json!({
                "type": "add-document",
                "data": {
                    "inquiryId": inquiry["id"],
                    "name": "Service agreement",
                    "documentType": "agreement"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let document = &with_doc["documents"][0];
    assert_eq!(document["status"], "draft");

    let signed = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "sign-document",
                "data": {
                    "inquiryId": inquiry["id"],
                    "documentId": document["id"],
                    "signedBy": "Dana Cruz"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let document = &signed["documents"][0];
    assert_eq!(document["status"], "signed");
    assert_eq!(document["signedBy"], "Dana Cruz");
    assert!(document["signedAt"].is_string());
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invoice_numbering_and_status_transitions() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let with_invoice = expect_data(
        post_json(
            app.clone(),
            "/api/graphql",
            json!({
                "type": "create-invoice",
                "data": {
                    "inquiryId": inquiry["id"],
                    "amount": 2500.0,
                    "items": [
                        { "description": "Design sprint", "quantity": 1, "unitPrice": 2500.0 }
                    ]
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let invoice = &with_invoice["invoices"][0];
    assert_eq!(invoice["status"], "draft");
    assert_eq!(invoice["currency"], "USD");
    assert!(invoice["invoiceNumber"]
        .as_str()
        .unwrap()
        .starts_with("INV-"));

    let sent = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "update-invoice-status",
                "data": {
                    "inquiryId": inquiry["id"],
                    "invoiceId": invoice["id"],
                    "status": "sent"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(sent["invoices"][0]["status"], "sent");
}

// ---------------------------------------------------------------------------
// Status, progress, team
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_inquiry_status_and_priority() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let updated = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "update-inquiry-status",
                "data": {
                    "inquiryId": inquiry["id"],
                    "status": "in-progress",
                    "priority": "urgent"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["status"], "in-progress");
    assert_eq!(updated["priority"], "urgent");
}

#[tokio::test]
async fn progress_is_clamped_to_100() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let updated = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "update-project-progress",
                "data": { "inquiryId": inquiry["id"], "progress": 250 }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["progress"], 100);
}

#[tokio::test]
async fn add_team_member_appends() {
    let (app, _dir) = build_test_app().await;
    let inquiry = submit_inquiry(app.clone()).await;

    let updated = expect_data(
        post_json(
            app,
            "/api/graphql",
            json!({
                "type": "add-team-member",
                "data": {
                    "inquiryId": inquiry["id"],
                    "name": "Riley Chen",
                    "role": "Designer"
                }
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let members = updated["teamMembers"].as_array().expect("teamMembers");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], "Riley Chen");
}
