//! Integration tests for the GET side of `/api/graphql`.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, client_token, expect_data, get, get_with_token,
};

// ---------------------------------------------------------------------------
// Public collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_are_seeded_on_first_read() {
    let (app, _dir) = build_test_app().await;
    let response = get(app, "/api/graphql?type=projects").await;

    let data = expect_data(response, StatusCode::OK).await;
    let projects = data.as_array().expect("data is an array");
    assert!(!projects.is_empty(), "seed defaults must be present");
    for project in projects {
        assert!(project["id"].is_string());
        assert!(project["title"].is_string());
        assert!(project["createdAt"].is_string());
    }
}

#[tokio::test]
async fn testimonials_and_notifications_are_public() {
    let (app, _dir) = build_test_app().await;

    let testimonials = expect_data(
        get(app.clone(), "/api/graphql?type=testimonials").await,
        StatusCode::OK,
    )
    .await;
    assert!(!testimonials.as_array().expect("array").is_empty());

    let notifications = expect_data(
        get(app, "/api/graphql?type=notifications").await,
        StatusCode::OK,
    )
    .await;
    assert!(!notifications.as_array().expect("array").is_empty());
}

// ---------------------------------------------------------------------------
// Unknown query type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_query_type_is_a_bad_request() {
    let (app, _dir) = build_test_app().await;
    let response = get(app, "/api/graphql?type=widgets").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(
        json["error"].as_str().unwrap().contains("widgets"),
        "error should name the unknown type: {json}"
    );
}

// ---------------------------------------------------------------------------
// Inquiry authorization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inquiries_require_a_bearer_token() {
    let (app, _dir) = build_test_app().await;
    let response = get(app, "/api/graphql?type=inquiries").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn admin_sees_all_inquiries() {
    let (app, _dir) = build_test_app().await;
    let response = get_with_token(app, "/api/graphql?type=inquiries", &admin_token()).await;

    let data = expect_data(response, StatusCode::OK).await;
    assert_eq!(data.as_array().expect("array").len(), 1, "one seed inquiry");
}

#[tokio::test]
async fn client_sees_only_their_own_inquiries() {
    let (app, _dir) = build_test_app().await;

    // The seed inquiry belongs to jordan@example.com.
    let own = expect_data(
        get_with_token(
            app.clone(),
            "/api/graphql?type=inquiries",
            &client_token("jordan@example.com"),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(own.as_array().expect("array").len(), 1);

    let other = expect_data(
        get_with_token(
            app,
            "/api/graphql?type=inquiries",
            &client_token("stranger@example.com"),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert!(other.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let (app, _dir) = build_test_app().await;
    let response =
        get_with_token(app, "/api/graphql?type=inquiries", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analytics_counts_the_seeded_collections() {
    let (app, _dir) = build_test_app().await;
    let response = get(app, "/api/graphql?type=analytics").await;

    let data = expect_data(response, StatusCode::OK).await;
    assert_eq!(data["totalProjects"], 3);
    assert_eq!(data["totalInquiries"], 1);
    assert_eq!(data["pendingInquiries"], 1);
    assert_eq!(data["totalTestimonials"], 3);
    assert_eq!(data["approvedTestimonials"], 2);
    assert_eq!(data["unreadNotifications"], 1);
}
