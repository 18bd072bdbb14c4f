//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

async fn create_type(server: &TestServer, name: &str) -> StreamTypeJson {
    let response = server
        .post("/api/stream-types", &json!({ "name": name }))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_stream(server: &TestServer, request: &CreateStream) -> StreamJson {
    let response = server.post("/api/streams", request).await.unwrap();
    let body: DataEnvelope<StreamJson> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.data
}

async fn list_streams(server: &TestServer, query: &[(&str, &str)]) -> StreamListJson {
    let response = server.get_query("/api/streams", query).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn unprocessable(response: reqwest::Response) -> ErrorJson {
    assert_json(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Stream Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_created_ids_are_distinct_uuids() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let suffix = unique_suffix();

    let mut ids = HashSet::new();
    for i in 0..5 {
        let stream = create_stream(&server, &CreateStream::new(format!("Id {suffix} {i}"), 10, None)).await;
        assert!(Uuid::parse_str(&stream.id).is_ok());
        ids.insert(stream.id);
    }
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_create_then_get_returns_exact_expiration() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateStream::new(format!("Exact {}", unique_suffix()), 42, None);
    request.date_expiration = date_in_days(3);

    let created = create_stream(&server, &request).await;
    let response = server.get(&format!("/api/streams/{}", created.id)).await.unwrap();
    let fetched: DataEnvelope<StreamJson> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.data.date_expiration, request.date_expiration);
    assert_eq!(fetched.data.title, request.title);
    assert_eq!(fetched.data.tokens_price, 42);
    assert!(fetched.data.stream_type.is_none());
}

#[tokio::test]
async fn test_tokens_price_must_be_positive() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateStream::new(format!("Free {}", unique_suffix()), 0, None);
    let response = server.post("/api/streams", &request).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("tokens_price"));

    let stream = create_stream(&server, &CreateStream::new(format!("Paid {}", unique_suffix()), 5, None)).await;
    let path = format!("/api/streams/{}", stream.id);
    let response = server.patch(&path, &json!({ "tokens_price": 0 })).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("tokens_price"));

    let response = server.get(&path).await.unwrap();
    let fetched: DataEnvelope<StreamJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.tokens_price, 5);
}

#[tokio::test]
async fn test_date_expiration_rules() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for date in [date_in_days(-1), "2030-01-01T00:00:00Z".to_string(), "2030-01-01".to_string()] {
        let mut request = CreateStream::new(format!("Dated {}", unique_suffix()), 10, None);
        request.date_expiration = date;
        let response = server.post("/api/streams", &request).await.unwrap();
        let error = unprocessable(response).await;
        assert!(error.errors.contains_key("date_expiration"));
    }

    let mut request = CreateStream::new(format!("Dated {}", unique_suffix()), 10, None);
    request.date_expiration = date_in_days(1);
    create_stream(&server, &request).await;
}

#[tokio::test]
async fn test_missing_fields_are_reported() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/api/streams", &json!({})).await.unwrap();
    let error = unprocessable(response).await;

    for field in ["title", "tokens_price", "date_expiration"] {
        assert!(error.errors.contains_key(field), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_unknown_stream_type_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateStream::new(format!("Orphan {}", unique_suffix()), 10, Some(i64::MAX));
    let response = server.post("/api/streams", &request).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("stream_type_id"));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let arts = create_type(&server, &format!("Arts {}", unique_suffix())).await;
    let created = create_stream(
        &server,
        &CreateStream::new(format!("Watercolor {}", unique_suffix()), 90, Some(arts.id)),
    )
    .await;
    let path = format!("/api/streams/{}", created.id);

    let response = server.patch(&path, &json!({ "tokens_price": 120 })).await.unwrap();
    let updated: DataEnvelope<StreamJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.tokens_price, 120);
    assert_eq!(updated.data.title, created.title);
    assert_eq!(updated.data.description, created.description);
    assert_eq!(updated.data.date_expiration, created.date_expiration);
    assert_eq!(updated.data.stream_type, created.stream_type);

    let response = server
        .put(&path, &json!({ "description": null, "stream_type_id": null }))
        .await
        .unwrap();
    let cleared: DataEnvelope<StreamJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cleared.data.description, None);
    assert_eq!(cleared.data.stream_type, None);
    assert_eq!(cleared.data.tokens_price, 120);
}

#[tokio::test]
async fn test_soft_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let marker = unique_suffix();
    let created = create_stream(&server, &CreateStream::new(format!("Gone {marker}"), 10, None)).await;
    let path = format!("/api/streams/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let listing = list_streams(&server, &[("search", marker.as_str())]).await;
    assert!(listing.data.is_empty());

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.patch(&path, &json!({ "title": "Back" })).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Not found wins over an invalid body
    let response = server.patch(&path, &json!({ "tokens_price": 0 })).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_and_unknown_ids_are_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/streams/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/streams/{}", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/stream-types/abc").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch(
            &format!("/api/streams/{}", Uuid::new_v4()),
            &json!({ "tokens_price": 0 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put("/api/users/2147483000", &json!({ "email": "not-an-email" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_wrong_json_type_is_reported_on_the_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/streams",
            &json!({
                "title": "Typed",
                "tokens_price": "abc",
                "date_expiration": date_in_days(3),
            }),
        )
        .await
        .unwrap();

    let error = unprocessable(response).await;
    assert_eq!(error.message, "The tokens price field must be an integer.");
    assert_eq!(
        error.errors["tokens_price"],
        vec!["The tokens price field must be an integer.".to_string()]
    );
}

// ============================================================================
// Stream Query Tests
// ============================================================================

#[tokio::test]
async fn test_search_aliases_are_equivalent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let marker = unique_suffix();
    create_stream(&server, &CreateStream::new(format!("Alias {marker} one"), 10, None)).await;
    let mut described = CreateStream::new(format!("Alias two {}", unique_suffix()), 20, None);
    described.description = Some(format!("mentions {}", marker.to_uppercase()));
    create_stream(&server, &described).await;

    let mut results = Vec::new();
    for key in ["search", "q", "filter[search]"] {
        let listing = list_streams(&server, &[(key, marker.as_str())]).await;
        let ids: HashSet<String> = listing.data.into_iter().map(|s| s.id).collect();
        results.push(ids);
    }

    assert_eq!(results[0].len(), 2);
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
}

#[tokio::test]
async fn test_sorting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_type(&server, &format!("Sorting {}", unique_suffix())).await;
    for (title, price) in [("Bravo", 30), ("Alpha", 10), ("Delta", 40), ("Charlie", 20)] {
        create_stream(&server, &CreateStream::new(title, price, Some(category.id))).await;
    }
    let type_id = category.id.to_string();

    let listing = list_streams(&server, &[("type", type_id.as_str()), ("sort", "-tokens_price")]).await;
    let prices: Vec<i64> = listing.data.iter().map(|s| s.tokens_price).collect();
    assert_eq!(prices, vec![40, 30, 20, 10]);

    let listing = list_streams(
        &server,
        &[("stream_type_id", type_id.as_str()), ("order_by", "title"), ("order_dir", "asc")],
    )
    .await;
    let titles: Vec<&str> = listing.data.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie", "Delta"]);
}

#[tokio::test]
async fn test_invalid_query_parameters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_query("/api/streams", &[("sort", "password")]).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("sort"));

    let response = server.get_query("/api/streams", &[("type", "music")]).await.unwrap();
    let error = unprocessable(response).await;
    assert!(!error.errors.is_empty());
}

#[tokio::test]
async fn test_pagination_reconstructs_the_set() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_type(&server, &format!("Paging {}", unique_suffix())).await;
    let mut expected = HashSet::new();
    for i in 0..7 {
        let stream =
            create_stream(&server, &CreateStream::new(format!("Page item {i}"), 1 + i, Some(category.id))).await;
        expected.insert(stream.id);
    }
    let type_id = category.id.to_string();

    let first = list_streams(&server, &[("type", type_id.as_str()), ("per_page", "3")]).await;
    assert_eq!(first.meta.last_page, 3);
    assert_eq!(first.meta.total, 7);
    assert_eq!(first.meta.per_page, 3);
    assert_eq!(first.meta.from, Some(1));
    assert_eq!(first.meta.to, Some(3));
    assert!(first.links.prev.is_none());
    assert!(first.links.next.is_some());
    assert_eq!(first.meta.path, "/api/streams");

    let mut seen = Vec::new();
    for page in 1..=first.meta.last_page {
        let page = page.to_string();
        let listing = list_streams(
            &server,
            &[("type", type_id.as_str()), ("per_page", "3"), ("page", page.as_str()), ("sort", "tokens_price")],
        )
        .await;
        seen.extend(listing.data.into_iter().map(|s| s.id));
    }

    assert_eq!(seen.len(), 7);
    assert_eq!(seen.into_iter().collect::<HashSet<_>>(), expected);
}

#[tokio::test]
async fn test_music_jazz_night_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let music_name = format!("Music {}", unique_suffix());
    let music = create_type(&server, &music_name).await;

    let mut request = CreateStream::new("Jazz Night", 100, Some(music.id));
    request.description = Some("Smooth jazz evening".to_string());
    let jazz = create_stream(&server, &request).await;

    let type_id = music.id.to_string();
    let listing = list_streams(&server, &[("type", type_id.as_str())]).await;
    assert_eq!(listing.data.len(), 1);
    let found = &listing.data[0];
    assert_eq!(found.id, jazz.id);
    assert_eq!(found.title, "Jazz Night");
    assert_eq!(found.tokens_price, 100);
    assert_eq!(
        found.stream_type,
        Some(TypeSummary {
            id: music.id,
            name: music_name,
        })
    );
}

// ============================================================================
// Stream Type Tests
// ============================================================================

#[tokio::test]
async fn test_stream_type_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = format!("Podcast {}", unique_suffix());
    let created = create_type(&server, &name).await;
    let path = format!("/api/stream-types/{}", created.id);

    let response = server.post("/api/stream-types", &json!({ "name": name })).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("name"));

    let renamed = format!("Renamed {}", unique_suffix());
    let response = server.patch(&path, &json!({ "name": renamed })).await.unwrap();
    let updated: StreamTypeJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, renamed);

    let response = server.get("/api/stream-types").await.unwrap();
    let all: Vec<StreamTypeJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|t| t.id == created.id && t.name == renamed));

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleting_referenced_type_detaches_streams() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_type(&server, &format!("Ephemeral {}", unique_suffix())).await;
    let stream = create_stream(
        &server,
        &CreateStream::new(format!("Detached {}", unique_suffix()), 15, Some(category.id)),
    )
    .await;
    assert!(stream.stream_type.is_some());

    let response = server
        .delete(&format!("/api/stream-types/{}", category.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/streams/{}", stream.id)).await.unwrap();
    let fetched: DataEnvelope<StreamJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.data.stream_type.is_none());
}

// ============================================================================
// User and Auth Tests
// ============================================================================

async fn create_user(server: &TestServer, request: &CreateUser) -> UserJson {
    let response = server.post("/api/users", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn login(server: &TestServer, email: &str, password: &str) -> AuthJson {
    let response = server
        .post("/api/auth/login", &json!({ "email": email, "password": password }))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

#[tokio::test]
async fn test_user_crud_never_exposes_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUser::unique();
    let user = create_user(&server, &request).await;
    let path = format!("/api/users/{}", user.id);

    let response = server.get(&path).await.unwrap();
    let raw: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(raw.get("password").is_none());
    assert_eq!(raw["email"], request.email.as_str());

    let response = server.post("/api/users", &request).await.unwrap();
    let error = unprocessable(response).await;
    assert!(error.errors.contains_key("email"));

    let response = server
        .put(&path, &json!({ "name": "Renamed", "email": request.email, "password": "" }))
        .await
        .unwrap();
    let updated: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Renamed");

    // Empty password on update keeps the old one
    login(&server, &request.email, &request.password).await;
}

#[tokio::test]
async fn test_login_and_me() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUser::unique();
    let user = create_user(&server, &request).await;

    let auth = login(&server, &request.email, &request.password).await;
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.id, user.id);
    assert!(auth.expires_in > 0);

    let response = server.get_auth("/api/auth/me", &auth.access_token).await.unwrap();
    let me: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id);

    let response = server.get("/api/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &json!({ "email": request.email, "password": "wrong-password" }),
        )
        .await
        .unwrap();
    let error: ErrorJson = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_self_deletion_is_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUser::unique();
    let user = create_user(&server, &request).await;
    let auth = login(&server, &request.email, &request.password).await;
    let path = format!("/api/users/{}", user.id);

    let response = server.delete_auth(&path, &auth.access_token).await.unwrap();
    let error: ErrorJson = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.message, "You cannot delete your own account");

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let other = create_user(&server, &CreateUser::unique()).await;
    let response = server
        .delete_auth(&format!("/api/users/{}", other.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}
