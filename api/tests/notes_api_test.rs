//! Integration tests for the notes API client against a mock server.
//!
//! Verifies query parameters, bearer-token attachment, envelope decoding,
//! and the error mapping for non-2xx responses and network failures.

use api::{ApiClient, ApiError, LoginRequest, NoteDraft, NoteQuery, RegisterRequest};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn note_json(id: i64, title: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "content": content,
        "createdAt": "2024-01-01T00:00:00",
        "updatedAt": "2024-01-01T00:00:00"
    })
}

#[tokio::test]
async fn test_list_notes_with_default_query() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": {
            "content": [note_json(1, "Test Note", "Test Content")],
            "totalElements": 1
        },
        "status": 200
    });

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .and(query_param("page", "0"))
        .and(query_param("size", "100"))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("sortDir", "desc"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let notes = client.list_notes(&NoteQuery::default()).await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Test Note");
    assert_eq!(notes[0].content, "Test Content");
}

#[tokio::test]
async fn test_list_notes_without_token_sends_no_auth_header() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": { "content": [] },
        "status": 200
    });

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let notes = client.list_notes(&NoteQuery::default()).await.unwrap();
    assert!(notes.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_get_note_by_id() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": note_json(3, "Solo", "One note"),
        "status": 200
    });

    Mock::given(method("GET"))
        .and(path("/api/notes/3"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let note = client.get_note(3).await.unwrap();
    assert_eq!(note.id, 3);
    assert_eq!(note.title, "Solo");
}

#[tokio::test]
async fn test_create_note_posts_draft_and_returns_persisted() {
    let mock_server = MockServer::start().await;

    let draft = NoteDraft {
        title: "Groceries".into(),
        content: "Eggs".into(),
    };
    let body = serde_json::json!({
        "success": true,
        "message": "created",
        "data": note_json(7, "Groceries", "Eggs"),
        "status": 201
    });

    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .and(body_json(&draft))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let note = client.create_note(&draft).await.unwrap();
    assert_eq!(note.id, 7);
    assert_eq!(note.title, "Groceries");
}

#[tokio::test]
async fn test_update_note_puts_to_id_path() {
    let mock_server = MockServer::start().await;

    let draft = NoteDraft {
        title: "Groceries".into(),
        content: "Eggs, milk".into(),
    };
    let body = serde_json::json!({
        "success": true,
        "message": "updated",
        "data": note_json(7, "Groceries", "Eggs, milk"),
        "status": 200
    });

    Mock::given(method("PUT"))
        .and(path("/api/notes/7"))
        .and(body_json(&draft))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let note = client.update_note(7, &draft).await.unwrap();
    assert_eq!(note.content, "Eggs, milk");
}

#[tokio::test]
async fn test_delete_note_succeeds_without_payload() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "message": "deleted",
        "data": null,
        "status": 200
    });

    Mock::given(method("DELETE"))
        .and(path("/api/notes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    client.delete_note(1).await.unwrap();
}

#[tokio::test]
async fn test_request_error_uses_body_message() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": false,
        "message": "Note not found",
        "data": null,
        "status": 404
    });

    Mock::given(method("DELETE"))
        .and(path("/api/notes/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let err = client.delete_note(99).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Request {
            status: 404,
            message: "Note not found".into()
        }
    );
}

#[tokio::test]
async fn test_request_error_falls_back_when_body_has_no_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let request = LoginRequest {
        email: "a@b.cc".into(),
        password: "password1".into(),
    };
    let err = client.login(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Failed to login");
}

#[tokio::test]
async fn test_register_sends_camel_case_fields() {
    let mock_server = MockServer::start().await;

    let request = RegisterRequest {
        email: "ada@example.com".into(),
        first_name: "Ada".into(),
        last_name: "Stone".into(),
        password: "password1".into(),
    };
    let expected = serde_json::json!({
        "email": "ada@example.com",
        "firstName": "Ada",
        "lastName": "Stone",
        "password": "password1"
    });
    let body = serde_json::json!({
        "success": true,
        "message": "registered",
        "data": null,
        "status": 200
    });

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let response = client.register(&request).await.unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_network_failure_maps_to_network_error() {
    // Nothing listens here; the request fails before any response exists.
    let client = ApiClient::new("http://127.0.0.1:1").with_token(Some("test-token".into()));
    let err = client.delete_note(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_missing_data_on_success_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": null,
        "status": 200
    });

    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).with_token(Some("test-token".into()));
    let err = client
        .create_note(&NoteDraft {
            title: "t".into(),
            content: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
