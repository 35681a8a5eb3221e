//! # Wire models for the notes REST API
//!
//! Everything the remote service sends or receives, named and cased exactly
//! as it appears on the wire (`camelCase` via serde renames).
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Note`] | A persisted note. Timestamps are kept as ISO-8601 strings; the client only displays them. |
//! | [`NoteDraft`] | The `{title, content}` payload for create and update. |
//! | [`ApiResponse`] | The service's uniform `{success, message, data, status}` envelope. |
//! | [`Page`] | A Spring-style page of results; the client consumes `content` and ignores the rest. |
//! | [`LoginRequest`] / [`RegisterRequest`] | Credential payloads for the legacy auth endpoints. |
//! | [`SortBy`] / [`SortDir`] | Closed sets of ordering parameters with their wire spellings. |
//! | [`NoteQuery`] | The `(page, size, sortBy, sortDir)` identity of one list request. |

use serde::{Deserialize, Serialize};

/// A note as the server returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating or updating a note.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Uniform response envelope used by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub status: i32,
}

/// One page of a paged listing. Only `content` is interpreted; the
/// pagination metadata is carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// Credentials for `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Field the listing is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::UpdatedAt => "updatedAt",
            SortBy::Title => "title",
        }
    }
}

/// Direction the listing is ordered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Identity of one list request: page, size, and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: SortBy,
    pub sort_dir: SortDir,
}

impl Default for NoteQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 100,
            sort_by: SortBy::CreatedAt,
            sort_dir: SortDir::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_decodes_camel_case() {
        let json = r#"{
            "id": 1,
            "title": "Test Note",
            "content": "Test Content",
            "createdAt": "2024-01-01T00:00:00",
            "updatedAt": "2024-01-01T00:00:00"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(note.title, "Test Note");
        assert_eq!(note.created_at, "2024-01-01T00:00:00");
    }

    #[test]
    fn test_envelope_with_page() {
        let json = r#"{
            "success": true,
            "message": "ok",
            "data": {
                "content": [
                    {"id": 1, "title": "A", "content": "", "createdAt": "t", "updatedAt": "t"}
                ],
                "totalElements": 1
            },
            "status": 200
        }"#;
        let body: ApiResponse<Page<Note>> = serde_json::from_str(json).unwrap();
        assert!(body.success);
        let page = body.data.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 1);
    }

    #[test]
    fn test_register_serializes_camel_case() {
        let req = RegisterRequest {
            email: "a@b.cc".into(),
            first_name: "Ada".into(),
            last_name: "Stone".into(),
            password: "password1".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"lastName\":\"Stone\""));
    }

    #[test]
    fn test_default_query() {
        let q = NoteQuery::default();
        assert_eq!(q.page, 0);
        assert_eq!(q.size, 100);
        assert_eq!(q.sort_by.as_str(), "createdAt");
        assert_eq!(q.sort_dir.as_str(), "desc");
    }
}
