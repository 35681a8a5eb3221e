//! HTTP client for the Stone Notes REST API.
//!
//! One method per endpoint. Every authenticated call attaches
//! `Authorization: Bearer <token>` when a token is present; the client never
//! retries and configures no timeout beyond the HTTP layer default.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{
    ApiResponse, LoginRequest, Note, NoteDraft, NoteQuery, Page, RegisterRequest,
};

/// Typed client against the notes service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL, unauthenticated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach (or clear) the bearer token used for authenticated endpoints.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `POST /login` — legacy credential login. Unauthenticated; the token in
    /// the response envelope is surfaced to the caller as-is.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<String>, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to login").await?;
        decode_envelope(response).await
    }

    /// `POST /register` — create an account. Unauthenticated.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to register user").await?;
        decode_envelope(response).await
    }

    /// `GET /api/notes` — one page of notes in the requested order.
    pub async fn list_notes(&self, query: &NoteQuery) -> Result<Vec<Note>, ApiError> {
        let response = self
            .authorized(self.client.get(format!("{}/api/notes", self.base_url)))
            .query(&[
                ("page", query.page.to_string()),
                ("size", query.size.to_string()),
                ("sortBy", query.sort_by.as_str().to_string()),
                ("sortDir", query.sort_dir.as_str().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to load notes").await?;
        let body: ApiResponse<Page<Note>> = decode_envelope(response).await?;
        let page = body
            .data
            .ok_or_else(|| ApiError::Decode("missing page data".into()))?;
        debug!(count = page.content.len(), "Loaded notes");
        Ok(page.content)
    }

    /// `GET /api/notes/{id}` — a single note.
    pub async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        let response = self
            .authorized(
                self.client
                    .get(format!("{}/api/notes/{}", self.base_url, id)),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to load note").await?;
        let body: ApiResponse<Note> = decode_envelope(response).await?;
        body.data
            .ok_or_else(|| ApiError::Decode("missing note data".into()))
    }

    /// `POST /api/notes` — create a note, returning the persisted record.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let response = self
            .authorized(self.client.post(format!("{}/api/notes", self.base_url)))
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to create note").await?;
        let body: ApiResponse<Note> = decode_envelope(response).await?;
        body.data
            .ok_or_else(|| ApiError::Decode("missing note data".into()))
    }

    /// `PUT /api/notes/{id}` — update a note, returning the persisted record.
    pub async fn update_note(&self, id: i64, draft: &NoteDraft) -> Result<Note, ApiError> {
        let response = self
            .authorized(
                self.client
                    .put(format!("{}/api/notes/{}", self.base_url, id)),
            )
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response, "Failed to update note").await?;
        let body: ApiResponse<Note> = decode_envelope(response).await?;
        body.data
            .ok_or_else(|| ApiError::Decode("missing note data".into()))
    }

    /// `DELETE /api/notes/{id}` — delete a note. No payload on success.
    pub async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authorized(
                self.client
                    .delete(format!("{}/api/notes/{}", self.base_url, id)),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response, "Failed to delete note").await?;
        Ok(())
    }
}

/// Map a non-2xx response to [`ApiError::Request`], preferring the `message`
/// field of the body envelope over the endpoint's fallback string.
async fn check_status(response: Response, fallback: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiResponse<serde_json::Value>>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => fallback.to_string(),
    };
    warn!(status = status.as_u16(), %message, "Request failed");
    Err(ApiError::Request {
        status: status.as_u16(),
        message,
    })
}

async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_token_presence() {
        let client = ApiClient::new("http://x");
        assert!(!client.has_token());
        let client = client.with_token(Some("t".into()));
        assert!(client.has_token());
        let client = client.with_token(None);
        assert!(!client.has_token());
    }
}
