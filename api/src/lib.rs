//! # API crate — typed REST client for Stone Notes
//!
//! Headless client the UI crates talk through. No rendering, no signals:
//! just configuration, wire models, the error taxonomy, and the HTTP
//! operations against the remote notes service.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | API base URL and OIDC parameters, baked in at build time |
//! | [`models`] | Wire types: [`Note`], request/response envelopes, sort parameters |
//! | [`error`] | [`ApiError`] — request, network, and decode failures |
//! | [`client`] | [`ApiClient`] — bearer-authenticated calls to every endpoint |
//!
//! ## Endpoints covered
//!
//! - `POST /login`, `POST /register` (unauthenticated)
//! - `GET /api/notes` (paged, sorted), `GET /api/notes/{id}`
//! - `POST /api/notes`, `PUT /api/notes/{id}`, `DELETE /api/notes/{id}`

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::{AppConfig, OidcConfig};
pub use error::ApiError;
pub use models::{
    ApiResponse, LoginRequest, Note, NoteDraft, NoteQuery, Page, RegisterRequest, SortBy, SortDir,
};
