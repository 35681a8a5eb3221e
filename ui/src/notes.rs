//! # Notes data-access layer
//!
//! The typed hooks and mutation functions every notes view goes through.
//! Reads are served from the shared [`QueryCache`] and fall back to the API
//! on a miss; mutations call the API and invalidate by key prefix, never
//! patching cached entries. Invalidation is collection-wide on purpose:
//! every page/sort variant and every detail entry is dropped, and each
//! reader re-fetches lazily the next time it runs.
//!
//! Requests are suppressed entirely while the session has no access token,
//! so no authenticated endpoint is ever called before the session is
//! established. Mutations return `Result` for the caller to pattern-match;
//! duplicate submissions are prevented only by the calling component
//! disabling its control while a mutation is pending. In-flight requests
//! are never cancelled — a superseded response may still land in the cache,
//! which the invalidation model tolerates.

use dioxus::prelude::*;
use tracing::{debug, error};

use api::{ApiClient, ApiError, AppConfig, Note, NoteDraft, NoteQuery};
use store::{keys, QueryCache};

use crate::session::SessionHandle;
use crate::{use_app_config, use_query_cache, use_session};

/// Build an API client carrying the session's current access token.
pub fn make_client(config: &Signal<AppConfig>, session: &SessionHandle) -> ApiClient {
    ApiClient::new(config.read().api_url.clone()).with_token(session.state().access_token())
}

/// Resource over the note listing for `query`.
///
/// Yields `None` while suppressed (no token yet) or still in flight;
/// otherwise `Some(Ok(notes))` or `Some(Err(_))`. Reading the cache inside
/// the resource subscribes it to invalidations, so a mutation's
/// `invalidate` re-runs it and the miss triggers a fresh fetch.
pub fn use_notes(query: ReadOnlySignal<NoteQuery>) -> Resource<Option<Result<Vec<Note>, ApiError>>> {
    let session = use_session();
    let config = use_app_config();
    let mut cache = use_query_cache();

    use_resource(move || {
        let query = query();
        let token = session.state().access_token();
        let api_url = config.read().api_url.clone();
        let cached: Option<Vec<Note>> = cache.read().get(&keys::notes_list(&query));

        async move {
            let token = token?;
            let key = keys::notes_list(&query);
            if let Some(notes) = cached {
                debug!(key = ?key.segments(), "Notes served from cache");
                return Some(Ok(notes));
            }

            let client = ApiClient::new(api_url).with_token(Some(token));
            match client.list_notes(&query).await {
                Ok(notes) => {
                    cache.write().put(&key, &notes);
                    Some(Ok(notes))
                }
                Err(e) => {
                    error!(%e, "Failed to load notes");
                    Some(Err(e))
                }
            }
        }
    })
}

/// Create a note, then invalidate every cached note query.
pub async fn create_note(
    client: &ApiClient,
    mut cache: Signal<QueryCache>,
    draft: &NoteDraft,
) -> Result<Note, ApiError> {
    let note = client.create_note(draft).await?;
    cache.write().invalidate(&keys::notes_all());
    Ok(note)
}

/// Update a note, then invalidate the collection and the note's detail
/// entry. The prefix already covers the detail key; both are issued to keep
/// the contract explicit.
pub async fn update_note(
    client: &ApiClient,
    mut cache: Signal<QueryCache>,
    id: i64,
    draft: &NoteDraft,
) -> Result<Note, ApiError> {
    let note = client.update_note(id, draft).await?;
    let mut cache = cache.write();
    cache.invalidate(&keys::notes_all());
    cache.invalidate(&keys::note_detail(id));
    Ok(note)
}

/// Delete a note, then invalidate every cached note query. On failure the
/// cache is left untouched, so the listing keeps rendering its last state.
pub async fn delete_note(
    client: &ApiClient,
    mut cache: Signal<QueryCache>,
    id: i64,
) -> Result<(), ApiError> {
    client.delete_note(id).await?;
    cache.write().invalidate(&keys::notes_all());
    Ok(())
}
