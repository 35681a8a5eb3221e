//! Cache keys.
//!
//! A [`QueryKey`] is an ordered list of string segments, compared
//! structurally. Invalidation works on prefixes: `["notes"]` covers every
//! list variant `["notes", page, size, sortBy, sortDir]` and every detail
//! entry `["notes", id]`.

use api::NoteQuery;

/// Identity of one cached query result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// True when `prefix` matches the leading segments of this key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

/// Key constructors for the note collection.
pub mod keys {
    use super::*;

    /// Prefix covering every cached note query.
    pub fn notes_all() -> QueryKey {
        QueryKey::new(["notes"])
    }

    /// Key for one page/sort variant of the note listing.
    pub fn notes_list(query: &NoteQuery) -> QueryKey {
        QueryKey::new([
            "notes".to_string(),
            query.page.to_string(),
            query.size.to_string(),
            query.sort_by.as_str().to_string(),
            query.sort_dir.as_str().to_string(),
        ])
    }

    /// Key for one note's detail entry.
    pub fn note_detail(id: i64) -> QueryKey {
        QueryKey::new(["notes".to_string(), id.to_string()])
    }
}
