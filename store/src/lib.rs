//! Client-side query cache for Stone Notes.
//!
//! Holds the read-mostly copies of server data keyed by request identity.
//! Mutations never patch cached entries; they invalidate by key prefix and
//! readers re-fetch on the next miss.

mod key;
pub use key::{keys, QueryKey};

mod cache;
pub use cache::QueryCache;
