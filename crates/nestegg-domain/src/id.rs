//! Entity id generation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Builds an entity id from the supplied timestamp plus a random suffix.
///
/// The millisecond prefix keeps ids roughly sortable by creation time; the
/// uuid suffix keeps them unique across re-creation of the same entity and
/// across process restarts. The timestamp is injected so callers with a
/// substitutable clock stay deterministic about the prefix.
pub fn entity_id(now: DateTime<Utc>) -> String {
    format!("{}-{}", now.timestamp_millis(), Uuid::new_v4().simple())
}
