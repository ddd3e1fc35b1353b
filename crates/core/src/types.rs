/// Entity identifiers are opaque strings generated on the editor side before
/// persistence, so optimistic in-memory edits never wait on the store.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id (UUID v4, compact form).
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().simple().to_string()
}
