use chrono::Utc;
use uuid::Uuid;

/// Fresh storage key for a relayed record: `<uuid>-<epoch-millis>`.
///
/// Uniqueness rests entirely on the identifier generator; no structure is
/// imposed beyond the concatenation.
pub fn object_key() -> String {
    object_key_at(Uuid::new_v4(), Utc::now().timestamp_millis())
}

pub fn object_key_at(id: Uuid, epoch_millis: i64) -> String {
    format!("{id}-{epoch_millis}")
}
