//! Millisecond timestamps.

/// Milliseconds since the Unix epoch, as stored in the JSON documents.
pub type Millis = i64;

/// Current UTC time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> Millis {
    chrono::Utc::now().timestamp_millis()
}
