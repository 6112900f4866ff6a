use serde::{Deserialize, Serialize};

/// A booked meeting exactly as the provider described it.
///
/// The provider payload is carried opaquely so that callers receive every
/// field (join URL, passcode, host email) without this service maintaining
/// a mirror of the provider's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingRecord(serde_json::Value);

impl MeetingRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Provider-assigned numeric meeting id, when the payload carries one.
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(|id| id.as_u64())
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}
