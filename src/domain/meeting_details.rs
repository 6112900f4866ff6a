use serde::{Deserialize, Serialize};

/// Scheduling fields extracted from a transcript.
///
/// Both fields are required and strictly typed; nothing is defaulted or
/// coerced. Unknown properties are rejected because the extraction schema
/// forbids them, so their presence means the extractor misbehaved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeetingDetails {
    pub duration_minutes: u32,
    pub start_timestamp: String,
}
