//! JSON export of calculated statements.

use super::calculate::StatementData;

/// Serialize statement data as pretty-printed JSON.
pub fn to_json(data: &StatementData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// Parse statement data previously written by [`to_json`].
pub fn from_json(json: &str) -> serde_json::Result<StatementData> {
    serde_json::from_str(json)
}
