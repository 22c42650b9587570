use super::types::DescriptorRecord;
use crate::error::Result;

/// Content type of an inert linked-data block.
pub const JSON_LD_CONTENT_TYPE: &str = "application/ld+json";

/// PURE FUNCTION: DescriptorRecord -> compact JSON text.
///
/// Output matches what a browser's `JSON.stringify` produces for the same
/// object: no whitespace, keys in declaration order.
pub fn to_json_ld(record: &DescriptorRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Reads a published payload back into a record. Unknown or missing keys fail.
pub fn from_json_ld(payload: &str) -> Result<DescriptorRecord> {
    Ok(serde_json::from_str(payload)?)
}
