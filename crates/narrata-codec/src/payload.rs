//! Inline base64 audio payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Decode a base64 audio payload into raw bytes.
///
/// ASCII whitespace (line wrapping, trailing newlines) is ignored.
pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact.as_bytes())?)
}
