//! Category uid decoding
//!
//! Catalog categories carry a base64-encoded uid (`"MTI="` for category 12),
//! while menu nodes may carry either the encoded form or the plain id.
//! Decoding is best-effort: anything that is not valid base64 of a UTF-8
//! string is used verbatim as the lookup key.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard alphabet, padding optional (matches browser `atob`)
const UID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Strictly decode an encoded uid; `None` when it is not base64 of UTF-8 text
pub fn try_decode_uid(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let bytes = UID_ENGINE.decode(trimmed).ok()?;
    String::from_utf8(bytes).ok()
}

/// Decode an encoded uid, falling back to the raw value
pub fn decode_uid(raw: &str) -> String {
    match try_decode_uid(raw) {
        Some(decoded) => decoded,
        None => {
            tracing::debug!(uid = raw, "category uid is not base64, using raw value");
            raw.to_string()
        }
    }
}
