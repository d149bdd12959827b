//! Decoding of the VAPID public key handed to `pushManager.subscribe`.

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine as _};

use crate::error::ClientError;

const URL_SAFE_ANY_PADDING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes a base64 application server key into raw bytes.
///
/// Accepts URL-safe or standard alphabet, padded or not.
pub fn decode_application_server_key(key: &str) -> Result<Vec<u8>, ClientError> {
    let normalized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_ANY_PADDING
        .decode(normalized)
        .map_err(|e| ClientError::DecodeError(e.to_string()))
}
