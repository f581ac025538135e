// Kroki payload encoding
//
// A diagram travels in the URI path as zlib-compressed UTF-8, Base64 encoded
// with the standard alphabet and then made URL-safe by swapping '+' for '-'
// and '/' for '_'. Padding is left in place.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Payload decoding errors
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("invalid Base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid zlib payload: {0}")]
    Decompress(#[from] std::io::Error),
}

/// Compress text into a zlib stream (header, deflate data, adler32)
pub fn compress(specification: &str) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(specification.as_bytes())
        .expect("Writing to Vec buffer is infallible");
    encoder
        .finish()
        .expect("Writing to Vec buffer is infallible")
}

/// Encode a diagram specification into a URL-safe path token
///
/// # Arguments
/// * `specification` - Diagram source text
///
/// # Returns
/// Token for the last segment of `{endpoint}/{kind}/{format}/{token}`
pub fn encode_payload(specification: &str) -> String {
    STANDARD
        .encode(compress(specification))
        .replace('+', "-")
        .replace('/', "_")
}

/// Decode a token produced by [`encode_payload`] back into source text
pub fn decode_payload(token: &str) -> Result<String, EncodingError> {
    let standard = token.trim().replace('-', "+").replace('_', "/");
    let compressed = STANDARD.decode(standard)?;

    let mut specification = String::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_string(&mut specification)?;
    Ok(specification)
}
