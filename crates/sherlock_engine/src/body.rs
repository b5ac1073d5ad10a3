use futures_util::StreamExt;

use crate::{FailureKind, LookupError};

/// Reads a response body, failing once it grows past `max_bytes`.
pub(crate) async fn read_limited(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Vec<u8>, LookupError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len)));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    LookupError::new(FailureKind::Network, err.to_string())
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> LookupError {
    LookupError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}
