//! JSON body reader

use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::codec::JsonCodec;
use crate::conneg::{ConnegError, ConnegResult, MediaType};
use crate::provider::MessageBodyReader;

/// A [`MessageBodyReader`] that decodes JSON entities with the shared codec.
///
/// The endpoint must have negotiated a media type compatible with
/// `application/json`. One instance serves the whole application; it holds
/// no per-request state.
#[derive(Debug, Clone)]
pub struct JsonBodyReader {
    codec: Arc<JsonCodec>,
}

impl JsonBodyReader {
    /// Create a reader backed by `codec`.
    pub fn new(codec: Arc<JsonCodec>) -> Self {
        Self { codec }
    }
}

impl MessageBodyReader for JsonBodyReader {
    fn is_readable(&self, media_type: &MediaType) -> bool {
        media_type.is_compatible(&MediaType::application_json())
    }

    fn read_from<T, R>(&self, entity: &mut R) -> ConnegResult<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let mut buffered = BufReader::new(entity);
        if buffered.fill_buf()?.is_empty() {
            tracing::debug!("request entity stream is empty");
            return Err(ConnegError::NoContent);
        }

        let adapter = self.codec.adapter::<T>();
        adapter.decode_from(&mut buffered).map_err(ConnegError::Decode)
        // The entity stream is borrowed from the caller; nothing here closes it.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> JsonBodyReader {
        JsonBodyReader::new(Arc::new(JsonCodec::new()))
    }

    #[test]
    fn test_empty_stream_is_no_content() {
        let mut entity: &[u8] = b"";
        let result: ConnegResult<String> = reader().read_from(&mut entity);
        assert!(matches!(result, Err(ConnegError::NoContent)));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let mut entity: &[u8] = b"{\"unterminated";
        let result: ConnegResult<serde_json::Value> = reader().read_from(&mut entity);
        assert!(matches!(result, Err(ConnegError::Decode(_))));
    }

    #[test]
    fn test_null_body_decodes_to_none() {
        let mut entity: &[u8] = b"null";
        let value: Option<String> = reader().read_from(&mut entity).unwrap();
        assert!(value.is_none());
    }
}
