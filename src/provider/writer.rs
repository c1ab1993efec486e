//! JSON body writer

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::codec::JsonCodec;
use crate::conneg::{ConnegError, ConnegResult, MediaType};
use crate::provider::MessageBodyWriter;

/// A [`MessageBodyWriter`] that encodes JSON entities with the shared codec.
///
/// The endpoint must have negotiated a media type compatible with
/// `application/json`. One instance serves the whole application; it holds
/// no per-request state.
#[derive(Debug, Clone)]
pub struct JsonBodyWriter {
    codec: Arc<JsonCodec>,
}

impl JsonBodyWriter {
    /// Create a writer backed by `codec`.
    pub fn new(codec: Arc<JsonCodec>) -> Self {
        Self { codec }
    }
}

impl MessageBodyWriter for JsonBodyWriter {
    fn is_writeable(&self, media_type: &MediaType) -> bool {
        media_type.is_compatible(&MediaType::application_json())
    }

    fn size_hint<T>(&self, _value: &T) -> Option<u64>
    where
        T: Serialize,
    {
        // Output is streamed straight into the entity; the length is never
        // precomputed.
        None
    }

    fn write_to<T, W>(&self, value: &T, entity: &mut W) -> ConnegResult<()>
    where
        T: Serialize,
        W: Write,
    {
        let adapter = self.codec.adapter::<T>();
        adapter
            .encode_into(&mut *entity, value)
            .map_err(ConnegError::Encode)?;
        entity.flush()?;
        // The entity stream is borrowed from the caller; nothing here closes it.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn writer() -> JsonBodyWriter {
        JsonBodyWriter::new(Arc::new(JsonCodec::new()))
    }

    #[test]
    fn test_size_is_unknown() {
        assert_eq!(writer().size_hint(&"hey"), None);
    }

    #[test]
    fn test_writes_value() {
        let mut entity = Vec::new();
        writer().write_to(&"hey", &mut entity).unwrap();
        assert_eq!(entity, b"\"hey\"");
    }

    #[test]
    fn test_unrepresentable_value_is_encode_error() {
        // Maps with non-string keys have no JSON representation.
        let mut map = BTreeMap::new();
        map.insert((1u32, 2u32), "value".to_string());

        let mut entity = Vec::new();
        let result = writer().write_to(&map, &mut entity);
        assert!(matches!(result, Err(ConnegError::Encode(_))));
    }
}
