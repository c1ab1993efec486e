//! Per-declared-type JSON adapters

use std::fmt;
use std::io::{Read, Write};
use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::JsonCodec;

/// Encoder/decoder bound to one declared type
///
/// An adapter is obtained from [`JsonCodec::adapter`] fresh for every call.
/// Decode operations are available whenever `T` is deserializable, encode
/// operations whenever `T` is serializable; a type only ever flowing in one
/// direction needs only the matching bound.
pub struct JsonAdapter<T> {
    codec: JsonCodec,
    _declared: PhantomData<fn() -> T>,
}

impl<T> JsonAdapter<T> {
    pub(crate) fn new(codec: JsonCodec) -> Self {
        Self {
            codec,
            _declared: PhantomData,
        }
    }
}

impl<T> JsonAdapter<T>
where
    T: DeserializeOwned,
{
    /// Decode exactly one JSON value from `reader`.
    ///
    /// Bytes after the first complete value are left unread; the reader is
    /// not drained to end-of-input.
    pub fn decode_from<R>(&self, reader: R) -> Result<T, serde_json::Error>
    where
        R: Read,
    {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        T::deserialize(&mut deserializer)
    }

    /// Decode a value from a fully buffered entity.
    pub fn decode(&self, bytes: &[u8]) -> Result<T, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decode a value from its string form.
    pub fn decode_str(&self, raw: &str) -> Result<T, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl<T> JsonAdapter<T>
where
    T: Serialize,
{
    /// Encode `value` into `writer`.
    ///
    /// Flushing the writer is the caller's concern.
    pub fn encode_into<W>(&self, writer: W, value: &T) -> Result<(), serde_json::Error>
    where
        W: Write,
    {
        if self.codec.is_pretty() {
            serde_json::to_writer_pretty(writer, value)
        } else {
            serde_json::to_writer(writer, value)
        }
    }

    /// Encode `value` into a buffered byte payload.
    pub fn encode(&self, value: &T) -> Result<Bytes, serde_json::Error> {
        let buf = if self.codec.is_pretty() {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(Bytes::from(buf))
    }

    /// Encode `value` into its string form.
    pub fn encode_to_string(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.codec.is_pretty() {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

impl<T> Clone for JsonAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
            _declared: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonAdapter")
            .field("codec", &self.codec)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_one_value_leaves_trailing_bytes() {
        let codec = JsonCodec::new();
        let mut reader = &b"\"hey\" trailing"[..];

        let value: String = codec.adapter().decode_from(&mut reader).unwrap();
        assert_eq!(value, "hey");
    }

    #[test]
    fn test_parameterized_adapters_are_distinct() {
        let codec = JsonCodec::new();

        let strings: Vec<String> = codec.adapter().decode(b"[\"1\"]").unwrap();
        assert_eq!(strings, vec!["1".to_string()]);

        let numbers: Vec<u64> = codec.adapter().decode(b"[1]").unwrap();
        assert_eq!(numbers, vec![1]);

        // The string adapter rejects what the numeric one accepts.
        let mismatch = codec.adapter::<Vec<String>>().decode(b"[1]");
        assert!(mismatch.is_err());
    }

    #[test]
    fn test_encode_to_bytes() {
        let codec = JsonCodec::new();
        let payload = codec.adapter().encode(&vec!["hey".to_string()]).unwrap();
        assert_eq!(payload.as_ref(), b"[\"hey\"]");
    }

    #[test]
    fn test_pretty_codec_indents_output() {
        let compact = JsonCodec::new()
            .adapter()
            .encode_to_string(&vec![1, 2])
            .unwrap();
        let pretty = JsonCodec::pretty()
            .adapter()
            .encode_to_string(&vec![1, 2])
            .unwrap();

        assert_eq!(compact, "[1,2]");
        assert!(pretty.contains('\n'));
    }
}
