//! Entity providers: the extension points a negotiating framework calls

pub mod param;
pub mod reader;
pub mod writer;

pub use param::{JsonParamConverter, JsonParamConverterFactory};
pub use reader::JsonBodyReader;
pub use writer::JsonBodyWriter;

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::conneg::{ConnegResult, MediaType};

/// Reads a typed value out of a request entity stream.
///
/// The framework asks [`is_readable`](Self::is_readable) first during
/// negotiation and only invokes [`read_from`](Self::read_from) on a
/// provider that accepted the entity's media type.
pub trait MessageBodyReader {
    /// Whether this reader handles entities of `media_type`.
    fn is_readable(&self, media_type: &MediaType) -> bool;

    /// Decode one value of the declared type `T` from the entity stream.
    ///
    /// The stream is borrowed: the caller keeps ownership and closes it
    /// after the request completes.
    fn read_from<T, R>(&self, entity: &mut R) -> ConnegResult<T>
    where
        T: DeserializeOwned,
        R: Read;
}

/// Writes a typed value into a response entity stream.
pub trait MessageBodyWriter {
    /// Whether this writer handles entities of `media_type`.
    fn is_writeable(&self, media_type: &MediaType) -> bool;

    /// Number of bytes the encoded entity will occupy, if known before
    /// encoding. `None` lets the framework fall back to chunked transfer.
    fn size_hint<T>(&self, value: &T) -> Option<u64>
    where
        T: Serialize;

    /// Encode `value` into the entity stream and flush it.
    ///
    /// The stream is borrowed: the caller keeps ownership and closes it
    /// after the response completes.
    fn write_to<T, W>(&self, value: &T, entity: &mut W) -> ConnegResult<()>
    where
        T: Serialize,
        W: Write;
}

/// Converts one parameter between its raw string form and a typed value.
pub trait ParamConverter<T> {
    /// Parse the raw parameter string into a value.
    fn parse(&self, raw: &str) -> ConnegResult<T>;

    /// Render a value back into its parameter string form.
    fn format(&self, value: &T) -> ConnegResult<String>;
}
