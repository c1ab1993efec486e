//! # json-conneg
//!
//! Serde-backed JSON entity providers for HTTP content negotiation.
//!
//! This library plugs [`serde_json`] into a content-negotiating framework's
//! entity pipeline. It supplies three independent, stateless providers, all
//! backed by one shared [`JsonCodec`](codec::JsonCodec): a body reader
//! (request entity → typed value), a body writer (typed value → response
//! entity), and a parameter converter factory (string ⇄ JSON for parameters
//! tagged with the [`JsonParam`](conneg::JsonParam) marker).
//!
//! ## Features
//!
//! - **Media-type aware**: providers apply themselves only to entities
//!   compatible with `application/json`
//! - **Generics preserved**: the declared type is a type parameter, so
//!   `Vec<String>` and `Vec<u64>` bind to distinct adapters
//! - **Streams stay open**: entity streams are borrowed, never closed;
//!   ownership remains with the framework
//! - **Thread safe**: every provider is `Send + Sync` and holds no
//!   per-request state
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use json_conneg::prelude::*;
//!
//! let codec = Arc::new(JsonCodec::new());
//!
//! // Request side: decode the entity stream into the declared type.
//! let reader = JsonBodyReader::new(Arc::clone(&codec));
//! let mut entity = &b"[\"hey\"]"[..];
//! let names: Vec<String> = reader.read_from(&mut entity)?;
//! assert_eq!(names, vec!["hey".to_string()]);
//!
//! // Response side: encode a value back out and flush the stream.
//! let writer = JsonBodyWriter::new(Arc::clone(&codec));
//! let mut out = Vec::new();
//! writer.write_to(&names, &mut out)?;
//! assert_eq!(out, b"[\"hey\"]");
//! # Ok::<(), ConnegError>(())
//! ```

pub mod codec;
pub mod conneg;
pub mod provider;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        codec::{JsonAdapter, JsonCodec},
        conneg::{Annotation, Annotations, ConnegError, ConnegResult, JsonParam, MediaType},
        provider::{
            JsonBodyReader, JsonBodyWriter, JsonParamConverter, JsonParamConverterFactory,
            MessageBodyReader, MessageBodyWriter, ParamConverter,
        },
    };
}
