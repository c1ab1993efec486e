//! JSON parameter conversion

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{JsonAdapter, JsonCodec};
use crate::conneg::{Annotations, ConnegError, ConnegResult, JsonParam};
use crate::provider::ParamConverter;

/// Resolves converters for parameters tagged with [`JsonParam`].
///
/// One factory serves the whole application; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct JsonParamConverterFactory {
    codec: Arc<JsonCodec>,
}

impl JsonParamConverterFactory {
    /// Create a factory backed by `codec`.
    pub fn new(codec: Arc<JsonCodec>) -> Self {
        Self { codec }
    }

    /// Resolve a converter for a parameter of declared type `T`.
    ///
    /// Returns `None` when the [`JsonParam`] marker is absent from the
    /// parameter's annotation set, so the framework falls through to its
    /// other converter providers. Any other annotations present alongside
    /// the marker are ignored.
    pub fn converter<T>(&self, annotations: &Annotations) -> Option<JsonParamConverter<T>>
    where
        T: DeserializeOwned + Serialize,
    {
        if !annotations.contains::<JsonParam>() {
            tracing::trace!("parameter lacks the JSON marker; declining conversion");
            return None;
        }

        Some(JsonParamConverter {
            adapter: self.codec.adapter::<T>(),
        })
    }
}

/// A [`ParamConverter`] bound to one declared parameter type.
pub struct JsonParamConverter<T> {
    adapter: JsonAdapter<T>,
}

impl<T> ParamConverter<T> for JsonParamConverter<T>
where
    T: DeserializeOwned + Serialize,
{
    fn parse(&self, raw: &str) -> ConnegResult<T> {
        self.adapter
            .decode_str(raw)
            .map_err(ConnegError::InvalidParam)
    }

    fn format(&self, value: &T) -> ConnegResult<String> {
        self.adapter
            .encode_to_string(value)
            .map_err(ConnegError::Encode)
    }
}

impl<T> fmt::Debug for JsonParamConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonParamConverter")
            .field("adapter", &self.adapter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conneg::Annotation;

    struct Required;
    impl Annotation for Required {}

    fn factory() -> JsonParamConverterFactory {
        JsonParamConverterFactory::new(Arc::new(JsonCodec::new()))
    }

    #[test]
    fn test_unannotated_parameter_gets_no_converter() {
        let converter = factory().converter::<String>(&Annotations::new());
        assert!(converter.is_none());
    }

    #[test]
    fn test_unrelated_annotation_gets_no_converter() {
        let annotations = Annotations::new().with::<Required>();
        let converter = factory().converter::<String>(&annotations);
        assert!(converter.is_none());
    }

    #[test]
    fn test_marked_parameter_gets_converter() {
        let annotations = Annotations::new().with::<JsonParam>();
        let converter = factory().converter::<String>(&annotations).unwrap();

        assert_eq!(converter.parse("\"hey\"").unwrap(), "hey");
        assert_eq!(converter.format(&"hey".to_string()).unwrap(), "\"hey\"");
    }

    #[test]
    fn test_malformed_parameter_is_invalid_param() {
        let annotations = Annotations::new().with::<JsonParam>();
        let converter = factory().converter::<String>(&annotations).unwrap();

        let result = converter.parse("\"unterminated");
        assert!(matches!(result, Err(ConnegError::InvalidParam(_))));
    }
}
