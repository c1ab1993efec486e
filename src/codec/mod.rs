//! Shared JSON codec and its per-type adapters

mod adapter;

pub use adapter::JsonAdapter;

/// Shared JSON codec handle
///
/// One codec is built by the host application and shared (behind an `Arc`)
/// by every provider registered with the framework. The codec holds only
/// immutable output-formatting configuration and no per-request state, so
/// it is safe to use from any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Create a codec that emits compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that emits indented, human-readable JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Whether encoded output is indented.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Obtain an adapter bound to the declared type `T`.
    ///
    /// Adapters are produced fresh per call and are cheap to create. The
    /// type parameter carries the full declared type, generics included:
    /// `adapter::<Vec<String>>()` and `adapter::<Vec<u64>>()` are distinct
    /// bindings.
    pub fn adapter<T>(&self) -> JsonAdapter<T> {
        JsonAdapter::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codec_is_compact() {
        assert!(!JsonCodec::new().is_pretty());
    }

    #[test]
    fn test_pretty_codec() {
        assert!(JsonCodec::pretty().is_pretty());
    }
}
