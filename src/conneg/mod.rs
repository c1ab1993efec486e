//! Framework-surface types for content negotiation

pub mod annotations;
pub mod error;
pub mod media;

pub use annotations::{Annotation, Annotations, JsonParam};
pub use error::{ConnegError, ConnegResult};
pub use media::MediaType;
