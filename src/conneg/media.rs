//! Media type values and compatibility rules

use std::fmt;
use std::str::FromStr;

use crate::conneg::error::ConnegError;

/// A negotiated media type: `type/subtype` plus optional parameters.
///
/// Type and subtype are stored lowercase; comparison and compatibility are
/// case-insensitive as a result. Parameters (`charset` and friends) are
/// carried along for display but never influence compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    ty: String,
    subtype: String,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Create a media type from its type and subtype.
    pub fn new(ty: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            ty: ty.into().to_ascii_lowercase(),
            subtype: subtype.into().to_ascii_lowercase(),
            params: Vec::new(),
        }
    }

    /// The `application/json` media type.
    pub fn application_json() -> Self {
        Self::new("application", "json")
    }

    /// The `*/*` wildcard media type.
    pub fn wildcard() -> Self {
        Self::new("*", "*")
    }

    /// Attach a parameter, e.g. `charset=UTF-8`.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .push((name.into().to_ascii_lowercase(), value.into()));
        self
    }

    /// The primary type, e.g. `application`.
    pub fn type_(&self) -> &str {
        &self.ty
    }

    /// The subtype, e.g. `json`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// All parameters, in the order they were supplied.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value by name (case-insensitive).
    pub fn param(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Standard media-type compatibility.
    ///
    /// Type and subtype each match literally or via the `*` wildcard on
    /// either side. Parameters are ignored, so
    /// `application/json;charset=UTF-8` is compatible with
    /// `application/json`.
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        fn part_matches(a: &str, b: &str) -> bool {
            a == "*" || b == "*" || a == b
        }

        part_matches(&self.ty, &other.ty) && part_matches(&self.subtype, &other.subtype)
    }
}

impl FromStr for MediaType {
    type Err = ConnegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (essence, rest) = match s.split_once(';') {
            Some((essence, rest)) => (essence, Some(rest)),
            None => (s, None),
        };

        let (ty, subtype) = essence
            .trim()
            .split_once('/')
            .ok_or_else(|| ConnegError::InvalidMediaType(s.to_string()))?;
        let (ty, subtype) = (ty.trim(), subtype.trim());
        if ty.is_empty() || subtype.is_empty() {
            return Err(ConnegError::InvalidMediaType(s.to_string()));
        }

        let mut media = MediaType::new(ty, subtype);
        if let Some(rest) = rest {
            for param in rest.split(';') {
                let param = param.trim();
                if param.is_empty() {
                    continue;
                }
                let (name, value) = param
                    .split_once('=')
                    .ok_or_else(|| ConnegError::InvalidMediaType(s.to_string()))?;
                media = media.with_param(name.trim(), value.trim().trim_matches('"'));
            }
        }

        Ok(media)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ty, self.subtype)?;
        for (name, value) in &self.params {
            write!(f, ";{}={}", name, value)?;
        }
        Ok(())
    }
}
