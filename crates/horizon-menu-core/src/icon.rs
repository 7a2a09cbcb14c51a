//! Opaque icon handle.
//!
//! Menu items never load or draw icons. They carry an identifier that the
//! renderer resolves against its own icon set (a theme name, an asset key,
//! a glyph code point).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An icon identifier passed through to the renderer.
///
/// Cloning is cheap; the identifier is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(Arc<str>);

impl Icon {
    /// Create an icon handle from an identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The identifier the renderer resolves.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Icon {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
