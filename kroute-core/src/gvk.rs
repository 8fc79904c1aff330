//! Resource type identity.

use std::fmt;

/// Identifies the schema of a resource: API group, version and kind.
///
/// This is the routing key of the registry. Two requests with equal
/// `GroupVersionKind`s are always dispatched to the same handler list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    /// API group. Empty for the core group.
    pub group: String,
    /// API version within the group.
    pub version: String,
    /// Kind name, e.g. `Pod`.
    pub kind: String,
}

impl GroupVersionKind {
    /// Create a new group/version/kind triple.
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Build from an `apiVersion` string and a kind.
    ///
    /// `"apps/v1"` splits into group `apps` and version `v1`; a bare `"v1"`
    /// belongs to the core group.
    pub fn from_api_version(api_version: &str, kind: impl Into<String>) -> Self {
        match api_version.split_once('/') {
            Some((group, version)) => Self::new(group, version, kind),
            None => Self::new("", api_version, kind),
        }
    }

    /// Render the `apiVersion` string for this type.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// True when no kind is set. An empty kind never identifies a type.
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}, Kind={}", self.version, self.kind)
        } else {
            write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
        }
    }
}
