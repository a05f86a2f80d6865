//! Snapshots of references advertised by a remote

use std::fmt;

use git2::Oid;

/// Namespace holding branch references
pub const BRANCH_PREFIX: &str = "refs/heads/";

/// A named pointer to a commit, as listed by a remote
///
/// This is a snapshot taken at list time and is never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReference {
    /// Fully qualified name, e.g. `refs/heads/main`
    pub name: String,
    /// Commit (or tag object) the reference points at
    pub target: Oid,
}

impl RemoteReference {
    /// Create a reference snapshot
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Whether this reference lives under `refs/heads/`
    pub fn is_branch(&self) -> bool {
        self.branch_name().is_some()
    }

    /// Branch name with the `refs/heads/` prefix removed
    pub fn branch_name(&self) -> Option<&str> {
        short_branch_name(&self.name)
    }
}

impl fmt::Display for RemoteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.name)
    }
}

/// Strip `refs/heads/` from a full reference name
///
/// Returns `None` for anything outside the branch namespace, and for the bare
/// prefix itself.
pub fn short_branch_name(full_name: &str) -> Option<&str> {
    full_name
        .strip_prefix(BRANCH_PREFIX)
        .filter(|name| !name.is_empty())
}

/// Full reference name for a branch
pub fn branch_ref_name(short_name: &str) -> String {
    format!("{}{}", BRANCH_PREFIX, short_name)
}
