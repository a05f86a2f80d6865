//! Remote branch enumeration and lookup

use crate::client::SourceControl;
use crate::git::{branch_ref_name, RemoteReference};
use crate::{Error, Result};

/// List the branches (`refs/heads/*`) advertised by a remote
///
/// Tags, `HEAD` and every other namespace are dropped. The remote's order is
/// kept as-is.
pub fn list_remote_branches<C: SourceControl>(
    client: &C,
    repo: &C::Repo,
    remote_name: &str,
) -> Result<Vec<RemoteReference>> {
    let branches: Vec<RemoteReference> = client
        .list_remote_references(repo, remote_name)?
        .into_iter()
        .filter(RemoteReference::is_branch)
        .collect();

    tracing::debug!(remote = %remote_name, branches = branches.len(), "Enumerated remote branches");
    Ok(branches)
}

/// Find a remote reference by its full name, e.g. `refs/heads/dev`
pub fn find_remote_reference<C: SourceControl>(
    client: &C,
    repo: &C::Repo,
    remote_name: &str,
    full_name: &str,
) -> Result<RemoteReference> {
    client
        .list_remote_references(repo, remote_name)?
        .into_iter()
        .find(|reference| reference.name == full_name)
        .ok_or_else(|| Error::ReferenceNotFound(full_name.to_string()))
}

/// Check out a new local branch at the remote tip of `branch_name`
///
/// The fetch beforehand is best-effort; failures are logged and the lookup
/// proceeds with whatever objects are already present.
pub fn checkout_to_branch<C: SourceControl>(
    client: &C,
    repo: &C::Repo,
    remote_name: &str,
    branch_name: &str,
) -> Result<RemoteReference> {
    if let Err(e) = client.fetch(repo, remote_name, false) {
        tracing::warn!("Failed to fetch from {}: {}. Continuing with local state.", remote_name, e);
    }

    let reference = find_remote_reference(client, repo, remote_name, &branch_ref_name(branch_name))?;
    client.checkout_new_branch(repo, &reference, branch_name)?;

    Ok(reference)
}
