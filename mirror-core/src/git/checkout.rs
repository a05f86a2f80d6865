//! Creating and checking out local branches

use git2::build::CheckoutBuilder;

use super::reference::{branch_ref_name, RemoteReference};
use super::repo::GitRepo;
use crate::{Error, Result};

impl GitRepo {
    /// Create local branch `branch_name` at the reference's commit and check it out
    ///
    /// The commit must already be present in the object database, so fetch
    /// before calling this. Fails if the local branch already exists.
    pub fn checkout_new_branch(&self, reference: &RemoteReference, branch_name: &str) -> Result<()> {
        let repo = self.inner();

        let commit = repo.find_commit(reference.target).map_err(|e| {
            Error::Other(format!(
                "Commit {} for {} is not available locally: {}",
                reference.target, reference.name, e
            ))
        })?;

        repo.branch(branch_name, &commit, false)?;

        let mut checkout = CheckoutBuilder::new();
        checkout.safe();
        repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
        repo.set_head(&branch_ref_name(branch_name))?;

        tracing::debug!(
            branch = %branch_name,
            commit = %reference.target,
            root = %self.root().display(),
            "Checked out new branch"
        );

        Ok(())
    }
}
