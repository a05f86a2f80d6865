//! Remote operations: fetching and listing advertised references

use git2::{Direction, FetchOptions};

use super::progress::remote_callbacks;
use super::reference::RemoteReference;
use super::repo::GitRepo;
use crate::Result;

impl GitRepo {
    /// Fetch from a remote using its configured refspecs
    pub fn fetch(&self, remote_name: &str, progress: bool) -> Result<()> {
        let mut remote = self.find_remote(remote_name)?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks(progress));

        tracing::debug!(remote = %remote_name, root = %self.root().display(), "Fetching");
        remote.fetch(&[] as &[&str], Some(&mut fetch_options), None)?;

        Ok(())
    }

    /// List every reference the remote advertises
    ///
    /// This connects to the remote; nothing is read from local
    /// remote-tracking branches. Order is the order the remote sends.
    pub fn list_remote_references(&self, remote_name: &str) -> Result<Vec<RemoteReference>> {
        let mut remote = self.find_remote(remote_name)?;

        let connection = remote.connect_auth(Direction::Fetch, Some(remote_callbacks(false)), None)?;
        let references = connection
            .list()?
            .iter()
            .map(|head| RemoteReference::new(head.name(), head.oid()))
            .collect::<Vec<_>>();

        tracing::debug!(
            remote = %remote_name,
            count = references.len(),
            "Listed remote references"
        );

        Ok(references)
    }
}
