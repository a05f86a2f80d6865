//! Local git repositories used as remotes in tests

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// A non-bare repository on disk that tests clone from
///
/// `main` holds `README.md` and `BRANCH` (containing `main\n`). Every other
/// branch is one commit on top of `main` whose `BRANCH` file holds the
/// branch name.
pub struct RemoteFixture {
    dir: TempDir,
    repo: Repository,
}

impl RemoteFixture {
    pub fn new(branches: &[&str], tags: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();

        std::fs::write(dir.path().join("README.md"), "fixture\n").unwrap();
        std::fs::write(dir.path().join("BRANCH"), "main\n").unwrap();
        let main = {
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("README.md")).unwrap();
            index.add_path(Path::new("BRANCH")).unwrap();
            index.write().unwrap();
            let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
            repo.commit(Some("HEAD"), &signature(), &signature(), "initial", &tree, &[])
                .unwrap()
        };

        let fixture = Self { dir, repo };
        for branch in branches.iter().filter(|b| **b != "main") {
            fixture.add_branch(branch);
        }
        for tag in tags {
            let target = fixture.repo.find_object(main, None).unwrap();
            fixture.repo.tag_lightweight(tag, &target, false).unwrap();
        }

        fixture
    }

    /// Add a branch one commit ahead of `main`
    pub fn add_branch(&self, name: &str) -> Oid {
        let main = self.tip("main");
        let parent = self.repo.find_commit(main).unwrap();

        let blob = self.repo.blob(format!("{}\n", name).as_bytes()).unwrap();
        let mut builder = self.repo.treebuilder(Some(&parent.tree().unwrap())).unwrap();
        builder.insert("BRANCH", blob, 0o100644).unwrap();
        let tree = self.repo.find_tree(builder.write().unwrap()).unwrap();

        self.repo
            .commit(
                Some(&format!("refs/heads/{}", name)),
                &signature(),
                &signature(),
                &format!("branch {}", name),
                &tree,
                &[&parent],
            )
            .unwrap()
    }

    /// Tip commit of a local branch
    pub fn tip(&self, branch: &str) -> Oid {
        self.repo
            .find_reference(&format!("refs/heads/{}", branch))
            .unwrap()
            .target()
            .unwrap()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn missing_url(&self) -> PathBuf {
        self.dir.path().join("no-such-repository")
    }
}

fn signature() -> Signature<'static> {
    Signature::now("Fixture", "fixture@example.com").unwrap()
}
