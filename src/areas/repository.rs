use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::state::RepositoryState;
use crate::areas::workspace::Workspace;
use crate::config::Config;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the index file inside the metadata directory
pub const INDEX_FILE_NAME: &str = "index";

/// Name of the object directory inside the metadata directory
pub const OBJECTS_DIR_NAME: &str = "objects";

#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    config: Config,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    index_path: Box<Path>,
    state: RepositoryState,
}

impl Repository {
    /// Open the repository rooted at `path`, configured from the environment
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, Config::from_env())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let root = path
            .canonicalize()
            .map_err(|_| Error::NotARepository(path.to_path_buf()))?;

        if !root.join(config.metadata_dir()).is_dir() {
            return Err(Error::NotARepository(root));
        }

        let mut repository = Self::assemble(root, config);
        repository.state = RepositoryState::load(&repository.refs, &repository.index_path)?;

        tracing::debug!(
            path = %repository.path.display(),
            head = ?repository.state.head(),
            staged = repository.state.index().len(),
            branches = repository.state.branches().len(),
            "opened repository"
        );

        Ok(repository)
    }

    /// Wire up the stores under a canonical root, with empty state
    pub(crate) fn assemble(root: PathBuf, config: Config) -> Self {
        let metadata_path = root.join(config.metadata_dir());

        Repository {
            database: Database::new(metadata_path.join(OBJECTS_DIR_NAME).into_boxed_path()),
            workspace: Workspace::new(
                root.clone().into_boxed_path(),
                config.metadata_dir().to_string(),
            ),
            refs: Refs::new(metadata_path.clone().into_boxed_path()),
            index_path: metadata_path.join(INDEX_FILE_NAME).into_boxed_path(),
            state: RepositoryState::default(),
            path: root.into_boxed_path(),
            config,
        }
    }

    /// Write HEAD, the branch pointers and the index back to disk
    pub fn save(&self) -> Result<()> {
        self.state.save(&self.refs, &self.index_path)?;
        tracing::debug!(head = ?self.state.head(), "saved repository state");

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(self.config.metadata_dir())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn index_path(&self) -> &Path {
        &self.index_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    #[test]
    fn opening_a_plain_directory_fails() {
        let dir = TempDir::new().unwrap();

        let result = Repository::open_with_config(dir.path(), Config::default());

        assert!(matches!(result, Err(Error::NotARepository(_))));
    }

    #[test]
    fn opening_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();

        let result = Repository::open_with_config(dir.path().join("nope"), Config::default());

        assert!(matches!(result, Err(Error::NotARepository(_))));
    }
}
