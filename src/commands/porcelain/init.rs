use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::config::Config;
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

impl Repository {
    /// Create the metadata directory at `path`, then open the repository
    ///
    /// Running `init` on an existing repository leaves its content alone.
    pub fn init(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(Error::io(path))?;
        let root = path.canonicalize().map_err(Error::io(path))?;

        let mut repository = Repository::assemble(root, config);

        let objects_path = repository.database().objects_path();
        fs::create_dir_all(objects_path).map_err(Error::io(objects_path))?;

        let refs_path = repository.refs().refs_path();
        fs::create_dir_all(&refs_path).map_err(Error::io(&refs_path))?;

        // HEAD and the index start out empty
        let head_path = repository.refs().head_path();
        if !head_path.exists() {
            fs::write(&head_path, b"").map_err(Error::io(&head_path))?;
        }

        let index_path = repository.index_path();
        if !index_path.exists() {
            fs::write(index_path, b"").map_err(Error::io(index_path))?;
        }

        let state = RepositoryState::load(repository.refs(), repository.index_path())?;
        *repository.state_mut() = state;

        tracing::info!(path = %repository.path().display(), "initialized repository");

        Ok(repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    #[test]
    fn init_creates_the_metadata_layout() {
        let dir = TempDir::new().unwrap();

        let repository = Repository::init(dir.path(), Config::default()).unwrap();
        let metadata = repository.metadata_path();

        assert!(metadata.join("objects").is_dir());
        assert!(metadata.join("refs").is_dir());
        assert_eq!(std::fs::read_to_string(metadata.join("HEAD")).unwrap(), "");
        assert_eq!(std::fs::read_to_string(metadata.join("index")).unwrap(), "");
        assert_eq!(repository.state().head(), None);
    }

    #[test]
    fn init_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        Repository::init(&nested, Config::default()).unwrap();

        assert!(Repository::open_with_config(&nested, Config::default()).is_ok());
    }

    #[test]
    fn reinit_keeps_existing_state() {
        let dir = TempDir::new().unwrap();
        let mut repository = Repository::init(dir.path(), Config::default()).unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repository.add(&["a.txt".into()]).unwrap();
        let head = repository.commit("first").unwrap();
        repository.save().unwrap();

        let reopened = Repository::init(dir.path(), Config::default()).unwrap();

        assert_eq!(reopened.state().head(), Some(&head));
    }
}
