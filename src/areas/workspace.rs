use crate::errors::{Error, Result};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// The working directory of a repository
///
/// All paths handed in and out are relative to the repository root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    /// Name of the metadata directory, never listed nor written through here
    ignored: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignored: String) -> Self {
        Workspace { path, ignored }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into a path relative to the repository root
    ///
    /// Relative paths are taken from the repository root. The path must exist
    /// and must not point into the metadata directory.
    pub fn normalize(&self, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        if !absolute.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let absolute = absolute.canonicalize().map_err(Error::io(&absolute))?;
        let relative = absolute
            .strip_prefix(&self.path)
            .map_err(|_| Error::InvalidPath(path.to_path_buf()))?
            .to_path_buf();

        if self.is_ignored(&relative) {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }

        Ok(relative)
    }

    /// Every regular file at or below `root_file_path`, sorted by path
    pub fn list_files(&self, root_file_path: &Path) -> Result<Vec<PathBuf>> {
        let absolute = self.path.join(root_file_path);

        if absolute.is_file() {
            return Ok(vec![root_file_path.to_path_buf()]);
        }

        if !absolute.is_dir() {
            return Err(Error::FileNotFound(root_file_path.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&absolute).sort_by_file_name() {
            let entry = entry.map_err(|err| Error::Io {
                path: absolute.clone(),
                source: err.into(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&self.path)
                && !self.is_ignored(relative)
            {
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.components()
            .any(|component| matches!(component, Component::Normal(name) if name == self.ignored.as_str()))
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let absolute = self.path.join(file_path);

        match std::fs::read(&absolute) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::FileNotFound(file_path.to_path_buf()))
            }
            Err(err) => Err(Error::Io {
                path: absolute,
                source: err,
            }),
        }
    }

    /// Create or truncate the file at `file_path` with `content`
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> Result<()> {
        let absolute = self.path.join(file_path);

        if let Some(parent) = absolute.parent() {
            std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
        }

        std::fs::write(&absolute, content).map_err(Error::io(&absolute))
    }

    /// Remove a file, then every directory it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> Result<()> {
        let absolute = self.path.join(file_path);

        match std::fs::remove_file(&absolute) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => {
                return Err(Error::Io {
                    path: absolute,
                    source: err,
                });
            }
        }

        let mut parent = absolute.parent();
        while let Some(dir) = parent
            && dir != &*self.path
        {
            // stops at the first directory that still has entries
            if std::fs::remove_dir(dir).is_err() {
                break;
            }
            parent = dir.parent();
        }

        Ok(())
    }
}
