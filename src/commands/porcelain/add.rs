use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::Result;
use std::path::PathBuf;

impl Repository {
    /// Store the content of each path and stage it
    ///
    /// Directories are expanded to every regular file below them, in path
    /// order. Every path is checked before anything is staged, so a missing
    /// path leaves the index untouched.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, paths: &[PathBuf]) -> Result<Vec<IndexEntry>> {
        let files = paths
            .iter()
            .map(|path| {
                let relative = self.workspace().normalize(path)?;
                self.workspace().list_files(&relative)
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            let content = self.workspace().read_file(&file)?;
            let blob_id = self.database().put(&content)?;

            tracing::debug!(path = %file.display(), %blob_id, "staged file");
            self.state_mut().index_mut().stage(file.clone(), blob_id.clone());
            staged.push(IndexEntry::new(file, blob_id));
        }

        Ok(staged)
    }
}
