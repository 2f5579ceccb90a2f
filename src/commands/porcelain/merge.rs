use crate::areas::repository::Repository;
use crate::artifacts::merge::lca_finder::LcaFinder;
use crate::artifacts::merge::reconcile::MergePlan;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Result of merging a branch into HEAD
///
/// Conflicts are not failures: the merge commit is still created, and the
/// conflicting paths keep HEAD's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Lowest common ancestor of HEAD and the merged branch
    pub base: ObjectId,
    /// The merge commit, now HEAD
    pub commit: ObjectId,
    /// Paths that took the merged branch's content
    pub fast_forwarded: Vec<PathBuf>,
    /// Paths changed on both sides, left untouched
    pub conflicts: Vec<PathBuf>,
}

impl Repository {
    #[tracing::instrument(skip(self))]
    pub fn merge(&mut self, name: &str) -> Result<MergeOutcome> {
        let other = self
            .state()
            .branch(name)
            .cloned()
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))?;
        let current = self.state().head().cloned().ok_or(Error::NoCommitYet)?;

        let base = {
            let database = self.database();
            let finder = LcaFinder::new(|oid| {
                database
                    .load_commit(oid)
                    .ok()
                    .and_then(|commit| commit.parent().cloned())
            });

            finder
                .find_lowest_common_ancestor(&current, &other)
                .ok_or(Error::NoCommonAncestor)?
        };

        let plan = MergePlan::build(
            self.database().load_commit(&base)?.snapshot(),
            self.database().load_commit(&current)?.snapshot(),
            self.database().load_commit(&other)?.snapshot(),
        );

        // every blob is loaded before the first write
        let contents = plan
            .fast_forward
            .iter()
            .map(|(path, blob_id)| {
                Ok((path.clone(), blob_id.clone(), self.database().load_blob(blob_id)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut fast_forwarded = Vec::with_capacity(contents.len());
        for (path, blob_id, blob) in contents {
            self.workspace().write_file(&path, blob.content())?;
            self.state_mut().index_mut().stage(path.clone(), blob_id);
            fast_forwarded.push(path);
        }

        for path in &plan.conflicts {
            tracing::warn!(path = %path.display(), "merge conflict");
        }

        let commit = self.commit(&format!("Merged branch {name}"))?;
        tracing::info!(
            branch = name,
            %base,
            %commit,
            fast_forwarded = fast_forwarded.len(),
            conflicts = plan.conflicts.len(),
            "merged branch"
        );

        Ok(MergeOutcome {
            base,
            commit,
            fast_forwarded,
            conflicts: plan.conflicts,
        })
    }
}
