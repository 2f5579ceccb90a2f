//! Lowest common ancestor finder
//!
//! Every commit has at most one parent, so the history of a commit is a
//! chain. The lowest common ancestor of `current` and `other` is found in
//! two passes:
//!
//! 1. collect every commit on the chain of `current`, `current` included
//! 2. walk the chain of `other` from `other` itself; the first commit also
//!    seen in pass 1 is the answer
//!
//! Both passes are linear in the length of the chains. When the chains
//! share no commit there is no common ancestor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = LcaFinder::new(|oid| {
//!     database.load_commit(oid).ok().and_then(|commit| commit.parent().cloned())
//! });
//!
//! let base = finder.find_lowest_common_ancestor(&head, &other);
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Finds the lowest common ancestor of two commits
///
/// # Type Parameters
///
/// * `ParentLoaderFn` - returns the parent of a commit, or `None` for a root
///   commit. A commit that cannot be loaded is treated as a root, which
///   truncates the chain at that point.
pub struct LcaFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Option<ObjectId>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> LcaFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Option<ObjectId>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Commits on the chain starting at `commit_id`, `commit_id` first
    pub fn chain(&self, commit_id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        // stops if a corrupted store points back into the chain
        let mut visited = HashSet::new();

        std::iter::successors(Some(commit_id), move |oid| (self.parent_loader)(oid))
            .take_while(move |oid| visited.insert(oid.clone()))
    }

    pub fn ancestors(&self, commit_id: &ObjectId) -> HashSet<ObjectId> {
        self.chain(commit_id.clone()).collect()
    }

    pub fn find_lowest_common_ancestor(
        &self,
        current: &ObjectId,
        other: &ObjectId,
    ) -> Option<ObjectId> {
        let current_ancestors = self.ancestors(current);
        let lca = self
            .chain(other.clone())
            .find(|oid| current_ancestors.contains(oid));

        tracing::debug!(%current, %other, lca = ?lca, "lowest common ancestor");

        lca
    }
}
