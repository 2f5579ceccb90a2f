//! Per-path three-way reconciliation
//!
//! Only the paths tracked by the merged-in commit are considered. For each
//! such path `p`, with `base`, `current` and `other` its blob ids in the
//! common ancestor, HEAD and the merged-in commit (absent counts as empty):
//!
//! | condition                                                        | action       |
//! |------------------------------------------------------------------|--------------|
//! | `current == other` or `other == base`                            | unchanged    |
//! | `current != base`, both non-empty, and `current != other`        | conflict     |
//! | anything else                                                    | fast-forward |
//!
//! A conflict leaves the working file and the index alone. A fast-forward
//! takes `other`'s content. Paths only present in HEAD are never touched.

use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Unchanged,
    Conflict,
    FastForward,
}

impl MergeAction {
    pub fn classify(
        base: Option<&ObjectId>,
        current: Option<&ObjectId>,
        other: &ObjectId,
    ) -> MergeAction {
        if current == Some(other) || base == Some(other) {
            return MergeAction::Unchanged;
        }

        match (base, current) {
            (Some(base), Some(current)) if base != current => MergeAction::Conflict,
            _ => MergeAction::FastForward,
        }
    }
}

/// What a merge has to do to the working directory and the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    /// Paths taking the merged-in content, with the blob to write
    pub fast_forward: Vec<(PathBuf, ObjectId)>,
    /// Paths changed on both sides
    pub conflicts: Vec<PathBuf>,
}

impl MergePlan {
    pub fn build(base: &Snapshot, current: &Snapshot, other: &Snapshot) -> Self {
        let mut plan = MergePlan::default();

        for (path, other_oid) in other {
            let action = MergeAction::classify(base.get(path), current.get(path), other_oid);
            tracing::debug!(path = %path.display(), ?action, "reconciled path");

            match action {
                MergeAction::Unchanged => {}
                MergeAction::Conflict => plan.conflicts.push(path.clone()),
                MergeAction::FastForward => {
                    plan.fast_forward.push((path.clone(), other_oid.clone()))
                }
            }
        }

        plan
    }
}
