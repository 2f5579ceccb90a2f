use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotChange {
    Added(ObjectId),
    Deleted(ObjectId),
    Modified { old: ObjectId, new: ObjectId },
}

impl SnapshotChange {
    pub fn from_entries(old: Option<&ObjectId>, new: Option<&ObjectId>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(SnapshotChange::Added(new.clone())),
            (Some(old), None) => Some(SnapshotChange::Deleted(old.clone())),
            (Some(old), Some(new)) if old != new => Some(SnapshotChange::Modified {
                old: old.clone(),
                new: new.clone(),
            }),
            // same blob on both sides
            _ => None,
        }
    }
}

/// Changed paths between two snapshots, in path order
pub fn snapshot_diff(old: &Snapshot, new: &Snapshot) -> BTreeMap<PathBuf, SnapshotChange> {
    let paths = old.keys().chain(new.keys()).collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            SnapshotChange::from_entries(old.get(path), new.get(path))
                .map(|change| (path.clone(), change))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(entries: &[(&str, &str)]) -> Snapshot {
        entries
            .iter()
            .map(|(path, content)| (PathBuf::from(path), ObjectId::hash(content.as_bytes())))
            .collect()
    }

    #[test]
    fn union_of_paths_is_classified() {
        let old = snapshot(&[("kept.txt", "k"), ("gone.txt", "g"), ("edited.txt", "1")]);
        let new = snapshot(&[("kept.txt", "k"), ("edited.txt", "2"), ("fresh.txt", "f")]);

        let changes = snapshot_diff(&old, &new);

        assert_eq!(
            changes.into_iter().collect::<Vec<_>>(),
            vec![
                (
                    PathBuf::from("edited.txt"),
                    SnapshotChange::Modified {
                        old: ObjectId::hash(b"1"),
                        new: ObjectId::hash(b"2"),
                    }
                ),
                (PathBuf::from("fresh.txt"), SnapshotChange::Added(ObjectId::hash(b"f"))),
                (PathBuf::from("gone.txt"), SnapshotChange::Deleted(ObjectId::hash(b"g"))),
            ]
        );
    }

    #[test]
    fn snapshot_against_itself_has_no_changes() {
        let side = snapshot(&[("a.txt", "a"), ("dir/b.txt", "b")]);

        assert!(snapshot_diff(&side, &side).is_empty());
    }
}
