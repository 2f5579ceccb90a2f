use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::collections::HashSet;

impl Repository {
    /// History from HEAD, most recent first
    ///
    /// Empty in a repository without commits. Every call starts a new walk.
    pub fn log(&self) -> RevList<'_> {
        RevList::new(self.database(), self.state().head().cloned())
    }

    /// History from any revision, most recent first
    pub fn log_from(&self, revision: &str) -> Result<RevList<'_>> {
        let start = Revision::try_parse(revision)?.resolve(self)?;

        Ok(RevList::new(self.database(), Some(start)))
    }

    /// Every commit reachable from `commit_id`, `commit_id` included
    pub fn ancestors(&self, commit_id: &ObjectId) -> HashSet<ObjectId> {
        RevList::new(self.database(), Some(commit_id.clone())).ancestors()
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use crate::config::Config;
    use crate::errors::Error;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn repository_with_history(messages: &[&str]) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let mut repository = Repository::init(dir.path(), Config::default()).unwrap();

        for (i, message) in messages.iter().enumerate() {
            std::fs::write(dir.path().join("file.txt"), i.to_string()).unwrap();
            repository.add(&["file.txt".into()]).unwrap();
            repository.commit(message).unwrap();
        }

        (dir, repository)
    }

    #[test]
    fn log_is_empty_without_commits() {
        let (_dir, repository) = repository_with_history(&[]);

        assert_eq!(repository.log().count(), 0);
    }

    #[test]
    fn log_lists_one_entry_per_commit_newest_first() {
        let (_dir, repository) = repository_with_history(&["one", "two", "three"]);

        let messages = repository.log().map(|entry| entry.message).collect::<Vec<_>>();

        assert_eq!(messages, vec!["three", "two", "one"]);
        assert_eq!(repository.log().count(), 3);
    }

    #[test]
    fn log_from_a_revision_starts_there() {
        let (_dir, repository) = repository_with_history(&["one", "two", "three"]);

        let messages = repository
            .log_from("HEAD~1")
            .unwrap()
            .map(|entry| entry.message)
            .collect::<Vec<_>>();

        assert_eq!(messages, vec!["two", "one"]);
    }

    #[test]
    fn log_from_unknown_branch_fails() {
        let (_dir, repository) = repository_with_history(&["one"]);

        assert!(matches!(
            repository.log_from("nope"),
            Err(Error::BranchNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn ancestors_of_head_cover_all_commits() {
        let (_dir, repository) = repository_with_history(&["one", "two"]);
        let head = repository.state().head().cloned().unwrap();

        let ancestors = repository.ancestors(&head);

        assert_eq!(ancestors.len(), 2);
        assert!(ancestors.contains(&head));
    }
}
