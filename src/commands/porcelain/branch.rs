use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

impl Repository {
    /// Point a branch at HEAD, replacing any previous target of that name
    pub fn create_branch(&mut self, name: &str) -> Result<ObjectId> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let head = self.state().head().cloned().ok_or(Error::NoCommitYet)?;

        if let Some(previous) = self.state_mut().set_branch(branch_name, head.clone()) {
            tracing::debug!(branch = name, %previous, "overwriting branch");
        }
        tracing::info!(branch = name, %head, "created branch");

        Ok(head)
    }

    /// Every branch with its target, sorted by name
    pub fn branches(&self) -> Vec<(BranchName, ObjectId)> {
        self.state()
            .branches()
            .iter()
            .map(|(name, oid)| (name.clone(), oid.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use crate::config::Config;
    use crate::errors::Error;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn repository_with_commit() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let mut repository = Repository::init(dir.path(), Config::default()).unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repository.add(&["a.txt".into()]).unwrap();
        repository.commit("first").unwrap();
        (dir, repository)
    }

    #[test]
    fn branch_points_at_head() {
        let (_dir, mut repository) = repository_with_commit();
        let head = repository.state().head().cloned().unwrap();

        assert_eq!(repository.create_branch("feat").unwrap(), head);
        assert_eq!(repository.state().branch("feat"), Some(&head));
    }

    #[test]
    fn branches_are_listed_by_name() {
        let (_dir, mut repository) = repository_with_commit();
        repository.create_branch("zeta").unwrap();
        repository.create_branch("alpha").unwrap();

        let names = repository
            .branches()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn recreating_a_branch_moves_it() {
        let (dir, mut repository) = repository_with_commit();
        repository.create_branch("feat").unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        repository.add(&["b.txt".into()]).unwrap();
        let second = repository.commit("second").unwrap();

        repository.create_branch("feat").unwrap();

        assert_eq!(repository.state().branch("feat"), Some(&second));
        assert_eq!(repository.branches().len(), 1);
    }

    #[test]
    fn branch_needs_a_commit() {
        let dir = TempDir::new().unwrap();
        let mut repository = Repository::init(dir.path(), Config::default()).unwrap();

        assert!(matches!(
            repository.create_branch("feat"),
            Err(Error::NoCommitYet)
        ));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let (_dir, mut repository) = repository_with_commit();

        assert!(matches!(
            repository.create_branch("bad name"),
            Err(Error::InvalidBranchName(_))
        ));
        assert!(matches!(
            repository.create_branch("HEAD"),
            Err(Error::InvalidBranchName(_))
        ));
    }

    #[test]
    fn branches_survive_save_and_reopen() {
        let (dir, mut repository) = repository_with_commit();
        let head = repository.create_branch("feat").unwrap();
        repository.save().unwrap();

        let reopened = Repository::open_with_config(dir.path(), Config::default()).unwrap();

        assert_eq!(reopened.state().branch("feat"), Some(&head));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".minigit/refs/feat")).unwrap(),
            head.to_string()
        );
    }
}
