use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, HEAD_REF_NAME, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

/// Minimum length of an abbreviated object id
pub const MIN_ABBREVIATED_LENGTH: usize = 4;

/// A revision expression naming a commit
///
/// Supported forms:
/// - `HEAD`, or its alias `@`
/// - a branch name: `main`, `feat`
/// - a full object id (64 hex characters) or an abbreviation of at least 4
/// - parent notation: `<revision>^`
/// - ancestor notation: `<revision>~<n>`
///
/// Hex strings are valid branch names too. Branches win when both exist,
/// the same way git prefers refs over object ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    /// A branch name or an object id, told apart at resolution time
    Name(String),
    Parent(Box<Revision>),
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> Result<Revision> {
        let invalid = || Error::InvalidRevision(revision.to_string());

        let parent_re = regex::Regex::new(PARENT_REGEX).map_err(|_| invalid())?;
        if let Some(caps) = parent_re.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;
            return Ok(Revision::Parent(Box::new(base_revision)));
        }

        let ancestor_re = regex::Regex::new(ANCESTOR_REGEX).map_err(|_| invalid())?;
        if let Some(caps) = ancestor_re.captures(revision) {
            let generations = caps[2].parse::<usize>().map_err(|_| invalid())?;
            let base_revision = Self::try_parse(&caps[1])?;
            return Ok(Revision::Ancestor(Box::new(base_revision), generations));
        }

        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
        if resolved_name == HEAD_REF_NAME {
            return Ok(Revision::Head);
        }

        let name = BranchName::try_parse(resolved_name.to_string()).map_err(|_| invalid())?;
        Ok(Revision::Name(name.as_ref().to_string()))
    }

    /// Id of the commit this revision names
    pub fn resolve(&self, repository: &Repository) -> Result<ObjectId> {
        self.resolve_with(repository, true)
    }

    /// Id of any stored object this revision names
    ///
    /// Unlike [`Revision::resolve`], abbreviated ids also match blobs.
    pub fn resolve_object(&self, repository: &Repository) -> Result<ObjectId> {
        self.resolve_with(repository, false)
    }

    fn resolve_with(&self, repository: &Repository, commits_only: bool) -> Result<ObjectId> {
        match self {
            Revision::Head => repository
                .state()
                .head()
                .cloned()
                .ok_or(Error::NoCommitYet),
            Revision::Name(name) => Self::resolve_name(name, repository, commits_only),
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(&base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(&oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(oid: &ObjectId, repository: &Repository) -> Result<ObjectId> {
        let commit = repository.database().load_commit(oid)?;

        commit
            .parent()
            .cloned()
            .ok_or_else(|| Error::InvalidRevision(format!("{}^", oid.to_short_oid())))
    }

    fn resolve_name(name: &str, repository: &Repository, commits_only: bool) -> Result<ObjectId> {
        if let Some(oid) = repository.state().branch(name) {
            return Ok(oid.clone());
        }

        if !Self::looks_like_oid(name) {
            return Err(Error::BranchNotFound(name.to_string()));
        }

        if name.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(name.to_string())?;
            return if repository.database().contains(&oid) {
                Ok(oid)
            } else {
                Err(Error::ObjectNotFound(oid))
            };
        }

        let mut candidates = repository.database().find_objects_by_prefix(name)?;
        if commits_only && candidates.len() > 1 {
            candidates.retain(|oid| repository.database().load_commit(oid).is_ok());
        }

        match candidates.len() {
            0 => Err(Error::InvalidRevision(name.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(Error::AmbiguousRevision {
                prefix: name.to_string(),
                candidates,
            }),
        }
    }

    fn looks_like_oid(name: &str) -> bool {
        (MIN_ABBREVIATED_LENGTH..=OBJECT_ID_LENGTH).contains(&name.len()) && ObjectId::is_hex(name)
    }
}
