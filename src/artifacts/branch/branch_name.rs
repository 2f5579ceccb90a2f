use crate::artifacts::branch::{HEAD_REF_NAME, INVALID_BRANCH_NAME_REGEX, REF_ALIASES};
use crate::errors::{Error, Result};

/// Validated branch name, usable as a file name under `refs/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> Result<Self> {
        if name.is_empty() || name == HEAD_REF_NAME || REF_ALIASES.contains_key(name.as_str()) {
            return Err(Error::InvalidBranchName(name));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|_| Error::InvalidBranchName(name.clone()))?;

        if re.is_match(&name) {
            Err(Error::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
