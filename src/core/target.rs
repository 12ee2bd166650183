//! Target resolution from github.com web URLs.
//!
//! Secret operations apply either to an organization or to a repository;
//! the scope is derived from the URL the user passes on the command line.

use crate::error::{Error, Result};

const URL_PREFIX: &str = "https://github.com/";

/// The scope a secret operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Organization-level secrets (`https://github.com/<owner>`).
    Org { owner: String },
    /// Repository-level secrets (`https://github.com/<owner>/<repository>`).
    Repo { owner: String, repo: String },
}

impl Target {
    /// Resolve a web URL into a target.
    ///
    /// Accepts exactly `https://github.com/<owner>` or
    /// `https://github.com/<owner>/<repository>`, where both segments match
    /// `[a-zA-Z0-9-_.]+`. A single trailing slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedUrl` for any other shape: wrong host, missing
    /// scheme, disallowed characters, or extra path segments.
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix(URL_PREFIX)
            .ok_or_else(|| Error::MalformedUrl(url.to_string()))?;

        let mut segments: Vec<&str> = rest.split('/').collect();
        if segments.last() == Some(&"") {
            segments.pop();
        }

        match segments.as_slice() {
            [owner] if is_valid_segment(owner) => Ok(Target::Org {
                owner: (*owner).to_string(),
            }),
            [owner, repo] if is_valid_segment(owner) && is_valid_segment(repo) => {
                Ok(Target::Repo {
                    owner: (*owner).to_string(),
                    repo: (*repo).to_string(),
                })
            }
            _ => Err(Error::MalformedUrl(url.to_string())),
        }
    }

    /// Whether this target is organization-level.
    pub fn is_org(&self) -> bool {
        matches!(self, Target::Org { .. })
    }

    /// API path slice for this target, e.g. `orgs/acme` or `repos/acme/widgets`.
    pub fn path_slice(&self) -> String {
        match self {
            Target::Org { owner } => format!("orgs/{}", owner),
            Target::Repo { owner, repo } => format!("repos/{}/{}", owner, repo),
        }
    }
}

/// Owners and repository names allow A-Z, 0-9, dash, underscore, and dot.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
