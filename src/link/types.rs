use std::fmt;

/// Remote URL in its web-hosting form, e.g. "https://github.com/owner/repo"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl(pub(crate) String);

impl RemoteUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path of the selected file relative to the repository root, '/' separated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeFilePath(String);

impl RelativeFilePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativeFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final "view this file" URL handed to the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl(pub(crate) String);

impl ResolvedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Remote URL was empty after trimming
    InvalidRemote,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::InvalidRemote => write!(f, "Remote URL is empty"),
        }
    }
}

impl std::error::Error for LinkError {}
