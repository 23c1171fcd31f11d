use crate::browser::UrlOpener;
use crate::link::{
    build_url, compute_relative_path, normalize_remote_url, ResolvedUrl, DEFAULT_ASSET_FOLDER,
};
use crate::vcs::{Vcs, VcsError};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum OpenError {
    /// No file was selected
    NoSelection,
    /// The version-control client could not be run or reported a failure
    VcsCommandFailed(VcsError),
    /// The client ran fine but returned an empty root, branch or remote
    MissingGitInfo(&'static str),
    UrlGenerationFailed,
    BrowserFailed(anyhow::Error),
}

impl OpenError {
    /// Static message shown to the user; details only go to the log
    pub fn user_message(&self) -> &'static str {
        match self {
            OpenError::NoSelection => "No valid file selected.",
            OpenError::VcsCommandFailed(_) | OpenError::MissingGitInfo(_) => {
                "Failed to retrieve Git information."
            }
            OpenError::UrlGenerationFailed => "Failed to generate GitHub URL.",
            OpenError::BrowserFailed(_) => "Failed to open browser.",
        }
    }
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::NoSelection => write!(f, "No file selected"),
            OpenError::VcsCommandFailed(e) => write!(f, "Git command failed: {}", e),
            OpenError::MissingGitInfo(what) => write!(f, "Git returned an empty {}", what),
            OpenError::UrlGenerationFailed => write!(f, "Generated URL is empty"),
            OpenError::BrowserFailed(e) => write!(f, "{:#}", e),
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenError::VcsCommandFailed(e) => Some(e),
            OpenError::BrowserFailed(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<VcsError> for OpenError {
    fn from(e: VcsError) -> Self {
        OpenError::VcsCommandFailed(e)
    }
}

/// Where the project lives on disk
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Absolute path of the project's asset folder; git runs from here
    pub asset_root: PathBuf,
    /// Folder name erased when deriving the project directory
    pub asset_folder: String,
}

impl ResolverSettings {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            asset_folder: DEFAULT_ASSET_FOLDER.to_string(),
        }
    }
}

/// Turns a selected project file into its page on the hosting service
pub struct RepositoryLinkResolver<V> {
    vcs: V,
    settings: ResolverSettings,
}

impl<V: Vcs> RepositoryLinkResolver<V> {
    pub fn new(vcs: V, settings: ResolverSettings) -> Self {
        Self { vcs, settings }
    }

    /// Whether `selection` names something that can be opened at all
    pub fn can_open(selection: Option<&str>) -> bool {
        selection.is_some_and(|s| !s.is_empty())
    }

    /// Resolve the URL of `selection` on the current branch of `origin`.
    ///
    /// Git is not invoked when nothing is selected.
    pub async fn resolve(&self, selection: Option<&str>) -> Result<ResolvedUrl, OpenError> {
        let selected = match selection {
            Some(s) if Self::can_open(Some(s)) => s,
            _ => return Err(OpenError::NoSelection),
        };

        let repo_root = self.vcs.repository_root().await?;
        if repo_root.is_empty() {
            return Err(OpenError::MissingGitInfo("repository root"));
        }
        let asset_root = self.settings.asset_root.to_string_lossy();
        let relative_path = compute_relative_path(
            &repo_root,
            &asset_root,
            selected,
            &self.settings.asset_folder,
        );
        tracing::debug!("Relative path: {}", relative_path);

        let branch = self.vcs.current_branch().await?;
        tracing::debug!("Branch: {}", branch);
        let raw_remote = self.vcs.remote_url().await?;
        tracing::debug!("Remote: {}", raw_remote);

        if branch.is_empty() {
            return Err(OpenError::MissingGitInfo("branch"));
        }
        let remote =
            normalize_remote_url(&raw_remote).map_err(|_| OpenError::MissingGitInfo("remote"))?;

        let url = build_url(&remote, &branch, &relative_path);
        if url.is_empty() {
            return Err(OpenError::UrlGenerationFailed);
        }
        Ok(url)
    }

    /// Resolve `selection` and hand the URL to `opener`
    pub async fn open(
        &self,
        selection: Option<&str>,
        opener: &impl UrlOpener,
    ) -> Result<ResolvedUrl, OpenError> {
        let url = self.resolve(selection).await?;
        tracing::debug!("Open: {}", url);
        opener.open(url.as_str()).map_err(OpenError::BrowserFailed)?;
        Ok(url)
    }
}
