use super::types::{LinkError, RemoteUrl};

/// Normalize a git remote URL into the https form used by the hosting UI.
///
/// * `git@host:owner/repo.git` becomes `https://host/owner/repo`
/// * `https://host/owner/repo.git` becomes `https://host/owner/repo`
///
/// Anything else passes through untouched; malformed remotes produce a
/// malformed URL rather than an error.
///
/// # Errors
/// Returns `LinkError::InvalidRemote` if nothing is left once whitespace and
/// the `.git` suffix are removed.
pub fn normalize_remote_url(raw: &str) -> Result<RemoteUrl, LinkError> {
    let url = raw.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);
    if url.is_empty() {
        return Err(LinkError::InvalidRemote);
    }

    // scp-like SSH form: only the first ':' separates host from path
    if let Some(rest) = url.strip_prefix("git@") {
        return Ok(RemoteUrl(format!("https://{}", rest.replacen(':', "/", 1))));
    }

    Ok(RemoteUrl(url.to_string()))
}
