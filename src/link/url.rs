use super::types::{RelativeFilePath, RemoteUrl, ResolvedUrl};

/// Build the hosting UI URL for a file on a branch.
///
/// Plain concatenation; path segments are not percent-encoded.
pub fn build_url(remote: &RemoteUrl, branch: &str, relative: &RelativeFilePath) -> ResolvedUrl {
    ResolvedUrl(format!("{}/blob/{}/{}", remote, branch, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::normalize_remote_url;

    fn remote(raw: &str) -> RemoteUrl {
        normalize_remote_url(raw).unwrap()
    }

    #[test]
    fn test_build_url() {
        let url = build_url(
            &remote("https://github.com/owner/repo"),
            "main",
            &RelativeFilePath::new("src/Foo.cs"),
        );
        assert_eq!(url.as_str(), "https://github.com/owner/repo/blob/main/src/Foo.cs");
    }

    #[test]
    fn test_single_blob_segment() {
        let remotes = ["https://github.com/owner/repo", "git@gitlab.com:group/project.git"];
        let branches = ["main", "feature/login", "release-1.2"];
        let paths = ["README.md", "Assets/Scripts/Player.cs", "client/Assets/Scenes/Main.unity"];

        for r in remotes {
            for b in branches {
                for p in paths {
                    let url = build_url(&remote(r), b, &RelativeFilePath::new(p));
                    assert_eq!(url.as_str().matches("/blob/").count(), 1, "{}", url);
                    assert!(url.as_str().ends_with(&format!("/blob/{}/{}", b, p)));
                }
            }
        }
    }

    #[test]
    fn test_reserved_characters_are_not_escaped() {
        let url = build_url(
            &remote("https://github.com/owner/repo"),
            "main",
            &RelativeFilePath::new("Assets/My Scene #2.unity"),
        );
        assert_eq!(
            url.as_str(),
            "https://github.com/owner/repo/blob/main/Assets/My Scene #2.unity"
        );
    }
}
