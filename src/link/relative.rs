use super::types::RelativeFilePath;

/// Folder name an editor project keeps its assets under
pub const DEFAULT_ASSET_FOLDER: &str = "Assets";

/// Express the selected file relative to the repository root.
///
/// The project directory is found by cutting `repo_root` off the front of
/// `asset_root` and erasing every occurrence of `asset_folder` from what is
/// left. The selection (itself relative to the project, e.g.
/// `Assets/Scripts/Player.cs`) is then joined onto that directory.
///
/// This works on plain strings, not path segments: an `asset_folder` name
/// that also appears inside another directory name gets erased there too.
pub fn compute_relative_path(
    repo_root: &str,
    asset_root: &str,
    selected: &str,
    asset_folder: &str,
) -> RelativeFilePath {
    let repo_root = to_forward_slashes(repo_root);
    let asset_root = to_forward_slashes(asset_root);

    let project_dir = asset_root
        .strip_prefix(repo_root.as_str())
        .unwrap_or(&asset_root);
    let project_dir = if asset_folder.is_empty() {
        project_dir.to_string()
    } else {
        project_dir.replace(asset_folder, "")
    };
    let project_dir = project_dir.strip_prefix('/').unwrap_or(&project_dir);

    RelativeFilePath::new(combine(project_dir, &to_forward_slashes(selected)))
}

fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Join like a platform path-combine: an empty base or a rooted `path` wins.
fn combine(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with('/') {
        path.to_string()
    } else if base.ends_with('/') || path.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
