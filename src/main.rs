use clap::Parser;
use gh_file_opener::browser::SystemBrowser;
use gh_file_opener::config::load_config;
use gh_file_opener::vcs::GitCli;
use gh_file_opener::{OpenError, RepositoryLinkResolver, ResolverSettings};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NO_SELECTION: i32 = 1;
const EXIT_GIT: i32 = 2;
const EXIT_BROWSER: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "gh-file-opener")]
#[command(about = "Open a project file on GitHub at the current branch", long_about = None)]
#[command(version)]
struct Cli {
    /// Selected file, relative to the project (e.g. Assets/Scripts/Player.cs)
    selection: Option<String>,

    /// Absolute path of the asset folder (defaults to <current dir>/<asset folder>)
    #[arg(short, long)]
    asset_root: Option<PathBuf>,

    /// Name of the asset folder (overrides config, default "Assets")
    #[arg(long)]
    asset_folder: Option<String>,

    /// Give up on a git query after this long (e.g. 5s); default waits forever
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Print the URL instead of opening the browser
    #[arg(short, long)]
    print: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gh-file-opener/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

/// Show the single user-facing message for a failure
fn report(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

fn exit_code(err: &OpenError) -> i32 {
    match err {
        OpenError::NoSelection => EXIT_NO_SELECTION,
        OpenError::VcsCommandFailed(_)
        | OpenError::MissingGitInfo(_)
        | OpenError::UrlGenerationFailed => EXIT_GIT,
        OpenError::BrowserFailed(_) => EXIT_BROWSER,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = gh_file_opener::logging::init_logging(cli.verbose) {
        eprintln!("{:#}", e);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{:#}", e);
            report(&format!("Config error: {:#}", e));
            std::process::exit(EXIT_CONFIG);
        }
    };

    let timeout = match cli.timeout {
        Some(t) => Some(t),
        // Validated by load_config
        None => config.timeout().ok().flatten(),
    };
    let asset_folder = cli.asset_folder.unwrap_or(config.asset_folder);

    let asset_root = match resolve_asset_root(cli.asset_root, &asset_folder) {
        Ok(p) => p,
        Err(e) => {
            report(&format!("Cannot determine asset folder: {}", e));
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!("Asset root: {}", asset_root.display());

    let vcs = GitCli::new(&asset_root)
        .with_program(config.git_program)
        .with_timeout(timeout);
    let settings = ResolverSettings {
        asset_root,
        asset_folder,
    };
    let resolver = RepositoryLinkResolver::new(vcs, settings);
    let selection = cli.selection.as_deref();

    let result = if cli.print {
        resolver.resolve(selection).await
    } else {
        resolver.open(selection, &SystemBrowser).await
    };

    match result {
        Ok(url) if cli.print => println!("{}", url),
        Ok(url) => println!("Opening {}", url),
        Err(e) => {
            tracing::error!("{}", e);
            report(e.user_message());
            std::process::exit(exit_code(&e));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Absolute asset folder: the given path, or `<current dir>/<asset_folder>`
fn resolve_asset_root(asset_root: Option<PathBuf>, asset_folder: &str) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let path = match asset_root {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd.join(asset_folder),
    };
    // git reports the top level fully resolved; the asset root must match it as a prefix
    Ok(dunce::canonicalize(&path).unwrap_or_else(|_| collapse_dots(&path)))
}

/// Remove "." and ".." segments without touching the filesystem
fn collapse_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_file_opener::link::{compute_relative_path, DEFAULT_ASSET_FOLDER};
    use std::env;
    use std::fs;

    #[cfg(unix)]
    #[test]
    fn test_parent_segments_are_collapsed() {
        let root = resolve_asset_root(Some(PathBuf::from("/home/dev/tool/../game/./Assets")), "Assets")
            .unwrap();
        assert_eq!(root, PathBuf::from("/home/dev/game/Assets"));

        let relative = compute_relative_path(
            "/home/dev/game",
            &root.to_string_lossy(),
            "Assets/A.cs",
            DEFAULT_ASSET_FOLDER,
        );
        assert_eq!(relative.as_str(), "Assets/A.cs");
    }

    #[test]
    fn test_collapse_dots() {
        assert_eq!(collapse_dots(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(collapse_dots(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(collapse_dots(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_existing_asset_root_is_canonicalized() {
        let project = env::temp_dir().join("gh_file_opener_test_project");
        let assets = project.join("Assets");
        fs::create_dir_all(&assets).unwrap();
        fs::create_dir_all(project.join("Tools")).unwrap();

        let root = resolve_asset_root(Some(project.join("Tools").join("..").join("Assets")), "Assets")
            .unwrap();
        assert_eq!(root, dunce::canonicalize(&assets).unwrap());

        let _ = fs::remove_dir_all(&project);
    }
}
