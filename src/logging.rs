use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize developer-facing logging on stderr.
///
/// `RUST_LOG` is honored unless `verbose` is set, which forces debug output
/// for this crate.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("warn,gh_file_opener=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("gh-file-opener {} logging initialized", env!("CARGO_PKG_VERSION"));

    Ok(())
}
