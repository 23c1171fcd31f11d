pub mod relative;
pub mod remote;
pub mod types;
pub mod url;

pub use relative::{compute_relative_path, DEFAULT_ASSET_FOLDER};
pub use remote::normalize_remote_url;
pub use types::{LinkError, RelativeFilePath, RemoteUrl, ResolvedUrl};
pub use url::build_url;
