// Re-export all API modules
pub mod bots;
pub mod resources;
pub mod utils;

use crate::config::Config;

pub use resources::AdminResource;

/// Joins an admin endpoint path onto `base`.
///
/// `base` always ends in `/`, so leading slashes on `path` are dropped to
/// avoid `//` in the result.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path.trim_start_matches('/'))
}

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    join_url(&base_url, path)
}
