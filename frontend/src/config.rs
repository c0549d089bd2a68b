use lazy_static::lazy_static;

/// Path every admin API route is mounted under.
pub const ADMIN_PATH: &str = "/admin/";

lazy_static! {
    /// Base URL for admin API requests.
    ///
    /// Resolved once from `NEXT_PUBLIC_API_BASE_URL` at build time. When the
    /// variable is unset or empty the frontend and backend share an origin and
    /// requests go to the relative `/admin/` path.
    pub static ref API_BASE_URL: String =
        resolve_api_base_url(option_env!("NEXT_PUBLIC_API_BASE_URL"));
}

/// Derives the admin base URL from an optional configured origin.
///
/// Trailing slashes on the configured value are stripped before `/admin/` is
/// appended, so `https://api.example.com///` becomes
/// `https://api.example.com/admin/`.
pub fn resolve_api_base_url(configured: Option<&str>) -> String {
    match configured {
        Some(base) if !base.is_empty() => {
            format!("{}{}", base.trim_end_matches('/'), ADMIN_PATH)
        }
        _ => ADMIN_PATH.to_string(),
    }
}

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        API_BASE_URL.clone()
    }

    /// True when requests use the relative path against the page's own origin
    pub fn is_same_origin() -> bool {
        API_BASE_URL.as_str() == ADMIN_PATH
    }
}
