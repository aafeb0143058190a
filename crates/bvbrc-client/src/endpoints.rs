//! Endpoint URL builders

/// Query endpoint for a core: `{base_url}/{core}/`
///
/// Trailing slashes on the base URL are dropped first.
pub fn core_url(base_url: &str, core: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), core)
}
