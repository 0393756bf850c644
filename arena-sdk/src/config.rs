//! Build-time configuration and client constants.

/// local storage key of the bearer token
pub const TOKEN: &str = "jwt";

pub const AUTHORIZE_HEADER: &str = "Authorization";

/// quiet period before a search query is sent
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// refresh period of the online friends list
pub const ONLINE_POLL_MS: u32 = 30_000;

pub const SEARCH_LIMIT: u32 = 20;

pub const AVATAR_MAX_BYTES: u64 = 2 * 1024 * 1024;

pub const AVATAR_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Gateway origin, e.g. `https://arena.example.org`.
///
/// Set `API_BASE_URL` when building; left empty the client talks to the
/// origin it was served from.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL")
        .map(|base| base.trim_end_matches('/'))
        .unwrap_or("")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn avatar_url(user_id: i64) -> String {
    api_url(&format!("/api/user/{}/avatar", user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_keep_the_api_prefix() {
        assert!(api_url("/api/user/friends").ends_with("/api/user/friends"));
        assert!(avatar_url(42).ends_with("/api/user/42/avatar"));
        assert!(!api_base().ends_with('/'));
    }
}
