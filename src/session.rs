//! Session Storage
//!
//! The bearer token lives in `localStorage`, written by the login flow.

/// localStorage key holding the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Current bearer token, read on every request
pub fn access_token() -> Option<String> {
    local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}
