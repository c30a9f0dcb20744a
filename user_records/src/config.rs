//! Central configuration for the user_records crate

use std::sync::LazyLock;

const DEFAULT_USERS_ROUTE_PREFIX: &str = "/api/users";

/// Route prefix under which the user endpoints are mounted
///
/// Default: "/api/users"
pub static USERS_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| route_prefix_from(std::env::var("USERS_ROUTE_PREFIX").ok()));

fn route_prefix_from(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_USERS_ROUTE_PREFIX.to_string())
}

/// Check that `prefix` can be used to nest a router
///
/// The prefix must start with '/' and must not be the root itself.
pub fn validate_route_prefix(prefix: &str) -> Result<(), String> {
    if !prefix.starts_with('/') || prefix.trim_end_matches('/').is_empty() {
        return Err(format!(
            "Invalid USERS_ROUTE_PREFIX '{prefix}': expected a non-root path starting with '/'"
        ));
    }
    Ok(())
}
