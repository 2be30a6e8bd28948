/// Get environment variable with ESSENTIALS_ prefix, falling back to unprefixed version
///
/// Checks `ESSENTIALS_{key}` first, then `{key}`.
///
/// # Examples
///
/// ```rust
/// use web_essentials::utils::get_env_with_prefix;
///
/// // Checks ESSENTIALS_STATIC_ROOT first, then STATIC_ROOT
/// let root = get_env_with_prefix("STATIC_ROOT");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("ESSENTIALS_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}
