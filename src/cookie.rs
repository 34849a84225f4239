//! Cookie lookup over a `document.cookie` style string (`a=1; b=2`).

/// Value of cookie `name`, or an empty string when it is not set.
/// The first occurrence wins if the name appears more than once.
pub fn get_cookie(cookies: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .unwrap_or_default()
        .to_string()
}
