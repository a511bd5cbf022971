//! Identifier and path helpers.

/// Whether an identifier is exported (starts with an uppercase letter).
///
/// # Examples
/// ```
/// use apitypings_core::utils::is_exported;
/// assert!(is_exported("User"));
/// assert!(!is_exported("user"));
/// assert!(!is_exported("_User"));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Final component of a slash- or backslash-separated path.
///
/// # Examples
/// ```
/// use apitypings_core::utils::base_name;
/// assert_eq!(base_name("/src/codersdk/users.go"), "users.go");
/// assert_eq!(base_name("users.go"), "users.go");
/// ```
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
