//! Unique test data, so parallel tests never collide on names.

use ulid::Ulid;

/// A unique string of the form `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique player name. Usernames only need to be unique within one game,
/// but unique-everywhere keeps cross-test log output unambiguous.
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}
