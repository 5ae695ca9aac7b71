//! Test helpers for generating unique test data
//!
//! ULID suffixes keep names distinct across tests that share a database file.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use scoreboard_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// let b = unique_str("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name, short enough for terminal output.
///
/// # Examples
/// ```
/// use scoreboard_test_support::unique_helpers::unique_player_name;
///
/// let name = unique_player_name("Alice");
/// assert!(name.starts_with("Alice-"));
/// assert_eq!(name.len(), "Alice-".len() + 8);
/// ```
pub fn unique_player_name(base: &str) -> String {
    let ulid = Ulid::new().to_string();
    format!("{}-{}", base, &ulid[ulid.len() - 8..])
}
