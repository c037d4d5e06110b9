/// Application name
pub const APP_NAME: &str = "FlavorShare";

/// Persistent store key holding the full recipe collection
pub const RECIPES_KEY: &str = "recipes";

/// Persistent store key holding the signed-in user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Prefix of the per-user favorites key (`favorites_<userId>`)
pub const FAVORITES_KEY_PREFIX: &str = "favorites_";

/// Persistent store key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Number of base64 characters kept when deriving a user id from an email
pub const USER_ID_LEN: usize = 10;

/// Length of generated recipe and review tokens
pub const TOKEN_LEN: usize = 9;

/// Alphabet of generated tokens (lowercase base-36)
pub const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowest accepted review rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted review rating
pub const MAX_RATING: u8 = 5;

/// Build the store key for a user's favorites record.
pub fn favorites_key(user_id: &str) -> String {
    format!("{FAVORITES_KEY_PREFIX}{user_id}")
}
