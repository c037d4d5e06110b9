//! Typed access to the persisted collections.
//!
//! | Key                  | Document                      |
//! |----------------------|-------------------------------|
//! | `recipes`            | JSON array of recipes         |
//! | `currentUser`        | JSON user, absent when logged out |
//! | `favorites_<userId>` | JSON array of recipe ids      |
//! | `theme`              | raw `dark` / `light`          |
//!
//! Loads never fail on malformed documents: they log and return the empty
//! default so a damaged entry cannot block startup.

use std::collections::BTreeSet;

use flavorshare_shared::constants::{CURRENT_USER_KEY, RECIPES_KEY, THEME_KEY};
use flavorshare_shared::{Recipe, RecipeId, Theme, User, UserId};

use crate::database::Database;
use crate::error::Result;

impl Database {
    // ------------------------------------------------------------------
    // Recipes
    // ------------------------------------------------------------------

    /// Load the full recipe collection in stored order.
    pub fn load_recipes(&self) -> Result<Vec<Recipe>> {
        self.load_or_default(RECIPES_KEY)
    }

    /// Replace the stored recipe collection.
    pub fn save_recipes(&self, recipes: &[Recipe]) -> Result<()> {
        self.set_json(RECIPES_KEY, recipes)
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn load_current_user(&self) -> Result<Option<User>> {
        self.load_or_default(CURRENT_USER_KEY)
    }

    pub fn save_current_user(&self, user: &User) -> Result<()> {
        self.set_json(CURRENT_USER_KEY, user)
    }

    /// Forget the signed-in user.  Favorites records are not touched.
    pub fn clear_current_user(&self) -> Result<bool> {
        self.remove(CURRENT_USER_KEY)
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    pub fn load_favorites(&self, user_id: &UserId) -> Result<BTreeSet<RecipeId>> {
        self.load_or_default(&user_id.favorites_key())
    }

    pub fn save_favorites(&self, user_id: &UserId, favorites: &BTreeSet<RecipeId>) -> Result<()> {
        self.set_json(&user_id.favorites_key(), favorites)
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Stored theme, or `None` if never chosen or unreadable.
    pub fn load_theme(&self) -> Result<Option<Theme>> {
        let Some(raw) = self.get(THEME_KEY)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                Ok(None)
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.set(THEME_KEY, theme.as_str())
    }
}
