use flavorshare_shared::{ActionError, RecipeId};

use crate::state::{AppState, Effect, Outcome};

impl AppState {
    /// Add or remove `recipe_id` from the signed-in user's favorites.
    ///
    /// Returns whether the recipe is a favorite afterwards.
    pub fn toggle_favorite(&mut self, recipe_id: &RecipeId) -> Result<Outcome<bool>, ActionError> {
        if self.current_user.is_none() {
            return Err(ActionError::AuthenticationRequired);
        }

        let now_favorite = if self.favorites.remove(recipe_id) {
            false
        } else {
            self.favorites.insert(recipe_id.clone());
            true
        };

        Ok(Outcome::new(now_favorite).with(Effect::SaveFavorites))
    }
}
