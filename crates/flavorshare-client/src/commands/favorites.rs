use flavorshare_shared::{ActionError, RecipeId, ViewState};
use tracing::{info, warn};

use super::Client;
use crate::error::{ClientError, Result};

impl Client {
    /// Toggle a favorite; returns whether the recipe is now a favorite.
    ///
    /// Without a session the view switches to the login screen and the
    /// rejection is returned.
    pub fn toggle_favorite(&mut self, recipe_id: &RecipeId) -> Result<bool> {
        let favorite = match self.dispatch(|state| state.toggle_favorite(recipe_id)) {
            Ok(favorite) => favorite,
            Err(ClientError::Action(ActionError::AuthenticationRequired)) => {
                warn!(recipe_id = %recipe_id, "favorite toggled while logged out");
                self.state.navigate(ViewState::Login);
                return Err(ActionError::AuthenticationRequired.into());
            }
            Err(e) => return Err(e),
        };
        info!(recipe_id = %recipe_id, favorite, "favorite toggled");
        Ok(favorite)
    }
}
