//! View switching and the guided cooking cursor.  None of these persist.

use flavorshare_shared::steps::StepMove;
use flavorshare_shared::{ActionError, RecipeId, ViewState};

use crate::state::{AppState, Outcome};

impl AppState {
    pub fn navigate(&mut self, view: ViewState) -> Outcome {
        self.view = view;
        Outcome::none()
    }

    /// Show the details of `recipe_id`, starting from the full step list.
    pub fn open_recipe(&mut self, recipe_id: &RecipeId) -> Result<Outcome, ActionError> {
        if self.recipe(recipe_id).is_none() {
            return Err(ActionError::RecipeNotFound(recipe_id.clone()));
        }
        self.selected = Some(recipe_id.clone());
        self.cursor.reset();
        self.view = ViewState::Details;
        Ok(Outcome::none())
    }

    /// Switch between the step list and guided mode; returns whether guided
    /// mode is now on.
    pub fn toggle_guided_mode(&mut self) -> Outcome<bool> {
        self.cursor.toggle_guided();
        Outcome::new(self.cursor.is_guided())
    }

    pub fn next_step(&mut self) -> Outcome<StepMove> {
        let count = self.selected_steps().len();
        Outcome::new(self.cursor.next(count))
    }

    /// Returns the new step index.
    pub fn previous_step(&mut self) -> Outcome<usize> {
        let count = self.selected_steps().len();
        self.cursor.previous(count);
        Outcome::new(self.cursor.index())
    }
}
