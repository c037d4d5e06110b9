use flavorshare_shared::steps::StepMove;
use flavorshare_shared::{RecipeId, ViewState};
use tracing::debug;

use super::Client;
use crate::error::Result;

impl Client {
    pub fn navigate(&mut self, view: ViewState) {
        self.state.navigate(view);
        debug!(?view, "navigated");
    }

    pub fn open_recipe(&mut self, recipe_id: &RecipeId) -> Result<()> {
        self.dispatch(|state| state.open_recipe(recipe_id))?;
        debug!(recipe_id = %recipe_id, "recipe opened");
        Ok(())
    }

    pub fn toggle_guided_mode(&mut self) -> bool {
        self.state.toggle_guided_mode().value
    }

    pub fn next_step(&mut self) -> StepMove {
        let step = self.state.next_step().value;
        debug!(?step, "next step");
        step
    }

    pub fn previous_step(&mut self) -> usize {
        self.state.previous_step().value
    }
}

#[cfg(test)]
mod tests {
    use flavorshare_shared::{RecipeDraft, Theme};
    use flavorshare_store::Database;

    use super::*;

    #[test]
    fn test_cook_along() {
        let mut client =
            Client::with_database(Database::open_in_memory().unwrap(), Theme::Dark).unwrap();
        client.login("lee@example.com", "pw").unwrap();
        let id = client
            .create_recipe(RecipeDraft {
                title: "Tea".to_string(),
                instructions: "1) Boil water\n\nStep 2: Steep".to_string(),
                ..Default::default()
            })
            .unwrap();

        client.open_recipe(&id).unwrap();
        assert_eq!(client.state().selected_steps(), ["Boil water", "Steep"]);
        assert!(client.toggle_guided_mode());
        assert_eq!(client.previous_step(), 0);
        assert_eq!(client.next_step(), StepMove::Advanced(1));
        assert_eq!(client.state().cursor.progress(2), Some((2, 2)));
        assert_eq!(client.next_step(), StepMove::Finished);
        assert!(!client.state().cursor.is_guided());
    }
}
