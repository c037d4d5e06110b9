use chrono::Utc;
use flavorshare_shared::{Recipe, RecipeDraft, RecipeId};
use tracing::info;

use super::Client;
use crate::error::Result;

impl Client {
    /// Post a recipe as the signed-in user; returns its new id.
    pub fn create_recipe(&mut self, draft: RecipeDraft) -> Result<RecipeId> {
        let id = self.dispatch(|state| state.create_recipe(draft, Utc::now()))?;
        info!(recipe_id = %id, total = self.state.recipes.len(), "recipe created");
        Ok(id)
    }

    /// Review a recipe as the signed-in user; returns the updated recipe.
    pub fn add_review(&mut self, recipe_id: &RecipeId, rating: u8, comment: &str) -> Result<Recipe> {
        let recipe =
            self.dispatch(|state| state.add_review(recipe_id, rating, comment, Utc::now()))?;
        info!(
            recipe_id = %recipe.id,
            rating,
            reviews = recipe.reviews.len(),
            "review added"
        );
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use flavorshare_shared::{ActionError, Theme, ViewState};
    use flavorshare_store::Database;

    use super::*;
    use crate::error::ClientError;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            ingredients: vec!["rice".to_string(), "saffron".to_string()],
            instructions: "1. Toast rice\n2. Add stock\nStep 3: Rest".to_string(),
            cuisine: Some("Spanish".to_string()),
            cooking_time: Some(45),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_without_session_is_rejected() {
        let mut client =
            Client::with_database(Database::open_in_memory().unwrap(), Theme::Dark).unwrap();
        let err = client.create_recipe(draft("Paella")).unwrap_err();
        assert!(matches!(
            err.action(),
            Some(ActionError::AuthenticationRequired)
        ));
        assert!(client.database().load_recipes().unwrap().is_empty());
    }

    #[test]
    fn test_recipes_and_reviews_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flavorshare.db");

        let id = {
            let mut client =
                Client::with_database(Database::open_at(&path).unwrap(), Theme::Dark).unwrap();
            client.signup("Rosa", "rosa@example.com", "pw").unwrap();
            let id = client.create_recipe(draft("Paella")).unwrap();
            let updated = client.add_review(&id, 4, "Lovely crust").unwrap();
            assert_eq!(updated.reviews.len(), 1);
            id
        };

        let client =
            Client::with_database(Database::open_at(&path).unwrap(), Theme::Dark).unwrap();
        let recipe = client.state().recipe(&id).unwrap();
        assert_eq!(recipe.author_name, "Rosa");
        assert_eq!(recipe.cooking_time, Some(45));
        assert_eq!(recipe.reviews[0].rating, 4);
        assert_eq!(client.state().current_user.as_ref().unwrap().username, "Rosa");
        assert_eq!(client.state().view, ViewState::Home);
    }

    #[test]
    fn test_blank_review_is_not_persisted() {
        let mut client =
            Client::with_database(Database::open_in_memory().unwrap(), Theme::Dark).unwrap();
        client.login("rosa@example.com", "pw").unwrap();
        let id = client.create_recipe(draft("Paella")).unwrap();

        let err = client.add_review(&id, 5, "   ").unwrap_err();
        assert!(matches!(err, ClientError::Action(ActionError::EmptyComment)));
        let stored = client.database().load_recipes().unwrap();
        assert!(stored[0].reviews.is_empty());
    }
}
