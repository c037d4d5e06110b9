use chrono::{DateTime, Utc};
use flavorshare_shared::constants::{MAX_RATING, MIN_RATING};
use flavorshare_shared::{ActionError, Recipe, RecipeDraft, RecipeId, Review, ViewState};

use crate::state::{AppState, Effect, Outcome};

impl AppState {
    /// Post a new recipe authored by the signed-in user.
    ///
    /// The recipe goes to the front of the collection and the view returns
    /// to the feed.
    pub fn create_recipe(
        &mut self,
        draft: RecipeDraft,
        now: DateTime<Utc>,
    ) -> Result<Outcome<RecipeId>, ActionError> {
        let author = self
            .current_user
            .as_ref()
            .ok_or(ActionError::AuthenticationRequired)?;

        let recipe = Recipe::from_draft(draft, author, now);
        let id = recipe.id.clone();
        self.recipes.insert(0, recipe);
        self.view = ViewState::Home;

        Ok(Outcome::new(id).with(Effect::SaveRecipes))
    }

    /// Add a review by the signed-in user to `recipe_id`.
    ///
    /// The comment must contain something besides whitespace and the rating
    /// must be 1 to 5. Returns the updated recipe.
    pub fn add_review(
        &mut self,
        recipe_id: &RecipeId,
        rating: u8,
        comment: &str,
        now: DateTime<Utc>,
    ) -> Result<Outcome<Recipe>, ActionError> {
        let reviewer = self
            .current_user
            .as_ref()
            .ok_or(ActionError::AuthenticationRequired)?;
        if comment.trim().is_empty() {
            return Err(ActionError::EmptyComment);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ActionError::InvalidRating(rating));
        }
        let slot = self
            .recipes
            .iter()
            .position(|r| &r.id == recipe_id)
            .ok_or_else(|| ActionError::RecipeNotFound(recipe_id.clone()))?;

        let review = Review::new(reviewer, rating, comment.to_string(), now);
        let updated = self.recipes[slot].with_review(review);
        self.recipes[slot] = updated.clone();

        Ok(Outcome::new(updated).with(Effect::SaveRecipes))
    }
}

#[cfg(test)]
mod tests {
    use flavorshare_shared::ranking::average_rating;

    use super::*;
    use crate::reducers::fixtures::{at, draft, logged_in};

    #[test]
    fn test_create_requires_session() {
        let mut state = AppState::default();
        let err = state.create_recipe(draft("Soup", "Boil"), at(1)).unwrap_err();
        assert_eq!(err, ActionError::AuthenticationRequired);
        assert!(state.recipes.is_empty());
    }

    #[test]
    fn test_create_prepends_and_stamps_author() {
        let mut state = logged_in();
        state.view = ViewState::Create;

        let first = state.create_recipe(draft("First", "a"), at(100)).unwrap();
        let second = state.create_recipe(draft("Second", "b"), at(200)).unwrap();

        assert_eq!(state.recipes.len(), 2);
        assert_eq!(state.recipes[0].id, second.value);
        assert_eq!(state.recipes[1].id, first.value);
        assert_eq!(state.recipes[0].author_name, "cook");
        assert_eq!(state.recipes[0].created_at, at(200));
        assert_eq!(state.view, ViewState::Home);
        assert_eq!(second.effects, [Effect::SaveRecipes]);
    }

    #[test]
    fn test_add_review_prepends_and_returns_updated() {
        let mut state = logged_in();
        let id = state.create_recipe(draft("Stew", "Simmer"), at(1)).unwrap().value;

        state.add_review(&id, 5, "Great", at(2)).unwrap();
        state.add_review(&id, 3, "Fine", at(3)).unwrap();
        let outcome = state.add_review(&id, 4, "Good", at(4)).unwrap();

        let recipe = state.recipe(&id).unwrap();
        assert_eq!(&outcome.value, recipe);
        assert_eq!(recipe.reviews[0].comment, "Good");
        assert_eq!(recipe.reviews[0].username, "cook");
        assert_eq!(average_rating(recipe), 4.0);
        assert_eq!(outcome.effects, [Effect::SaveRecipes]);
    }

    #[test]
    fn test_blank_comment_does_not_touch_reviews() {
        let mut state = logged_in();
        let id = state.create_recipe(draft("Stew", "Simmer"), at(1)).unwrap().value;

        for comment in ["", "   ", "\n\t"] {
            assert_eq!(
                state.add_review(&id, 5, comment, at(2)).unwrap_err(),
                ActionError::EmptyComment
            );
        }
        assert!(state.recipe(&id).unwrap().reviews.is_empty());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut state = logged_in();
        let id = state.create_recipe(draft("Stew", "Simmer"), at(1)).unwrap().value;
        assert_eq!(
            state.add_review(&id, 0, "hm", at(2)).unwrap_err(),
            ActionError::InvalidRating(0)
        );
        assert_eq!(
            state.add_review(&id, 6, "hm", at(2)).unwrap_err(),
            ActionError::InvalidRating(6)
        );
    }

    #[test]
    fn test_review_requires_session_and_recipe() {
        let mut state = logged_in();
        let id = state.create_recipe(draft("Stew", "Simmer"), at(1)).unwrap().value;
        let missing = RecipeId::from("nope");
        assert_eq!(
            state.add_review(&missing, 5, "hi", at(2)).unwrap_err(),
            ActionError::RecipeNotFound(missing)
        );

        state.logout();
        assert_eq!(
            state.add_review(&id, 5, "hi", at(2)).unwrap_err(),
            ActionError::AuthenticationRequired
        );
    }

    #[test]
    fn test_review_leaves_other_recipes_alone() {
        let mut state = logged_in();
        let a = state.create_recipe(draft("A", "x"), at(1)).unwrap().value;
        let b = state.create_recipe(draft("B", "y"), at(2)).unwrap().value;
        let before = state.recipe(&a).cloned();

        state.add_review(&b, 2, "meh", at(3)).unwrap();
        assert_eq!(state.recipe(&a).cloned(), before);
    }
}
