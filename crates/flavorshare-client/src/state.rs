//! Application state shared by every command.
//!
//! [`AppState`] is plain data. It is only changed through the reducer methods
//! in [`crate::reducers`], each of which reports the persistence work it
//! needs as [`Effect`]s instead of touching the store itself.

use std::collections::BTreeSet;

use flavorshare_shared::ranking::{average_rating, visible_recipes};
use flavorshare_shared::steps::{parse_steps, StepCursor};
use flavorshare_shared::{Recipe, RecipeId, Theme, User, ViewState};
use serde::Serialize;

/// Central application state.
///
/// Holds the signed-in user, the recipe collection, that user's favorites and
/// the display state (theme, active view, selected recipe, guided cursor).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// `None` while logged out.
    pub current_user: Option<User>,

    /// Every posted recipe, most recently created first.
    pub recipes: Vec<Recipe>,

    /// Favorite recipe ids of `current_user`.  Always empty when logged out.
    pub favorites: BTreeSet<RecipeId>,

    pub theme: Theme,

    pub view: ViewState,

    /// Recipe shown in the details view.
    pub selected: Option<RecipeId>,

    /// Guided-mode position within the selected recipe's steps.
    pub cursor: StepCursor,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn is_favorite(&self, id: &RecipeId) -> bool {
        self.favorites.contains(id)
    }

    /// Recipes for the active view, best rated first.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        visible_recipes(&self.recipes, &self.favorites, self.view)
    }

    pub fn average_rating(&self, id: &RecipeId) -> Option<f64> {
        self.recipe(id).map(average_rating)
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.as_ref().and_then(|id| self.recipe(id))
    }

    /// Parsed instructions of the selected recipe (empty if none selected).
    pub fn selected_steps(&self) -> Vec<String> {
        self.selected_recipe()
            .map(|r| parse_steps(&r.instructions))
            .unwrap_or_default()
    }

    /// Step shown in guided mode, if guided mode is on.
    pub fn current_step(&self) -> Option<String> {
        if !self.cursor.is_guided() {
            return None;
        }
        self.selected_steps().into_iter().nth(self.cursor.index())
    }
}

/// Persistence work requested by a reducer.
///
/// Effects carry no data; the client reads what to write from the state
/// after the reducer has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the whole recipe collection.
    SaveRecipes,
    /// Write `current_user` as the session record.
    SaveCurrentUser,
    /// Delete the session record.
    ClearCurrentUser,
    /// Replace `favorites` with the stored set of the current user.
    LoadFavorites,
    /// Write `favorites` under the current user's key.
    SaveFavorites,
    /// Write the theme preference.
    SaveTheme,
}

/// Value produced by a reducer plus the effects it requires.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    pub value: T,
    pub effects: Vec<Effect>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            effects: Vec::new(),
        }
    }

    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl Outcome<()> {
    pub fn none() -> Self {
        Self::new(())
    }
}
