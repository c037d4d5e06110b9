//! Commands invoked by the presentation layer.
//!
//! [`Client`] owns the [`Database`] and the [`AppState`].  Each command runs
//! one reducer and then persists the effects it reported before returning,
//! so the store is up to date when the next command starts.  A command whose
//! effects cannot be persisted leaves the state as it found it.  Sub-modules
//! group the commands by domain.

pub mod favorites;
pub mod navigation;
pub mod recipes;
pub mod session;
pub mod settings;

use flavorshare_shared::{ActionError, Theme};
use flavorshare_store::Database;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::state::{AppState, Effect, Outcome};

/// Application handle: state plus the store it is mirrored to.
pub struct Client {
    db: Database,
    state: AppState,
}

impl Client {
    /// Open the configured database and hydrate state from it.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let db = match &config.db_path {
            Some(path) => Database::open_at(path)?,
            None => Database::new()?,
        };
        Self::with_database(db, config.default_theme)
    }

    /// Hydrate state from an already open database.
    pub fn with_database(db: Database, default_theme: Theme) -> Result<Self> {
        let recipes = db.load_recipes()?;
        let current_user = db.load_current_user()?;
        let favorites = match &current_user {
            Some(user) => db.load_favorites(&user.id)?,
            None => Default::default(),
        };
        let theme = db.load_theme()?.unwrap_or(default_theme);

        info!(
            recipes = recipes.len(),
            logged_in = current_user.is_some(),
            favorites = favorites.len(),
            theme = theme.as_str(),
            "state hydrated"
        );

        Ok(Self {
            db,
            state: AppState {
                current_user,
                recipes,
                favorites,
                theme,
                ..AppState::default()
            },
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run a reducer and persist its effects.
    ///
    /// If persisting fails the in-memory state is put back to what it was
    /// before the reducer ran, so state never claims more than was read from
    /// or written to the store.
    fn dispatch<T>(
        &mut self,
        reducer: impl FnOnce(&mut AppState) -> std::result::Result<Outcome<T>, ActionError>,
    ) -> Result<T> {
        let snapshot = self.state.clone();
        let outcome = reducer(&mut self.state)?;
        match self.apply(outcome) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(error = %e, "persisting failed, restoring previous state");
                self.state = snapshot;
                Err(e)
            }
        }
    }

    /// Persist the effects of a reducer call and hand back its value.
    fn apply<T>(&mut self, outcome: Outcome<T>) -> Result<T> {
        for effect in &outcome.effects {
            debug!(?effect, "applying effect");
            match effect {
                Effect::SaveRecipes => self.db.save_recipes(&self.state.recipes)?,
                Effect::SaveCurrentUser => {
                    if let Some(user) = &self.state.current_user {
                        self.db.save_current_user(user)?;
                    }
                }
                Effect::ClearCurrentUser => {
                    self.db.clear_current_user()?;
                }
                Effect::LoadFavorites => {
                    if let Some(user) = &self.state.current_user {
                        self.state.favorites = self.db.load_favorites(&user.id)?;
                    }
                }
                Effect::SaveFavorites => {
                    if let Some(user) = &self.state.current_user {
                        self.db.save_favorites(&user.id, &self.state.favorites)?;
                    }
                }
                Effect::SaveTheme => self.db.save_theme(self.state.theme)?,
            }
        }
        Ok(outcome.value)
    }
}
