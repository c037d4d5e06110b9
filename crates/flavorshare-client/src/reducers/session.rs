use flavorshare_shared::identity::{derive_user_id, username_from_email};
use flavorshare_shared::{ActionError, User, ViewState};

use super::require;
use crate::state::{AppState, Effect, Outcome};

impl AppState {
    /// Sign in as `email`.
    ///
    /// The password is only checked for presence; there are no stored
    /// credentials. The username is the local part of the email.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Outcome<User>, ActionError> {
        require("email", email)?;
        require("password", password)?;

        let user = User {
            id: derive_user_id(email),
            username: username_from_email(email).to_string(),
            email: email.to_string(),
        };

        self.start_session(user.clone());
        // favorites are read before anything is written, so a failed write
        // can never leave an empty set standing in for the stored one
        Ok(Outcome::new(user)
            .with(Effect::LoadFavorites)
            .with(Effect::SaveCurrentUser))
    }

    /// Register and sign in.
    ///
    /// Nothing checks whether the email is already registered; the same email
    /// always maps to the same id. Favorites start empty, and the empty set is
    /// written over any favorites stored under that id.
    pub fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Outcome<User>, ActionError> {
        require("username", username)?;
        require("email", email)?;
        require("password", password)?;

        let user = User {
            id: derive_user_id(email),
            username: username.to_string(),
            email: email.to_string(),
        };

        self.start_session(user.clone());
        Ok(Outcome::new(user)
            .with(Effect::SaveCurrentUser)
            .with(Effect::SaveFavorites))
    }

    /// Sign out, returning the user who was signed in.
    ///
    /// The stored favorites of that user stay in place for the next login.
    pub fn logout(&mut self) -> Outcome<Option<User>> {
        let previous = self.current_user.take();
        self.favorites.clear();
        self.view = ViewState::Home;
        Outcome::new(previous).with(Effect::ClearCurrentUser)
    }

    fn start_session(&mut self, user: User) {
        self.current_user = Some(user);
        self.favorites.clear();
        self.view = ViewState::Home;
    }
}

#[cfg(test)]
mod tests {
    use flavorshare_shared::RecipeId;

    use super::*;

    #[test]
    fn test_login_derives_identity() {
        let mut state = AppState::default();
        let outcome = state.login("alice@example.com", "pw").unwrap();

        assert_eq!(outcome.value.id.as_str(), "YWxpY2VAZX");
        assert_eq!(outcome.value.username, "alice");
        assert_eq!(state.current_user, Some(outcome.value));
        assert_eq!(
            outcome.effects,
            [Effect::LoadFavorites, Effect::SaveCurrentUser]
        );
    }

    #[test]
    fn test_login_is_deterministic() {
        let mut a = AppState::default();
        let mut b = AppState::default();
        let first = a.login("same@example.com", "one").unwrap().value;
        let second = b.login("same@example.com", "two").unwrap().value;
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let mut state = AppState::default();
        assert_eq!(
            state.login("", "pw").unwrap_err(),
            ActionError::MissingField("email")
        );
        assert_eq!(
            state.login("a@b.c", "").unwrap_err(),
            ActionError::MissingField("password")
        );
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_signup_with_missing_field_leaves_session_unchanged() {
        let mut state = AppState::default();
        state.login("keep@example.com", "pw").unwrap();
        let before = state.current_user.clone();

        for (username, email, password) in [
            ("", "new@example.com", "pw"),
            ("new", "", "pw"),
            ("new", "new@example.com", ""),
        ] {
            assert!(state.signup(username, email, password).is_err());
            assert_eq!(state.current_user, before);
        }
    }

    #[test]
    fn test_signup_uses_given_username_and_resets_favorites() {
        let mut state = AppState::default();
        state.login("chef@example.com", "pw").unwrap();
        state.favorites.insert(RecipeId::from("r1"));
        state.view = ViewState::Signup;

        let outcome = state.signup("Gordon", "chef@example.com", "pw").unwrap();

        assert_eq!(outcome.value.username, "Gordon");
        assert!(state.favorites.is_empty());
        assert_eq!(state.view, ViewState::Home);
        assert_eq!(
            outcome.effects,
            [Effect::SaveCurrentUser, Effect::SaveFavorites]
        );
    }

    #[test]
    fn test_signup_same_email_collides() {
        let mut state = AppState::default();
        let a = state.signup("one", "dup@example.com", "pw").unwrap().value;
        let b = state.signup("two", "dup@example.com", "pw").unwrap().value;
        assert_eq!(a.id, b.id);
        assert_ne!(a.username, b.username);
    }

    #[test]
    fn test_logout_clears_session_and_favorites() {
        let mut state = AppState::default();
        state.login("a@example.com", "pw").unwrap();
        state.favorites.insert(RecipeId::from("r1"));
        state.view = ViewState::Favorites;

        let outcome = state.logout();

        assert_eq!(outcome.value.map(|u| u.username), Some("a".to_string()));
        assert!(state.current_user.is_none());
        assert!(state.favorites.is_empty());
        assert_eq!(state.view, ViewState::Home);
        assert_eq!(outcome.effects, [Effect::ClearCurrentUser]);
    }
}
