use flavorshare_shared::User;
use tracing::info;

use super::Client;
use crate::error::Result;

impl Client {
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.dispatch(|state| state.login(email, password))?;
        info!(
            user_id = %user.id,
            favorites = self.state.favorites.len(),
            "logged in"
        );
        Ok(user)
    }

    pub fn signup(&mut self, username: &str, email: &str, password: &str) -> Result<User> {
        let user = self.dispatch(|state| state.signup(username, email, password))?;
        info!(user_id = %user.id, username = %user.username, "signed up");
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<Option<User>> {
        let previous = self.dispatch(|state| Ok(state.logout()))?;
        if let Some(user) = &previous {
            info!(user_id = %user.id, "logged out");
        }
        Ok(previous)
    }
}
