use flavorshare_shared::Theme;
use tracing::info;

use super::Client;
use crate::error::Result;

impl Client {
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.dispatch(|state| Ok(state.toggle_theme()))?;
        info!(theme = theme.as_str(), "theme changed");
        Ok(theme)
    }
}
