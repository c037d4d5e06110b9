use flavorshare_shared::Theme;

use crate::state::{AppState, Effect, Outcome};

impl AppState {
    /// Flip between dark and light, returning the new theme.
    pub fn toggle_theme(&mut self) -> Outcome<Theme> {
        self.theme = self.theme.toggled();
        Outcome::new(self.theme).with(Effect::SaveTheme)
    }
}
