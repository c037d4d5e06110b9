//! Client configuration loaded from environment variables.
//!
//! Every setting has a default so the client starts with zero configuration.

use std::path::PathBuf;

use flavorshare_shared::Theme;

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Database file to open.
    /// Env: `FLAVORSHARE_DB_PATH`
    /// Default: `None` (platform data directory).
    pub db_path: Option<PathBuf>,

    /// Theme used until the user picks one.
    /// Env: `FLAVORSHARE_THEME` (`dark` / `light`)
    /// Default: `dark`
    pub default_theme: Theme,
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = var("FLAVORSHARE_DB_PATH") {
            if !path.is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Some(value) = var("FLAVORSHARE_THEME") {
            match value.parse::<Theme>() {
                Ok(theme) => config.default_theme = theme,
                Err(e) => {
                    tracing::warn!(value = %value, error = %e, "Invalid FLAVORSHARE_THEME, using default");
                }
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = from_map(&[]);
        assert_eq!(config.db_path, None);
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("FLAVORSHARE_DB_PATH", "/tmp/fs.db"),
            ("FLAVORSHARE_THEME", "light"),
        ]);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/fs.db")));
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_invalid_theme_ignored() {
        let config = from_map(&[("FLAVORSHARE_THEME", "neon"), ("FLAVORSHARE_DB_PATH", "")]);
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.db_path, None);
    }
}
