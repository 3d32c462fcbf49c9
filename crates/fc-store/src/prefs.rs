use std::path::{Path, PathBuf};
use std::{env, fs};

use fc_core::{FeatureFlags, Theme};

use crate::error::{Result, StoreError};
use crate::store::Store;

/// Key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Key holding the JSON-encoded [`FeatureFlags`].
pub const SETTINGS_KEY: &str = "settings";

const DB_FILE: &str = "preferences.db";

/// Default base directory for all ForgeChain storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".forgechain")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Process-wide preferences: the theme and the feature flags.
///
/// Loaded once at startup; every setter writes through to the store
/// immediately. Nothing else in the process reads the store directly.
///
/// Layout:
/// ```text
/// ~/.forgechain/
/// ├── config.toml
/// └── preferences.db
/// ```
pub struct Preferences {
    store: Store,
    saved_theme: Option<Theme>,
    prefers_dark: bool,
    features: FeatureFlags,
}

impl Preferences {
    /// Open (creating if needed) the preference database under `base_dir`
    /// and load both keys.
    pub fn open(base_dir: Option<&Path>, prefers_dark: bool) -> Result<Self> {
        let base = base_dir.map(PathBuf::from).unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base).map_err(|e| {
            StoreError::InvalidData(format!("failed to create {}: {e}", base.display()))
        })?;
        let store = Store::open(&base.join(DB_FILE))?;
        Self::load(store, prefers_dark)
    }

    /// In-memory preferences (for testing).
    pub fn open_in_memory(prefers_dark: bool) -> Result<Self> {
        Self::load(Store::open_in_memory()?, prefers_dark)
    }

    /// Read both keys from `store`. Unreadable values are logged and treated
    /// as unset rather than failing startup.
    pub fn load(store: Store, prefers_dark: bool) -> Result<Self> {
        let saved_theme = match store.get(THEME_KEY)? {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("ignoring saved theme: {e}");
                    None
                }
            },
            None => None,
        };

        let features = match store.get(SETTINGS_KEY)? {
            Some(raw) => FeatureFlags::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring saved settings: {e}");
                FeatureFlags::default()
            }),
            None => FeatureFlags::default(),
        };

        tracing::debug!(
            theme = ?saved_theme,
            voice_cloning = features.use_voice_cloning,
            dream_images = features.use_dream_images,
            "preferences loaded"
        );

        Ok(Self {
            store,
            saved_theme,
            prefers_dark,
            features,
        })
    }

    /// Effective theme: the saved one, else the system preference.
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.saved_theme, self.prefers_dark)
    }

    /// Whether the theme came from storage rather than the system preference.
    pub fn theme_is_saved(&self) -> bool {
        self.saved_theme.is_some()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        if self.saved_theme == Some(theme) {
            return Ok(());
        }
        self.store.set(THEME_KEY, theme.as_str())?;
        self.saved_theme = Some(theme);
        tracing::info!("theme set to {theme}");
        Ok(())
    }

    /// Flip the effective theme and save it. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    pub fn set_features(&mut self, features: FeatureFlags) -> Result<()> {
        let json = features
            .to_json()
            .map_err(|e| StoreError::InvalidData(format!("settings encode failed: {e}")))?;
        self.store.set(SETTINGS_KEY, &json)?;
        self.features = features;
        tracing::info!("settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_empty() {
        let prefs = Preferences::open_in_memory(false).unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(!prefs.theme_is_saved());
        assert_eq!(prefs.features(), FeatureFlags::default());
    }

    #[test]
    fn test_system_preference_applies_when_unsaved() {
        let prefs = Preferences::open_in_memory(true).unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_saved_theme_beats_system_preference() {
        let store = Store::open_in_memory().unwrap();
        store.set(THEME_KEY, "light").unwrap();
        let prefs = Preferences::load(store, true).unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(prefs.theme_is_saved());
    }

    #[test]
    fn test_toggle_writes_through() {
        let mut prefs = Preferences::open_in_memory(false).unwrap();
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(prefs.store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(prefs.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_features_saved_as_json() {
        let mut prefs = Preferences::open_in_memory(false).unwrap();
        let flags = FeatureFlags {
            use_voice_cloning: true,
            use_dream_images: false,
        };
        prefs.set_features(flags).unwrap();
        assert_eq!(prefs.features(), flags);
        assert_eq!(
            prefs.store.get(SETTINGS_KEY).unwrap().as_deref(),
            Some(r#"{"useVoiceCloning":true,"useDreamImages":false}"#)
        );
    }

    #[test]
    fn test_garbage_values_treated_as_unset() {
        let store = Store::open_in_memory().unwrap();
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(SETTINGS_KEY, "not json").unwrap();
        let prefs = Preferences::load(store, false).unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(!prefs.theme_is_saved());
        assert_eq!(prefs.features(), FeatureFlags::default());
    }

    #[test]
    fn test_reopen_from_disk() {
        let dir = TempDir::new().unwrap();
        {
            let mut prefs = Preferences::open(Some(dir.path()), false).unwrap();
            prefs.set_theme(Theme::Dark).unwrap();
            prefs
                .set_features(FeatureFlags {
                    use_voice_cloning: false,
                    use_dream_images: true,
                })
                .unwrap();
        }
        let prefs = Preferences::open(Some(dir.path()), false).unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(prefs.features().use_dream_images);
        assert!(dir.path().join(DB_FILE).exists());
    }
}
