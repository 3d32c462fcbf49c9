//! Theme and feature-flag settings, plus the settings form.
//!
//! Only the theme and the two feature flags are ever persisted. The API keys
//! collected by the form are validated and then dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, validate_settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Saved preference wins; otherwise the system preference picks dark.
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Self {
        match saved {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Persisted feature toggles. Serialized as
/// `{"useVoiceCloning":bool,"useDreamImages":bool}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default)]
    pub use_voice_cloning: bool,
    #[serde(default)]
    pub use_dream_images: bool,
}

impl FeatureFlags {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Everything the settings page collects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub openai_api_key: String,
    pub elevenlabs_api_key: Option<String>,
    pub pinecone_api_key: Option<String>,
    pub flags: FeatureFlags,
}

impl SettingsForm {
    /// Validate and return the part of the form that gets saved.
    pub fn submit(&self) -> Result<FeatureFlags, ValidationErrors> {
        validate_settings(self)?;
        Ok(self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_resolve() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_flags_wire_format() {
        let flags = FeatureFlags {
            use_voice_cloning: true,
            use_dream_images: false,
        };
        assert_eq!(
            flags.to_json().unwrap(),
            r#"{"useVoiceCloning":true,"useDreamImages":false}"#
        );
    }

    #[test]
    fn test_flags_missing_fields_default_false() {
        let flags = FeatureFlags::from_json(r#"{"useDreamImages":true}"#).unwrap();
        assert!(!flags.use_voice_cloning);
        assert!(flags.use_dream_images);
    }

    #[test]
    fn test_submit_drops_api_keys() {
        let form = SettingsForm {
            openai_api_key: "sk-secret".to_string(),
            elevenlabs_api_key: Some("el-secret".to_string()),
            pinecone_api_key: None,
            flags: FeatureFlags {
                use_voice_cloning: true,
                use_dream_images: true,
            },
        };
        let saved = form.submit().unwrap();
        let json = saved.to_json().unwrap();
        assert!(!json.contains("secret"));
        assert!(saved.use_voice_cloning && saved.use_dream_images);
    }

    #[test]
    fn test_submit_rejects_missing_key() {
        assert!(SettingsForm::default().submit().is_err());
    }
}
