//! Site configuration.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no file at all) is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::typewriter::TypingConfig;

/// Top-level site configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: OwnerProfile,
    pub hero: HeroConfig,
    pub carousel: CarouselConfig,
    pub filter: FilterTiming,
    pub cv: CvConfig,
}

impl SiteConfig {
    /// Parse a JSON site file
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON site file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.carousel.interval_ms == 0 {
            return Err(CoreError::Config(
                "carousel.interval_ms must be greater than zero".to_string(),
            ));
        }
        let typing = &self.hero.typing;
        if typing.looping
            && typing.type_speed_ms == 0
            && typing.back_speed_ms == 0
            && typing.back_delay_ms == 0
        {
            return Err(CoreError::Config(
                "hero.typing needs a non-zero type, backspace or hold delay when looping"
                    .to_string(),
            ));
        }
        if self.owner.name.trim().is_empty() {
            return Err(CoreError::Config("owner.name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Who the portfolio belongs to; also feeds the placeholder CV
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerProfile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Web Developer".to_string(),
            email: "your.email@example.com".to_string(),
            phone: "+1 (234) 567-890".to_string(),
            location: "New York City, NY, USA".to_string(),
            website: "yourwebsite.com".to_string(),
        }
    }
}

/// Hero section: rotating titles under the owner's name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub titles: Vec<String>,
    pub typing: TypingConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            titles: ["Web Developer", "UX Designer", "Freelancer", "Digital Creator"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            typing: TypingConfig::default(),
        }
    }
}

/// Testimonial autoplay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

/// Delays of the two-phase portfolio filter transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTiming {
    /// From `display:block` to the fade-in
    pub reveal_delay_ms: u64,
    /// From the fade-out to `display:none`
    pub hide_delay_ms: u64,
}

impl FilterTiming {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

impl Default for FilterTiming {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 200,
            hide_delay_ms: 300,
        }
    }
}

/// Where the downloadable CV is expected to live
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    /// Path relative to the assets root, as linked from the page
    pub asset_path: String,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            asset_path: "assets/cv.pdf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.interval(), Duration::from_millis(5000));
        assert_eq!(config.filter.reveal_delay(), Duration::from_millis(200));
        assert_eq!(config.filter.hide_delay(), Duration::from_millis(300));
        assert_eq!(config.hero.titles.len(), 4);
    }

    #[test]
    fn partial_override() {
        let config =
            SiteConfig::from_json(r#"{"owner": {"name": "Ada Lovelace"}, "carousel": {"interval_ms": 8000}}"#)
                .unwrap();
        assert_eq!(config.owner.name, "Ada Lovelace");
        assert_eq!(config.owner.email, "your.email@example.com");
        assert_eq!(config.carousel.interval_ms, 8000);
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SiteConfig::from_json(r#"{"carousel": {"interval_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn zero_typing_delays_rejected() {
        let json = r#"{"hero": {"typing": {"type_speed_ms": 0, "back_speed_ms": 0, "back_delay_ms": 0}}}"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let once = r#"{"hero": {"typing": {"type_speed_ms": 0, "back_speed_ms": 0, "back_delay_ms": 0, "looping": false}}}"#;
        assert!(SiteConfig::from_json(once).is_ok());

        let typed = r#"{"hero": {"typing": {"type_speed_ms": 0, "back_speed_ms": 0, "back_delay_ms": 500}}}"#;
        assert!(SiteConfig::from_json(typed).is_ok());
    }

    #[test]
    fn malformed_json_rejected() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"cv": {"asset_path": "docs/resume.pdf"}}"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.cv.asset_path, "docs/resume.pdf");
    }
}
