//! Site configuration: viewport, reveal timings, thresholds and routes.
//!
//! Every field has a default, so an empty JSON object is a valid config and
//! a file only needs to name what it overrides:
//!
//! ```rust
//! use glint_site::config::SiteConfig;
//!
//! let cfg = SiteConfig::from_json_str(r#"{ "timings": { "service_cta_ms": 1200 } }"#).unwrap();
//! assert_eq!(cfg.timings.service_cta_ms, 1200);
//! assert_eq!(cfg.timings.service_icon_base_ms, 600);
//! ```

use std::path::{Path, PathBuf};

use glint_navigation::RouteTable;
use glint_ui::Stagger;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("threshold '{name}' must be within 0..=1, got {value}")]
    Threshold { name: &'static str, value: f32 },

    #[error("viewport must be at least 1x1, got {0}x{1}")]
    EmptyViewport(u32, u32),
}

/// Offsets (ms) from each trigger to the reveal it drives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    pub hero_tagline_ms: u64,
    pub hero_about_ms: u64,
    pub hero_services_ms: u64,
    pub hero_team_ms: u64,
    pub company_body_ms: u64,
    pub service_cards_ms: u64,
    pub service_icon_base_ms: u64,
    pub service_icon_step_ms: u64,
    pub service_cta_ms: u64,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            hero_tagline_ms: 200,
            hero_about_ms: 400,
            hero_services_ms: 800,
            hero_team_ms: 600,
            company_body_ms: 400,
            service_cards_ms: 400,
            service_icon_base_ms: 600,
            service_icon_step_ms: 100,
            service_cta_ms: 800,
        }
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

impl RevealTimings {
    /// Hero links in display order (About, Services, Team).
    pub fn hero_links(&self) -> Stagger {
        Stagger::offsets([
            ms(self.hero_about_ms),
            ms(self.hero_services_ms),
            ms(self.hero_team_ms),
        ])
    }

    pub fn hero_tagline(&self) -> Duration {
        ms(self.hero_tagline_ms)
    }

    pub fn company_body(&self) -> Duration {
        ms(self.company_body_ms)
    }

    pub fn service_cards(&self) -> Duration {
        ms(self.service_cards_ms)
    }

    pub fn service_icons(&self, count: usize) -> Stagger {
        Stagger::linear(
            ms(self.service_icon_base_ms),
            ms(self.service_icon_step_ms),
            count,
        )
    }

    pub fn service_cta(&self) -> Duration {
        ms(self.service_cta_ms)
    }
}

/// Visible-area fraction each observed block needs before it reveals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub hero: f32,
    pub company_header: f32,
    pub company_values: f32,
    pub services_heading: f32,
    pub services_grid: f32,
    pub services_cta: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hero: 0.3,
            company_header: 0.3,
            company_values: 0.3,
            services_heading: 0.3,
            services_grid: 0.1,
            services_cta: 0.1,
        }
    }
}

impl Thresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("hero", self.hero),
            ("company_header", self.company_header),
            ("company_values", self.company_values),
            ("services_heading", self.services_heading),
            ("services_grid", self.services_grid),
            ("services_cta", self.services_cta),
        ];
        for (name, value) in all {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Threshold { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Preview viewport in px.
    pub viewport: (u32, u32),
    pub timings: RevealTimings,
    pub thresholds: Thresholds,
    pub routes: RouteTable,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewport: (1280, 800),
            timings: RevealTimings::default(),
            thresholds: Thresholds::default(),
            routes: RouteTable::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&json)?;
        log::info!("loaded site config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.viewport;
        if w == 0 || h == 0 {
            return Err(ConfigError::EmptyViewport(w, h));
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_navigation::Destination;

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(
            SiteConfig::from_json_str("{}").ok(),
            Some(SiteConfig::default())
        );
    }

    #[test]
    fn default_offsets() {
        let t = RevealTimings::default();
        assert_eq!(t.hero_links().as_slice(), &[ms(400), ms(800), ms(600)]);
        assert_eq!(t.service_icons(3).as_slice(), &[ms(600), ms(700), ms(800)]);
        assert_eq!(t.company_body(), ms(400));
        assert_eq!(t.service_cta(), ms(800));
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let cfg = SiteConfig::from_json_str(
            r#"{
                "viewport": [390, 844],
                "thresholds": { "services_grid": 0.25 },
                "routes": { "team": "/people" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.viewport, (390, 844));
        assert_eq!(cfg.thresholds.services_grid, 0.25);
        assert_eq!(cfg.thresholds.hero, 0.3);
        assert_eq!(cfg.routes.path(Destination::Team), "/people");
        assert_eq!(cfg.routes.path(Destination::About), "/about");
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let err = SiteConfig::from_json_str(r#"{ "thresholds": { "hero": 1.5 } }"#);
        assert!(matches!(
            err,
            Err(ConfigError::Threshold { name: "hero", .. })
        ));
    }

    #[test]
    fn rejects_empty_viewport() {
        assert!(matches!(
            SiteConfig::from_json_str(r#"{ "viewport": [0, 800] }"#),
            Err(ConfigError::EmptyViewport(0, 800))
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            SiteConfig::from_json_str("{ viewport"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SiteConfig::load("/nonexistent/glint.json").err();
        assert!(matches!(err, Some(ConfigError::Io { .. })));
    }
}
