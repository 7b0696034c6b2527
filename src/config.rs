//! Render configuration.
//!
//! One immutable value handed to the pipeline at construction time. The
//! library never reads the environment; `from_env` exists for the preview
//! binary.

use std::time::Duration;

use serde::Deserialize;

/// Default location of the profile document, relative to the page.
pub const DEFAULT_DATA_PATH: &str = "data/profile.json";

/// Skills shown per category before truncation.
pub const DEFAULT_SKILLS_VISIBLE: usize = 6;

/// Delay between expanding a card and scrolling it into view.
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub data_path: String,
    pub selectors: Selectors,
    pub skills_visible: usize,
    pub scroll_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            selectors: Selectors::default(),
            skills_visible: DEFAULT_SKILLS_VISIBLE,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

impl RenderConfig {
    /// Defaults, with `PROFILE_DATA` overriding the data path.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("PROFILE_DATA") {
            if !path.trim().is_empty() {
                config.data_path = path;
            }
        }
        config
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

/// Anchor selectors in the page template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub page_title: String,

    // Header & navigation
    pub site_logo: String,
    pub nav_links: String,

    // Hero banner
    pub profile_name: String,
    pub profile_title: String,
    pub profile_image: String,
    pub profile_intro: String,
    pub profile_background: String,
    pub profile_research: String,
    pub hero_metrics: String,
    pub cv_button: String,

    // Grids
    pub publications_grid: String,
    pub projects_grid: String,
    pub education_grid: String,
    pub skills_container: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            page_title: "title".into(),
            site_logo: "#header-logo".into(),
            nav_links: "#nav-links".into(),
            profile_name: "#profile-name".into(),
            profile_title: "#profile-title".into(),
            profile_image: "#profile-image".into(),
            profile_intro: "#profile-intro".into(),
            profile_background: "#profile-background".into(),
            profile_research: "#profile-research".into(),
            hero_metrics: "#hero-metrics".into(),
            cv_button: "#cv-button".into(),
            publications_grid: "#publications-grid".into(),
            projects_grid: "#projects-grid".into(),
            education_grid: "#education-grid".into(),
            skills_container: "#skills-container".into(),
        }
    }
}
