//! Configuration to acknowledge site preferences as well as set defaults.
//!
//! Specifically, we try to find a casenav.toml, and if present we load settings from there.
//! This provides menu width, animation timings, the landing-page projects and, optionally, a
//! replacement for the built-in case-study taxonomy.

use crate::error::NavError;
use crate::index::NavigationIndex;
use crate::modal::{ModalOptions, Presentation};
use crate::section::Section;
use facet::Facet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// File looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "casenav.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// One `[[sections]]` table: a menu entry and its subsection tabs.
pub struct SectionConfig {
    /// Menu label.
    pub label: String,
    #[facet(default)]
    /// Subsection tab labels, possibly none.
    pub subsections: Vec<String>,
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// Site preferences loaded from casenav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 5)]
    /// Menu entries visible at once in the modal.
    pub visible_menu_items: usize,
    #[facet(default = 300)]
    /// Section/subsection transition length in milliseconds.
    pub transition_ms: u64,
    #[facet(default = 800)]
    /// Anchored opening length in milliseconds.
    pub expansion_ms: u64,
    #[facet(default = "Case Study".to_string())]
    /// Heading shown above the menu.
    pub title: String,
    #[facet(default = default_projects())]
    /// Cards on the landing page; each opens the case study.
    pub projects: Vec<String>,
    #[facet(default)]
    /// Taxonomy override; empty means the built-in case-study layout.
    pub sections: Vec<SectionConfig>,
    #[facet(default)]
    /// Where to write logs; the system temp dir is used when unset.
    pub log_file: Option<String>,
}

fn default_projects() -> Vec<String> {
    [
        "HealthRecord AI Assistant",
        "EduInsights Platform",
        "Verizon Project Hub",
        "Network Operations Center",
        "Customer Service Portal",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visible_menu_items: crate::menu::DEFAULT_VISIBLE,
            transition_ms: 300,
            expansion_ms: 800,
            title: "Case Study".to_string(),
            projects: default_projects(),
            sections: Vec::new(),
            log_file: None,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from casenav.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Config`] if the text is not a valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self, NavError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| NavError::Config(e.to_string()))
    }

    #[must_use]
    /// The configured taxonomy, or the built-in case-study layout when none is given.
    pub fn index(&self) -> NavigationIndex {
        let sections = self
            .sections
            .iter()
            .map(|s| Section::new(s.label.clone(), s.subsections.iter().cloned()))
            .collect();
        NavigationIndex::new(sections).unwrap_or_default()
    }

    #[must_use]
    /// Session tunables for the given layout.
    pub fn modal_options(&self, presentation: Presentation) -> ModalOptions {
        ModalOptions {
            visible_menu_items: self.visible_menu_items,
            transition: Duration::from_millis(self.transition_ms),
            expansion: Duration::from_millis(self.expansion_ms),
            presentation,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
