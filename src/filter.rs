use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for heading suppression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingFilterConfig {
    /// Heading texts dropped on exact, case-sensitive match
    #[serde(default = "default_ignored_headings")]
    pub ignored_headings: Vec<String>,

    /// Regex patterns for heading texts to drop
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Navigational headings that add noise to an outline
fn default_ignored_headings() -> Vec<String> {
    vec!["TABLE OF CONTENTS".to_string()]
}

impl Default for HeadingFilterConfig {
    fn default() -> Self {
        Self {
            ignored_headings: default_ignored_headings(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Decides which cleaned heading texts end up in an outline
#[derive(Debug)]
pub struct HeadingFilter {
    config: HeadingFilterConfig,
    exclude_regexes: Vec<Regex>,
}

impl Default for HeadingFilter {
    fn default() -> Self {
        Self {
            config: HeadingFilterConfig::default(),
            exclude_regexes: Vec::new(),
        }
    }
}

impl HeadingFilter {
    /// Create a new heading filter from configuration
    pub fn new(config: HeadingFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// Whether a heading with this (already stripped and trimmed) text is kept
    pub fn should_keep(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if self.config.ignored_headings.iter().any(|h| h == text) {
            return false;
        }

        !self.exclude_regexes.iter().any(|re| re.is_match(text))
    }
}
