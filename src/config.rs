use crate::error::{Error, Result};
use crate::filter::HeadingFilterConfig;
use crate::pages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A document to outline, with the label shown in its banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    /// Banner label, e.g. "ARCHIVED FILE"
    pub label: String,

    /// Path to the HTML file, relative to the working directory
    pub path: PathBuf,
}

impl DocumentSource {
    pub fn new(label: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.to_string(),
            path: path.into(),
        }
    }
}

/// Configuration for extracting page outlines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Documents to process, in order
    #[serde(default = "default_documents")]
    pub documents: Vec<DocumentSource>,

    /// Page markers, most specific first; the last one is the fallback
    #[serde(default = "pages::default_markers")]
    pub page_markers: Vec<String>,

    /// Heading suppression rules
    #[serde(flatten)]
    pub headings: HeadingFilterConfig,
}

/// The archived variant followed by the current print-optimized document
fn default_documents() -> Vec<DocumentSource> {
    vec![
        DocumentSource::new("ARCHIVED FILE", "archives/5th-Attempt-With-Pictures.html"),
        DocumentSource::new("CURRENT FILE", "bmpoa-print-optimized.html"),
    ]
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
            page_markers: pages::default_markers(),
            headings: HeadingFilterConfig::default(),
        }
    }
}

impl OutlineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Markers to split on, falling back to the defaults when none are configured
    pub fn effective_markers(&self) -> Vec<String> {
        if self.page_markers.is_empty() {
            pages::default_markers()
        } else {
            self.page_markers.clone()
        }
    }
}
