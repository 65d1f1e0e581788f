use crate::config::OutlineConfig;
use crate::error::{Error, Result};
use crate::filter::HeadingFilter;
use crate::pages;
use crate::parsers;
use crate::results::Structure;
use std::fs;
use std::path::Path;

/// Builds a [`Structure`] from the text of an HTML document
#[derive(Debug)]
pub struct StructureExtractor {
    markers: Vec<String>,
    filter: HeadingFilter,
}

impl Default for StructureExtractor {
    fn default() -> Self {
        Self {
            markers: pages::default_markers(),
            filter: HeadingFilter::default(),
        }
    }
}

impl StructureExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &OutlineConfig) -> Result<Self> {
        Ok(Self {
            markers: config.effective_markers(),
            filter: HeadingFilter::new(config.headings.clone())?,
        })
    }

    /// Extract the page structure of a document.
    ///
    /// Pages without any kept heading or image are left out, but keep their
    /// number, so labels can have gaps.
    pub fn extract(&self, content: &str) -> Structure {
        let mut structure = Structure::new();

        for segment in pages::split_pages(content, &self.markers) {
            let record = parsers::parse(segment.content, &self.filter);
            ::log::debug!(
                "Page {}: {} headings, {} images",
                segment.number,
                record.headings.len(),
                record.images.len()
            );
            if !record.is_empty() {
                structure.insert(segment.number, record);
            }
        }

        structure
    }

    /// Read a whole file and extract its structure.
    ///
    /// Line endings are normalized to `\n` before splitting.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Structure> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let structure = self.extract(&normalize_newlines(&content));
        ::log::info!(
            "Extracted {} pages ({} headings, {} images) from {}",
            structure.len(),
            structure.heading_count(),
            structure.image_count(),
            path.display()
        );
        Ok(structure)
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Extract a structure with the default markers and heading filter
pub fn extract_structure(content: &str) -> Structure {
    StructureExtractor::default().extract(content)
}
