pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod pages;
pub mod parsers;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{DocumentSource, OutlineConfig};
pub use error::{Error, Result};
pub use extractor::{StructureExtractor, extract_structure};
pub use report::StructureReporter;
pub use results::{HeadingRecord, PageRecord, Structure};

use std::io::Write;

/// How document structures are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner plus indented outline per document
    #[default]
    Text,
    /// One pretty-printed JSON object per document
    Json,
}

/// Outline every configured document in order, writing reports to `out`.
///
/// Stops at the first document that cannot be read; sections already
/// written stay written.
pub fn run<W: Write>(config: &OutlineConfig, format: OutputFormat, out: &mut W) -> Result<()> {
    let extractor = StructureExtractor::new(config)?;
    let reporter = StructureReporter::new();

    for (index, doc) in config.documents.iter().enumerate() {
        ::log::info!("Outlining {} from {}", doc.label, doc.path.display());

        match format {
            OutputFormat::Text => {
                reporter.write_banner(out, index, &doc.label, &doc.path)?;
                let structure = extractor.extract_file(&doc.path)?;
                reporter.write_structure(out, &structure)?;
            }
            OutputFormat::Json => {
                let structure = extractor.extract_file(&doc.path)?;
                reporter.write_json(out, &doc.label, &doc.path, &structure)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
