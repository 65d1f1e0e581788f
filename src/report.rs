use crate::error::{Error, Result};
use crate::results::Structure;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Indentation unit for one heading level
const INDENT: &str = "  ";

/// Prints a [`Structure`] as an indented outline
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureReporter;

impl StructureReporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the outline of every page, in insertion order
    pub fn write_structure<W: Write>(&self, out: &mut W, structure: &Structure) -> io::Result<()> {
        for entry in structure {
            writeln!(out)?;
            writeln!(out, "{}:", entry.label())?;
            for heading in &entry.record.headings {
                let depth = usize::from(heading.level.saturating_sub(1));
                writeln!(out, "{}- {}", INDENT.repeat(depth), heading.text)?;
            }
            if !entry.record.images.is_empty() {
                writeln!(
                    out,
                    "{}Images: {} image(s)",
                    INDENT,
                    entry.record.images.len()
                )?;
            }
        }
        Ok(())
    }

    /// Render the outline into a string
    pub fn render(&self, structure: &Structure) -> String {
        let mut buf = Vec::new();
        self.write_structure(&mut buf, structure)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the banner that introduces a document's section.
    ///
    /// Banners after the first are separated from the previous section by two
    /// blank lines.
    pub fn write_banner<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        label: &str,
        path: &Path,
    ) -> io::Result<()> {
        if index > 0 {
            write!(out, "\n\n")?;
        }
        writeln!(out, "=== {} ({}) ===", label, display_name(path))
    }

    /// Write a document's structure as pretty-printed JSON
    pub fn write_json<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        path: &Path,
        structure: &Structure,
    ) -> Result<()> {
        let report = JsonReport {
            label,
            path: path.display().to_string(),
            pages: structure,
        };
        serde_json::to_writer_pretty(&mut *out, &report).map_err(Error::Json)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    label: &'a str,
    path: String,
    pages: &'a Structure,
}

/// File name shown in banners, or the full path when it has none
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
