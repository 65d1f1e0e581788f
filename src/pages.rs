/// Marker for print layouts that wrap each page in a paper-page container
pub const PAPER_PAGE_MARKER: &str = r#"<div class="paper-page">"#;

/// Looser marker for older layouts; also matches any class starting with "page"
pub const PAGE_MARKER: &str = r#"<div class="page"#;

/// Default markers, most specific first
pub fn default_markers() -> Vec<String> {
    vec![PAPER_PAGE_MARKER.to_string(), PAGE_MARKER.to_string()]
}

/// A slice of the document between one page marker and the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSegment<'a> {
    /// 1-based position among all segments after the leading piece
    pub number: usize,
    pub content: &'a str,
}

/// Picks the first marker the document contains.
///
/// The last marker is the fallback and is returned even when absent, in
/// which case splitting yields no pages. `None` only for an empty list.
pub fn select_marker<'m>(content: &str, markers: &'m [String]) -> Option<&'m str> {
    let (fallback, preferred) = markers.split_last()?;
    let marker = preferred
        .iter()
        .find(|m| content.contains(m.as_str()))
        .unwrap_or(fallback);
    Some(marker.as_str())
}

/// Splits on the given marker, dropping everything before the first occurrence
pub fn split_on<'a>(content: &'a str, marker: &str) -> Vec<PageSegment<'a>> {
    content
        .split(marker)
        .skip(1)
        .enumerate()
        .map(|(i, content)| PageSegment {
            number: i + 1,
            content,
        })
        .collect()
}

/// Splits a document into numbered page segments using the selected marker
pub fn split_pages<'a>(content: &'a str, markers: &[String]) -> Vec<PageSegment<'a>> {
    match select_marker(content, markers) {
        Some(marker) if !marker.is_empty() => {
            ::log::debug!("Splitting pages on marker {:?}", marker);
            split_on(content, marker)
        }
        _ => {
            ::log::warn!("No usable page marker configured");
            Vec::new()
        }
    }
}
