use crate::filter::HeadingFilter;
use crate::results::{HeadingRecord, PageRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening heading tag; the level is checked against the closing tag separately
static RE_HEADING_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h([1-6])[^>]*>").unwrap());

/// Any tag, used to flatten heading contents
static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Double-quoted src attribute inside an img tag
static RE_IMAGE_SRC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<img[^>]+src="([^"]+)""#).unwrap());

/// A heading element as found in the markup, before any cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading<'a> {
    pub level: u8,
    pub inner: &'a str,
}

/// Parses one page segment into its headings and image sources
pub fn parse(segment: &str, filter: &HeadingFilter) -> PageRecord {
    let headings = extract_headings(segment, filter);
    let images = extract_images(segment);

    ::log::debug!(
        "HTML parser found {} headings and {} images",
        headings.len(),
        images.len()
    );

    PageRecord::new(headings, images)
}

/// Extracts cleaned headings in source order, dropping those the filter rejects
pub fn extract_headings(segment: &str, filter: &HeadingFilter) -> Vec<HeadingRecord> {
    scan_headings(segment)
        .into_iter()
        .filter_map(|raw| {
            let text = strip_tags(raw.inner);
            let text = text.trim();
            if filter.should_keep(text) {
                Some(HeadingRecord::new(raw.level, text))
            } else {
                ::log::trace!("Dropping heading h{}: {:?}", raw.level, text);
                None
            }
        })
        .collect()
}

/// Finds `<hN ...>...</hN>` elements whose closing level matches the opening one.
///
/// The inner content is the shortest run up to the first matching closing tag
/// and may span lines. An opening tag with no matching close is skipped and
/// scanning resumes one byte past its `<`; after a match scanning resumes past
/// the closing tag.
pub fn scan_headings(segment: &str) -> Vec<RawHeading<'_>> {
    let mut headings = Vec::new();
    let mut pos = 0;

    while let Some(caps) = RE_HEADING_OPEN.captures_at(segment, pos) {
        // Both unwraps are guaranteed by the pattern
        let open = caps.get(0).unwrap();
        let level_str = caps.get(1).unwrap().as_str();
        let closing = format!("</h{}>", level_str);

        match segment[open.end()..].find(&closing) {
            Some(offset) => {
                let inner_end = open.end() + offset;
                headings.push(RawHeading {
                    level: level_str.as_bytes()[0] - b'0',
                    inner: &segment[open.end()..inner_end],
                });
                pos = inner_end + closing.len();
            }
            // '<' is one byte, so start + 1 is a char boundary
            None => pos = open.start() + 1,
        }
    }

    headings
}

/// Removes every `<...>` tag, leaving the text between them untouched
pub fn strip_tags(markup: &str) -> String {
    RE_TAG.replace_all(markup, "").into_owned()
}

/// Extracts `src` values of img tags in source order
pub fn extract_images(segment: &str) -> Vec<String> {
    RE_IMAGE_SRC
        .captures_iter(segment)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
