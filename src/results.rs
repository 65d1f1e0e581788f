use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// A heading found on a page, with its tags stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Heading level, 1 through 6
    pub level: u8,

    /// Plain text of the heading
    pub text: String,
}

impl HeadingRecord {
    /// Create a new heading record
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Headings and image sources extracted from one page, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub headings: Vec<HeadingRecord>,
    pub images: Vec<String>,
}

impl PageRecord {
    /// Create a new page record
    pub fn new(headings: Vec<HeadingRecord>, images: Vec<String>) -> Self {
        Self { headings, images }
    }

    /// A page with neither headings nor images is left out of a structure
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.images.is_empty()
    }
}

/// A numbered page inside a [`Structure`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// 1-based position of the page among all split segments
    pub number: usize,

    pub record: PageRecord,
}

impl PageEntry {
    /// Label such as "Page 3"
    pub fn label(&self) -> String {
        page_label(self.number)
    }
}

impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("PageEntry", 4)?;
        entry.serialize_field("label", &self.label())?;
        entry.serialize_field("number", &self.number)?;
        entry.serialize_field("headings", &self.record.headings)?;
        entry.serialize_field("images", &self.record.images)?;
        entry.end()
    }
}

/// Ordered page label -> record mapping for one document.
///
/// Entries keep the order in which they were inserted, which is the page
/// order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Structure {
    pages: Vec<PageEntry>,
}

impl Structure {
    /// Create an empty structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page under the label "Page {number}"
    pub fn insert(&mut self, number: usize, record: PageRecord) {
        self.pages.push(PageEntry { number, record });
    }

    /// Look up a page by label
    pub fn get(&self, label: &str) -> Option<&PageRecord> {
        self.pages
            .iter()
            .find(|entry| entry.label() == label)
            .map(|entry| &entry.record)
    }

    /// Iterate over pages in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter()
    }

    /// Labels of all kept pages, in order
    pub fn labels(&self) -> Vec<String> {
        self.pages.iter().map(PageEntry::label).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of headings across all pages
    pub fn heading_count(&self) -> usize {
        self.pages.iter().map(|e| e.record.headings.len()).sum()
    }

    /// Total number of image references across all pages
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|e| e.record.images.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Structure {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Label used for the page at the given 1-based position
pub fn page_label(number: usize) -> String {
    format!("Page {}", number)
}
