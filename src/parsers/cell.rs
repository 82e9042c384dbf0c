use scraper::{ElementRef, Selector};

use crate::error::Result;
use crate::parsers::selector;

/// A way of reading a value out of a table cell.
pub trait CellLookup {
    fn lookup(&self, cell: ElementRef<'_>) -> Option<String>;
}

/// Reads the `alt` label of the first image inside the cell.
pub struct ImageLabel {
    img: Selector,
}

impl ImageLabel {
    pub fn new() -> Result<Self> {
        Ok(Self {
            img: selector("img")?,
        })
    }
}

impl CellLookup for ImageLabel {
    fn lookup(&self, cell: ElementRef<'_>) -> Option<String> {
        cell.select(&self.img)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .map(|alt| alt.trim().to_string())
            .filter(|alt| !alt.is_empty())
    }
}

/// Reads the concatenated text nodes of the cell.
pub struct TextContent;

impl CellLookup for TextContent {
    fn lookup(&self, cell: ElementRef<'_>) -> Option<String> {
        let text: String = cell.text().collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Tries each lookup in order and returns the first value found.
pub struct FirstMatch {
    lookups: Vec<Box<dyn CellLookup + Send + Sync>>,
}

impl FirstMatch {
    pub fn new(lookups: Vec<Box<dyn CellLookup + Send + Sync>>) -> Self {
        Self { lookups }
    }

    /// Image label first, cell text second
    pub fn weather() -> Result<Self> {
        Ok(Self::new(vec![
            Box::new(ImageLabel::new()?),
            Box::new(TextContent),
        ]))
    }

    /// Empty string when no lookup matches
    pub fn resolve(&self, cell: ElementRef<'_>) -> String {
        self.lookup(cell).unwrap_or_default()
    }
}

impl CellLookup for FirstMatch {
    fn lookup(&self, cell: ElementRef<'_>) -> Option<String> {
        self.lookups.iter().find_map(|lookup| lookup.lookup(cell))
    }
}
