//! Book data model and TOML loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Error produced while loading or validating a book file.
#[derive(Debug, Error)]
pub enum BookError {
    /// The book file could not be read.
    #[error("failed to read book file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The book file is not valid TOML for the book schema.
    #[error("failed to parse book file")]
    Parse(#[from] toml::de::Error),
    /// A book needs at least one page to display.
    #[error("book contains no pages")]
    NoPages,
}

/// One unit of displayable content, addressed by a zero-based index.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Heading shown above the page body.
    pub title: String,
    /// Pre-formatted page text.
    pub body: String,
}

/// An ordered, immutable set of pages with front-matter.
///
/// The paginator only ever consumes `page_count()`; page contents stay
/// opaque to navigation and are read back through `page()` at render time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title shown in the reader header.
    pub title: String,
    /// Author line shown next to the title.
    #[serde(default)]
    pub author: String,
    /// Ordered page content.
    pub pages: Vec<Page>,
}

impl Book {
    /// Parse a book from TOML text, rejecting empty page sets.
    pub fn from_toml_str(raw: &str) -> Result<Self, BookError> {
        let book: Self = toml::from_str(raw)?;

        if book.pages.is_empty() {
            return Err(BookError::NoPages);
        }

        Ok(book)
    }

    /// Load a book from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, BookError> {
        let raw = fs::read_to_string(path).map_err(|source| BookError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    /// Number of pages in the book.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content for one page, if the index is in range.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }
}
