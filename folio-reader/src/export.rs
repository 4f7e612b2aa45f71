//! Plain-text snapshot printing for the whole book.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use folio_book::Book;
use folio_input::PrintSink;

/// Writes the whole book as one plain-text document.
pub struct TextPrinter {
    book: Arc<Book>,
    out_dir: PathBuf,
}

impl TextPrinter {
    /// Printer that writes into the current working directory.
    pub fn new(book: Arc<Book>) -> Self {
        Self::with_out_dir(book, PathBuf::from("."))
    }

    /// Printer that writes into `out_dir`.
    pub fn with_out_dir(book: Arc<Book>, out_dir: PathBuf) -> Self {
        Self { book, out_dir }
    }

    fn snapshot(&self) -> String {
        let mut text = String::new();

        text.push_str(&self.book.title);
        text.push('\n');
        if !self.book.author.is_empty() {
            text.push_str(&self.book.author);
            text.push('\n');
        }

        for (index, page) in self.book.pages.iter().enumerate() {
            text.push('\n');
            text.push_str(&format!(
                "--- {} ({} of {}) ---\n",
                page.title,
                index + 1,
                self.book.page_count()
            ));
            text.push_str(&page.body);
            text.push('\n');
        }

        text
    }

    fn file_name(&self) -> String {
        let stem: String = self
            .book
            .title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        let stem = stem.trim_matches('-');

        if stem.is_empty() {
            "book.txt".to_owned()
        } else {
            format!("{stem}.txt")
        }
    }
}

impl PrintSink for TextPrinter {
    fn print(&self, _current_page: usize) -> anyhow::Result<()> {
        let path = self.out_dir.join(self.file_name());
        fs::write(&path, self.snapshot())?;
        info!(path = %path.display(), "book snapshot written");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_book::Page;

    use super::*;

    fn sample_book() -> Arc<Book> {
        Arc::new(Book {
            title: "Field Notes".to_owned(),
            author: "R. Byrne".to_owned(),
            pages: vec![
                Page {
                    title: "Cover".to_owned(),
                    body: "Notes from the field.".to_owned(),
                },
                Page {
                    title: "Day One".to_owned(),
                    body: "Arrived before dawn.".to_owned(),
                },
            ],
        })
    }

    #[test]
    fn snapshot_covers_every_page() {
        let printer = TextPrinter::new(sample_book());
        let snapshot = printer.snapshot();

        assert!(snapshot.starts_with("Field Notes\n"));
        assert!(snapshot.contains("--- Cover (1 of 2) ---"));
        assert!(snapshot.contains("--- Day One (2 of 2) ---"));
        assert!(snapshot.contains("Arrived before dawn."));
    }

    #[test]
    fn file_name_is_a_slug_of_the_title() {
        let printer = TextPrinter::new(sample_book());

        assert_eq!(printer.file_name(), "field-notes.txt");
    }

    #[test]
    fn print_writes_the_snapshot_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let printer = TextPrinter::with_out_dir(sample_book(), dir.path().to_path_buf());

        printer.print(0).unwrap();

        let written = fs::read_to_string(dir.path().join("field-notes.txt")).unwrap();
        assert!(written.contains("Day One"));
    }
}
