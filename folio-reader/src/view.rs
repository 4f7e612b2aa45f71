//! Pure frame composition for the reader screen.

use folio_book::Book;
use folio_core::Paginator;

/// Character width of the progress bar fill.
const PROGRESS_BAR_WIDTH: usize = 24;

/// Compose the whole screen for the current page.
pub fn render_frame(book: &Book, pager: &Paginator, columns: u16) -> String {
    let width = usize::from(columns).clamp(20, 100);
    let mut frame = String::new();

    frame.push_str(&header(book, pager));
    frame.push('\n');
    frame.push_str(&"-".repeat(width));
    frame.push('\n');

    if let Some(page) = book.page(pager.current()) {
        frame.push_str(&page.title);
        frame.push('\n');
        frame.push('\n');
        frame.push_str(&page.body);
        frame.push('\n');
    }

    frame.push('\n');
    frame.push_str(&marker_row(pager));
    frame.push('\n');
    frame.push_str(&progress_row(pager));
    frame.push('\n');
    frame.push_str(&nav_hint_row(pager));
    frame.push('\n');

    frame
}

/// Header line: book title, author, and the 1-based page position.
fn header(book: &Book, pager: &Paginator) -> String {
    let position = format!("Page {}/{}", pager.current() + 1, pager.page_count());

    if book.author.is_empty() {
        format!("{} • {}", book.title, position)
    } else {
        format!("{} • {} • {}", book.title, book.author, position)
    }
}

/// One marker per page, the current one filled in.
fn marker_row(pager: &Paginator) -> String {
    (0..pager.page_count())
        .map(|page| if page == pager.current() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Progress bar with a percentage readout.
fn progress_row(pager: &Paginator) -> String {
    let filled = (pager.progress() * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    let percent = (pager.progress() * 100.0).round() as usize;

    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled),
    )
}

/// Navigation hints, with the boundary side blanked when disabled.
fn nav_hint_row(pager: &Paginator) -> String {
    let prev = if pager.is_first() { "      " } else { "< prev" };
    let next = if pager.is_last() { "      " } else { "next >" };

    format!("{prev}   1-9 jump   p print   q quit   {next}")
}

#[cfg(test)]
mod tests {
    use folio_book::Page;

    use super::*;

    fn two_page_book() -> Book {
        Book {
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
        }
    }

    #[test]
    fn header_shows_one_based_position() {
        let book = two_page_book();
        let pager = Paginator::new(book.page_count()).unwrap();

        assert_eq!(header(&book, &pager), "Field Notes • R. Byrne • Page 1/2");
    }

    #[test]
    fn marker_row_highlights_the_current_page() {
        let pager = Paginator::with_start_page(3, 1).unwrap();

        assert_eq!(marker_row(&pager), "○ ● ○");
    }

    #[test]
    fn progress_row_scales_with_the_cursor() {
        let mut pager = Paginator::new(4).unwrap();
        pager.go_to(1);

        assert_eq!(progress_row(&pager), "[############............]  50%");
    }

    #[test]
    fn nav_hints_blank_the_disabled_side() {
        let mut pager = Paginator::new(2).unwrap();

        let at_first = nav_hint_row(&pager);
        assert!(!at_first.contains("< prev"));
        assert!(at_first.contains("next >"));

        pager.go_to(1);
        let at_last = nav_hint_row(&pager);
        assert!(at_last.contains("< prev"));
        assert!(!at_last.contains("next >"));
    }

    #[test]
    fn frame_carries_the_page_content() {
        let book = two_page_book();
        let mut pager = Paginator::new(book.page_count()).unwrap();
        pager.go_to(1);

        let frame = render_frame(&book, &pager, 80);
        assert!(frame.contains("Day One"));
        assert!(frame.contains("Arrived before dawn."));
        assert!(frame.contains("Page 2/2"));
    }
}
