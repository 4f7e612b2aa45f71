use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use crossterm::event;
use tracing::info;

use folio_book::Book;
use folio_core::Paginator;
use folio_input::{InputAdapter, InputOutcome};

mod export;
mod keymap;
mod term;
mod view;

use export::TextPrinter;
use keymap::Action;

/// Sample book embedded so the reader runs without any arguments.
const SAMPLE_BOOK: &str = include_str!("../assets/resume.toml");

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Read a book-style document in the terminal.")]
struct Args {
    /// Path to a book file in TOML form; the built-in sample when omitted.
    book: Option<PathBuf>,

    /// One-based page to open the book on.
    #[arg(long)]
    page: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let book = match args.book.as_deref() {
        Some(path) => Book::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Book::from_toml_str(SAMPLE_BOOK)?,
    };
    let book = Arc::new(book);
    info!(title = %book.title, pages = book.page_count(), "book loaded");

    let start_page = args.page.unwrap_or(1).saturating_sub(1);
    let mut pager = Paginator::with_start_page(book.page_count(), start_page)?;
    let adapter = InputAdapter::new(TextPrinter::new(Arc::clone(&book)));

    let mut terminal = term::Terminal::enter()?;
    let result = run(&mut terminal, &book, &mut pager, &adapter);
    drop(terminal);

    result
}

/// Read raw terminal events one at a time and apply them in arrival order.
fn run(
    terminal: &mut term::Terminal,
    book: &Book,
    pager: &mut Paginator,
    adapter: &InputAdapter<TextPrinter>,
) -> anyhow::Result<()> {
    terminal.draw(&view::render_frame(book, pager, terminal.columns()))?;

    loop {
        let raw = event::read()?;

        match keymap::decode(&raw, terminal.columns()) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Nav(nav)) => {
                if let InputOutcome::Moved { .. } = adapter.handle(pager, nav) {
                    terminal.draw(&view::render_frame(book, pager, terminal.columns()))?;
                }
            }
            Some(Action::Redraw) => {
                terminal.draw(&view::render_frame(book, pager, terminal.columns()))?;
            }
            None => {}
        }
    }
}
