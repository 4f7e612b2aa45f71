//! Semantic navigation requests decoded from raw UI events.

use folio_core::Direction;

/// A navigation request, independent of the input source that produced it.
///
/// Keyboard arrows and click zones decode to [`InputEvent::Step`], page
/// markers to [`InputEvent::Select`], and the export control to
/// [`InputEvent::Print`]. Front-ends decode their raw events into this and
/// hand it to the adapter, so no handler special-cases an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move one page toward either cover.
    Step(Direction),
    /// Jump to an absolute zero-based page index.
    Select(usize),
    /// Request a print/export snapshot of the book.
    Print,
}
