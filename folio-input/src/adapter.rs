//! Stateless translation from navigation requests to paginator calls.

use folio_core::{Direction, Paginator};
use tracing::warn;

use crate::event::InputEvent;

/// Destination for print/export requests.
///
/// Implementations produce a user-facing snapshot of the book. The adapter
/// treats the call as fire-and-forget: a sink failure is logged and never
/// surfaced as a navigation failure.
pub trait PrintSink {
    /// Write a snapshot, given the zero-based page currently on screen.
    fn print(&self, current_page: usize) -> anyhow::Result<()>;
}

/// What one input event did to the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The current page changed; the view should re-render.
    Moved { page: usize },
    /// The request was absorbed (boundary step or re-select of the current
    /// page); the view can skip the redraw.
    Unchanged { page: usize },
    /// A print snapshot was requested; the current page is untouched.
    PrintRequested,
}

/// Routes navigation requests from any input source onto one [`Paginator`].
///
/// The adapter holds no navigation state of its own, so constructing it
/// once or per render pass behaves identically; the paginator is the sole
/// state holder.
pub struct InputAdapter<S> {
    sink: S,
}

impl<S: PrintSink> InputAdapter<S> {
    /// Create an adapter that forwards print requests to `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Apply a decoded input event to `pager`.
    pub fn handle(&self, pager: &mut Paginator, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Step(direction) => self.on_step(pager, direction),
            InputEvent::Select(page) => self.on_select(pager, page),
            InputEvent::Print => self.on_print(pager),
        }
    }

    /// Handle a directional request from arrow keys or a click zone.
    pub fn on_step(&self, pager: &mut Paginator, direction: Direction) -> InputOutcome {
        let before = pager.current();
        let page = pager.step(direction);

        outcome_for(before, page)
    }

    /// Handle an absolute page pick from a marker control.
    pub fn on_select(&self, pager: &mut Paginator, page: usize) -> InputOutcome {
        let before = pager.current();
        let page = pager.go_to(page);

        outcome_for(before, page)
    }

    /// Forward a print request to the sink.
    pub fn on_print(&self, pager: &Paginator) -> InputOutcome {
        if let Err(source) = self.sink.print(pager.current()) {
            warn!(?source, "print sink failed");
        }

        InputOutcome::PrintRequested
    }
}

fn outcome_for(before: usize, page: usize) -> InputOutcome {
    if page == before {
        InputOutcome::Unchanged { page }
    } else {
        InputOutcome::Moved { page }
    }
}
