//! Translation layer between raw front-end input and the page cursor.

/// Stateless adapter routing navigation requests onto one paginator.
pub mod adapter;
/// Semantic navigation requests, independent of input source.
pub mod event;

pub use adapter::{InputAdapter, InputOutcome, PrintSink};
pub use event::InputEvent;
