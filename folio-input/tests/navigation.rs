use folio_core::{Direction, Paginator};
use folio_input::{InputAdapter, InputEvent, InputOutcome, PrintSink};

struct NullSink;

impl PrintSink for NullSink {
    fn print(&self, _current_page: usize) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn reads_a_seven_page_book_to_the_end() {
    let adapter = InputAdapter::new(NullSink);
    let mut pager = Paginator::new(7).unwrap();

    for expected in 1..=6 {
        assert_eq!(
            adapter.handle(&mut pager, InputEvent::Step(Direction::Next)),
            InputOutcome::Moved { page: expected }
        );
    }

    assert!(pager.is_last());
    assert!((pager.progress() - 1.0).abs() < f64::EPSILON);

    assert_eq!(
        adapter.handle(&mut pager, InputEvent::Step(Direction::Next)),
        InputOutcome::Unchanged { page: 6 }
    );
}

#[test]
fn marker_pick_then_directional_input() {
    let adapter = InputAdapter::new(NullSink);
    let mut pager = Paginator::new(7).unwrap();
    assert_eq!(pager.current(), 0);

    assert_eq!(
        adapter.handle(&mut pager, InputEvent::Select(3)),
        InputOutcome::Moved { page: 3 }
    );
    assert_eq!(
        adapter.handle(&mut pager, InputEvent::Step(Direction::Prev)),
        InputOutcome::Moved { page: 2 }
    );
}

#[test]
fn absolute_select_past_the_end_lands_on_the_last_page() {
    let adapter = InputAdapter::new(NullSink);
    let mut pager = Paginator::new(7).unwrap();

    assert_eq!(
        adapter.handle(&mut pager, InputEvent::Select(usize::MAX)),
        InputOutcome::Moved { page: 6 }
    );
}

#[test]
fn print_request_does_not_move_the_cursor() {
    let adapter = InputAdapter::new(NullSink);
    let mut pager = Paginator::with_start_page(7, 4).unwrap();

    assert_eq!(
        adapter.handle(&mut pager, InputEvent::Print),
        InputOutcome::PrintRequested
    );
    assert_eq!(pager.current(), 4);
}
