//! Clickable counter: two buttons mutate shared state, the builder reads
//! it back on the next frame.
//!
//! Click `[+]`/`[-]` (or move the cursor with h/j/k/l and press Enter)
//! to change the count; press `q` or Ctrl-C to quit.

use std::cell::Cell;
use std::rc::Rc;
use weft::{start, Color, Extent, Session, Widget};

fn build_ui(count: &Rc<Cell<i64>>, session: &Session) -> Widget {
    let increment = count.clone();
    let decrement = count.clone();

    Widget::boxed(
        Extent::Fill,
        Extent::Fill,
        Widget::column(vec![
            Widget::text(
                format!("count: {} ({}x{})", count.get(), session.width(), session.height()),
                Color::White,
            ),
            Widget::row(vec![
                Widget::boxed(
                    Extent::Cells(8),
                    Extent::Cells(2),
                    Widget::button(Widget::text("[+]", Color::Green), move |_| {
                        increment.set(increment.get() + 1);
                    }),
                    Color::Blue,
                ),
                Widget::boxed(
                    Extent::Cells(8),
                    Extent::Cells(2),
                    Widget::button(Widget::text("[-]", Color::Red), move |_| {
                        decrement.set(decrement.get() - 1);
                    }),
                    Color::Yellow,
                ),
            ]),
        ]),
        Color::NoColor,
    )
}

fn main() -> weft::Result<()> {
    let count = Rc::new(Cell::new(0i64));

    let mut session = Session::open()?;
    let result = start(
        &mut session,
        |session| build_ui(&count, session),
        Some(30),
    );
    session.close()?;
    result
}
