//! Engine: the per-frame scheduler.
//!
//! Each iteration rebuilds the widget tree from the builder callback,
//! rasterizes it against the live terminal dimensions, serializes the grid
//! in one write, and then polls for at most one input event. The whole
//! frame is synchronous on one thread; the only suspension points are the
//! optional pacing sleep and the bounded reads behind a positive poll.

use crate::buffer::{render, CellGrid};
use crate::error::Result;
use crate::input::{Event, MouseAction};
use crate::layout::{rasterize, Region};
use crate::terminal::{OutputBuffer, Session, Terminal};
use crate::widget::Widget;
use std::time::{Duration, Instant};

/// Configuration for the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Target frames per second. `None` runs the loop uncapped.
    pub target_fps: Option<u32>,
}

impl EngineConfig {
    /// Duration of one frame at the target rate, if one is set.
    fn frame_budget(self) -> Option<Duration> {
        self.target_fps
            .filter(|fps| *fps > 0)
            .map(|fps| Duration::from_secs(1) / fps)
    }
}

/// The frame scheduler.
///
/// Owns the cell grid and the reusable output buffer; the terminal stays
/// with the caller so teardown remains their decision after [`run`]
/// (or [`start`]) returns.
///
/// [`run`]: Engine::run
pub struct Engine {
    grid: CellGrid,
    output: OutputBuffer,
    config: EngineConfig,
    frame_count: u64,
}

impl Engine {
    /// Create an engine sized to the terminal's current dimensions.
    pub fn new<T: Terminal>(term: &T, config: EngineConfig) -> Self {
        Self {
            grid: CellGrid::new(term.width(), term.height()),
            output: OutputBuffer::with_capacity(64 * 1024),
            config,
            frame_count: 0,
        }
    }

    /// Frames completed so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run the frame loop until the user quits.
    ///
    /// The builder is invoked once per frame with the terminal, so it can
    /// size its tree to the live dimensions. It must not retain anything
    /// from a previous frame's tree.
    ///
    /// A `Quit` event returns immediately: the frame that read it is the
    /// last one, and the builder is never called again.
    pub fn run<T, B>(&mut self, term: &mut T, mut builder: B) -> Result<()>
    where
        T: Terminal,
        B: FnMut(&T) -> Widget,
    {
        let frame_budget = self.config.frame_budget();

        loop {
            let frame_start = Instant::now();

            if term.refresh()? {
                self.grid.resize(term.width(), term.height());
            }

            let tree = builder(term);

            self.grid.clear();
            let full = Region::of_size(term.width(), term.height());
            rasterize(&mut self.grid, &tree, full);

            self.output.clear();
            render(&self.grid, self.output.as_mut_vec());
            term.write_frame(self.output.as_bytes())?;
            self.frame_count += 1;

            // The tree's job is done; handlers survive in the grid.
            drop(tree);

            if let Some(budget) = frame_budget {
                let elapsed = frame_start.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                }
            }

            if term.poll_event() {
                match term.next_event()? {
                    Event::Quit => {
                        tracing::debug!(frames = self.frame_count, "frame loop stopped");
                        return Ok(());
                    }
                    Event::MouseClick(action) => self.dispatch(action),
                    Event::Ignored => {}
                }
            }
        }
    }

    /// Invoke the handler owning the clicked cell, if any.
    ///
    /// Clicks outside the grid or on handler-less cells are silent no-ops.
    fn dispatch(&self, action: MouseAction) {
        if let Some(handler) = self.grid.click_handler_at(action.x, action.y) {
            tracing::trace!(x = action.x, y = action.y, "dispatching click");
            handler(action);
        }
    }
}

/// Run `builder` against `session` until the user quits.
///
/// This is the main entry point: it blocks for the lifetime of the UI.
/// Closing the session afterwards is the caller's (or `Drop`'s) job.
pub fn start<B>(session: &mut Session, builder: B, target_fps: Option<u32>) -> Result<()>
where
    B: FnMut(&Session) -> Widget,
{
    let mut engine = Engine::new(session, EngineConfig { target_fps });
    engine.run(session, builder)
}
