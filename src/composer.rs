//! Full render pass: data, battery and clock in, one flushed frame out.
//!
//! # Render Sequence
//!
//! 1. Clear to white
//! 2. Grid separators
//! 3. Date tile from the clock
//! 4. Each data widget through the [`WIDGET_SLOTS`] table, in order
//! 5. Update-time and battery inlays
//! 6. One `Gc16` flush
//!
//! Steps 1-5 are [`DashboardComposer::compose`], a pure function that returns
//! the display list. [`DashboardComposer::render`] rasterizes that list onto a
//! fresh [`Frame`] and performs step 6.
//!
//! The clock is read once per pass, so the date tile and the update inlay
//! always agree.

use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::colors::WHITE;
use crate::data::DashboardData;
use crate::fallback::{WIDGET_SLOTS, WidgetState, resolve};
use crate::frame::{Frame, Panel, UpdateMode};
use crate::grid::{Tile, draw_grid_lines};
use crate::render::DisplayList;
use crate::widgets::{draw_date_tile, draw_inlays};

/// Rasterize `list` onto a fresh frame and push it to `panel` with a full refresh.
pub fn present<P>(
    list: &DisplayList,
    panel: &mut P,
) -> Result<Frame, P::Error>
where
    P: Panel,
{
    let mut frame = Frame::new();
    list.draw(&mut frame);
    panel.flush(&frame, UpdateMode::Gc16)?;
    Ok(frame)
}

/// Number of data widgets that pass the presence test.
pub fn ready_widgets(data: &DashboardData) -> usize {
    WIDGET_SLOTS
        .iter()
        .filter(|slot| matches!(resolve(data, slot.kind), WidgetState::Ready(_)))
        .count()
}

/// Orchestrates one dashboard render per call.
#[derive(Clone, Debug, Default)]
pub struct DashboardComposer<C> {
    clock: C,
}

impl<C> DashboardComposer<C>
where
    C: Clock,
{
    pub const fn new(clock: C) -> Self { Self { clock } }

    /// Build the display list for one dashboard frame.
    ///
    /// `battery_pct` values above 100 are clamped.
    pub fn compose(
        &self,
        data: &DashboardData,
        battery_pct: u8,
    ) -> DisplayList {
        let now = self.clock.now();
        let mut list = DisplayList::new();

        list.clear(WHITE);
        draw_grid_lines(&mut list);
        draw_date_tile(&mut list, Tile::DATE, &now);

        for slot in &WIDGET_SLOTS {
            let state = resolve(data, slot.kind);
            debug!(widget = slot.kind.key(), state = state.as_str(), "widget resolved");
            slot.draw(&mut list, &state);
        }

        draw_inlays(&mut list, &now, battery_pct);
        trace!(commands = list.len(), "dashboard composed");
        list
    }

    /// Compose, rasterize and flush one dashboard frame.
    ///
    /// The panel is flushed exactly once. Its error is returned unchanged.
    pub fn render<P>(
        &self,
        data: &DashboardData,
        battery_pct: u8,
        panel: &mut P,
    ) -> Result<Frame, P::Error>
    where
        P: Panel,
    {
        let list = self.compose(data, battery_pct);
        let frame = present(&list, panel)?;
        info!(ready = ready_widgets(data), battery_pct, "dashboard flushed");
        Ok(frame)
    }
}
