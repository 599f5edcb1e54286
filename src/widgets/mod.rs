//! Tile renderers for the astronomy dashboard.
//!
//! - [`date`]: weekday, day and month, year from the clock
//! - [`sun`], [`moon`], [`planets`], [`aurora`], [`iss`]: data tiles
//! - [`inlays`]: update time and battery corner text
//! - [`primitives`]: shared text placement
//!
//! # Architecture
//!
//! Every data tile has two functions:
//! 1. `draw_*_tile` takes the typed widget view and records the tile
//! 2. `render_*` takes a raw [`WidgetRecord`](crate::data::WidgetRecord),
//!    builds the view with its defaults, and calls the first
//!
//! The `render_*` functions share one signature so the
//! [`fallback`](crate::fallback) table can dispatch to them by pointer.
//! Each tile starts with its label, then adds content at fixed tile-relative
//! offsets. Renderers only append to the display list and never read it back.

mod aurora;
mod date;
mod inlays;
mod iss;
mod moon;
mod planets;
mod primitives;
mod sun;

pub use aurora::{draw_aurora_tile, render_aurora, severity_bar};
pub use date::{INVALID_INDEX, draw_date_tile, month_name, weekday_name};
pub use inlays::{BATTERY_ANCHOR, UPDATED_ANCHOR, battery_percent, draw_inlays};
pub use iss::{draw_iss_tile, render_iss};
pub use moon::{draw_moon_tile, render_moon};
pub use planets::{draw_planets_tile, render_planets};
pub use primitives::{draw_big_value, draw_centered, draw_label, draw_simple_tile, draw_sub};
pub use sun::{draw_sun_tile, render_sun};
