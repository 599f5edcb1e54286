// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // f32->i32, u32->u8 casts for pixel and percent math
#![allow(clippy::cast_precision_loss)] // i32->f32 in disc geometry
#![allow(clippy::cast_possible_wrap)] // u32->i32 for screen-bounded coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where the value is known positive
#![allow(clippy::module_name_repetitions)] // DashboardData in data, WidgetState in fallback

//! Astronomy dashboard renderer for a 960x540 16-level e-paper panel.
//!
//! Turns one fetch cycle's widget data into a full-screen frame:
//! - Date (from the real-time clock)
//! - Sunrise and sunset
//! - Moon phase, drawn as a shaded disc
//! - Visible planets, as an adaptive list
//! - Aurora activity with a severity bar
//! - Next visible ISS pass
//!
//! Any widget may be missing, error-flagged or malformed. The renderer always
//! produces a complete frame, substituting per-field defaults and per-widget
//! fallback tiles.
//!
//! # Pipeline
//!
//! ```text
//! DashboardData ─┐
//! battery %   ───┼─> DashboardComposer::compose ─> DisplayList ─> Frame ─> Panel::flush(Gc16)
//! Clock       ───┘
//! ```
//!
//! - [`data`]: input document and value-or-default widget views
//! - [`fallback`]: presence test and the widget dispatch table
//! - [`widgets`]: one renderer per tile, plus corner inlays
//! - [`grid`], [`list_layout`], [`phase`]: layout and geometry
//! - [`render`]: display list and scaled text
//! - [`frame`]: 4bpp framebuffer and the panel seam
//! - [`composer`]: the render pass
//! - [`screens`]: boot, status and failure screens
//!
//! # Fixed Layout
//!
//! All positions are compile-time constants in [`config`]; see that module for
//! the grid diagram. Text is anchored via const styles in [`styles`].

pub mod clock;
pub mod colors;
pub mod composer;
pub mod config;
pub mod data;
pub mod error;
pub mod fallback;
pub mod frame;
pub mod grid;
pub mod list_layout;
pub mod phase;
pub mod render;
pub mod screens;
pub mod styles;
pub mod widgets;

pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use composer::{DashboardComposer, present};
pub use data::DashboardData;
pub use error::{Error, Result};
pub use frame::{Frame, Panel, UpdateMode};
pub use render::DisplayList;
