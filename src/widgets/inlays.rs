//! Corner inlays: last update time and battery level.
//!
//! Both sit on the bottom edge, outside the tile grid's content areas, at
//! size 2 in mid gray.

use embedded_graphics::prelude::Point;

use crate::clock::ClockReading;
use crate::colors::MID;
use crate::config::{BATTERY_EMPTY_MV, BATTERY_FULL_MV, INLAY_BATTERY_X, INLAY_BOTTOM_Y, INLAY_UPDATED_X};
use crate::render::{DisplayList, line};
use crate::styles::{Datum, TextSize};

/// Bottom-left anchor of the "last update" inlay.
pub const UPDATED_ANCHOR: Point = Point::new(INLAY_UPDATED_X, INLAY_BOTTOM_Y);

/// Bottom-right anchor of the battery inlay.
pub const BATTERY_ANCHOR: Point = Point::new(INLAY_BATTERY_X, INLAY_BOTTOM_Y);

/// Map a battery voltage onto 0-100%, linear between the empty and full
/// thresholds and clamped outside them.
pub fn battery_percent(millivolts: u32) -> u8 {
    let clamped = millivolts.clamp(BATTERY_EMPTY_MV, BATTERY_FULL_MV);
    ((clamped - BATTERY_EMPTY_MV) * 100 / (BATTERY_FULL_MV - BATTERY_EMPTY_MV)) as u8
}

/// Draw both inlays. `battery_pct` is clamped to 100.
pub fn draw_inlays(
    list: &mut DisplayList,
    now: &ClockReading,
    battery_pct: u8,
) {
    let updated = line(format_args!("UPD {:02}:{:02}", now.hour, now.minute));
    list.text(&updated, UPDATED_ANCHOR, TextSize::Tiny, MID, Datum::BottomLeft);

    let battery = line(format_args!("{}%", battery_pct.min(100)));
    list.text(&battery, BATTERY_ANCHOR, TextSize::Tiny, MID, Datum::BottomRight);
}
