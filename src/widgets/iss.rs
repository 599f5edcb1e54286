//! ISS tile: next visible pass.

use crate::colors::{BLACK, DARK};
use crate::config::LABEL_Y;
use crate::data::{IssWidget, WidgetRecord};
use crate::grid::Tile;
use crate::render::{DisplayList, line};
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label};

const TIME_Y: i32 = 50;
const DATE_Y: i32 = 115;
const DIRECTION_Y: i32 = 165;
const DURATION_Y: i32 = 210;

pub fn draw_iss_tile(
    list: &mut DisplayList,
    tile: Tile,
    iss: &IssWidget<'_>,
) {
    draw_label(list, tile, LABEL_Y, "ISS PASS");

    draw_centered(list, tile, TIME_Y, iss.time, TextSize::XLarge, BLACK);
    draw_centered(list, tile, DATE_Y, iss.date, TextSize::Small, DARK);

    let direction = line(format_args!("{}>{} max {}", iss.rise_dir, iss.set_dir, iss.max_alt));
    draw_centered(list, tile, DIRECTION_Y, &direction, TextSize::Small, BLACK);

    let duration = line(format_args!("{}m visible", iss.duration_min));
    draw_centered(list, tile, DURATION_Y, &duration, TextSize::Tiny, DARK);
}

/// Widget-table entry point.
pub fn render_iss(
    list: &mut DisplayList,
    tile: Tile,
    record: &WidgetRecord<'_>,
) {
    draw_iss_tile(list, tile, &IssWidget::from_record(record));
}
