//! Aurora tile: magnetometer reading, activity level and severity bar.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, DARK};
use crate::config::{LABEL_Y, SEVERITY_BAR_HEIGHT, SEVERITY_BAR_INSET, SEVERITY_BAR_Y, TILE_WIDTH};
use crate::data::{AuroraWidget, WidgetRecord};
use crate::grid::Tile;
use crate::render::{DisplayList, line};
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label};

const READING_Y: i32 = 65;
const NO_READING_Y: i32 = 85;
const LEVEL_Y: i32 = 165;

/// Severity bar position inside `tile`.
pub const fn severity_bar(tile: Tile) -> Rectangle {
    let origin = tile.origin();
    Rectangle::new(
        Point::new(origin.x + SEVERITY_BAR_INSET as i32, origin.y + SEVERITY_BAR_Y),
        Size::new(TILE_WIDTH - 2 * SEVERITY_BAR_INSET, SEVERITY_BAR_HEIGHT),
    )
}

pub fn draw_aurora_tile(
    list: &mut DisplayList,
    tile: Tile,
    aurora: &AuroraWidget<'_>,
) {
    draw_label(list, tile, LABEL_Y, "AURORA");

    match aurora.nt {
        Some(nt) => {
            let reading = line(format_args!("{nt} nT"));
            draw_centered(list, tile, READING_Y, &reading, TextSize::XLarge, BLACK);
        }
        None => draw_centered(list, tile, NO_READING_Y, "no reading", TextSize::Small, DARK),
    }

    draw_centered(list, tile, LEVEL_Y, aurora.level, TextSize::Large, BLACK);

    if aurora.status_color.is_elevated() {
        list.fill_rect(severity_bar(tile), BLACK);
    }
}

/// Widget-table entry point.
pub fn render_aurora(
    list: &mut DisplayList,
    tile: Tile,
    record: &WidgetRecord<'_>,
) {
    draw_aurora_tile(list, tile, &AuroraWidget::from_record(record));
}
