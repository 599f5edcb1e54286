//! Planets tile: an adaptive list of visible planets and their directions.
//!
//! Three outcomes depend on the nested `planets` list:
//! - list key missing: "no data"
//! - empty list: "None" / "tonight"
//! - otherwise: one "<name> <direction>" line per planet, capped at five

use crate::colors::{BLACK, DARK};
use crate::config::LABEL_Y;
use crate::data::{PlanetsWidget, WidgetRecord};
use crate::grid::Tile;
use crate::list_layout::ListLayout;
use crate::render::{DisplayList, line};
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label, draw_sub};

const NO_DATA_Y: i32 = 120;
const NONE_Y: i32 = 90;
const TONIGHT_Y: i32 = 145;

pub fn draw_planets_tile(
    list: &mut DisplayList,
    tile: Tile,
    planets: &PlanetsWidget<'_>,
) {
    draw_label(list, tile, LABEL_Y, "PLANETS");

    if !planets.has_list() {
        draw_sub(list, tile, NO_DATA_Y, "no data");
        return;
    }

    let count = planets.count();
    if count == 0 {
        draw_centered(list, tile, NONE_Y, "None", TextSize::Medium, BLACK);
        draw_centered(list, tile, TONIGHT_Y, "tonight", TextSize::Small, DARK);
        return;
    }

    let layout = ListLayout::new(count);
    for (i, planet) in planets.entries().take(layout.rendered).enumerate() {
        let text = line(format_args!("{} {}", planet.name, planet.direction));
        draw_centered(list, tile, layout.line_y(i), &text, layout.size, BLACK);
    }
}

/// Widget-table entry point.
pub fn render_planets(
    list: &mut DisplayList,
    tile: Tile,
    record: &WidgetRecord<'_>,
) {
    draw_planets_tile(list, tile, &PlanetsWidget::from_record(record));
}
