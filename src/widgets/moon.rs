//! Moon tile: phase disc, phase name, illumination and age.

use embedded_graphics::prelude::Point;

use crate::colors::{BLACK, DARK};
use crate::config::{LABEL_Y, MOON_DISC_RADIUS, MOON_DISC_Y};
use crate::data::{MoonWidget, WidgetRecord};
use crate::grid::Tile;
use crate::phase::MoonDisc;
use crate::render::{DisplayList, line};
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label};

const NAME_Y: i32 = 185;
const INFO_Y: i32 = 220;

pub fn draw_moon_tile(
    list: &mut DisplayList,
    tile: Tile,
    moon: &MoonWidget<'_>,
) {
    draw_label(list, tile, LABEL_Y, "MOON");

    let disc = MoonDisc::new(Point::new(tile.center_x(), tile.top() + MOON_DISC_Y), MOON_DISC_RADIUS);
    disc.draw(moon.phase_fraction(), list);

    draw_centered(list, tile, NAME_Y, moon.name, TextSize::Small, BLACK);

    let info = line(format_args!(
        "{:.0}%  day {:.0}",
        moon.illumination_pct, moon.age_days
    ));
    draw_centered(list, tile, INFO_Y, &info, TextSize::Tiny, DARK);
}

/// Widget-table entry point.
pub fn render_moon(
    list: &mut DisplayList,
    tile: Tile,
    record: &WidgetRecord<'_>,
) {
    draw_moon_tile(list, tile, &MoonWidget::from_record(record));
}
