//! Sun tile: sunrise and sunset times.

use crate::colors::{BLACK, MID};
use crate::config::LABEL_Y;
use crate::data::{SunWidget, WidgetRecord};
use crate::grid::Tile;
use crate::render::DisplayList;
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label};

const RISE_LABEL_Y: i32 = 55;
const RISE_TIME_Y: i32 = 85;
const SET_LABEL_Y: i32 = 155;
const SET_TIME_Y: i32 = 185;

pub fn draw_sun_tile(
    list: &mut DisplayList,
    tile: Tile,
    sun: &SunWidget<'_>,
) {
    draw_label(list, tile, LABEL_Y, "SUN");

    draw_centered(list, tile, RISE_LABEL_Y, "rise", TextSize::Small, MID);
    draw_centered(list, tile, RISE_TIME_Y, sun.sunrise, TextSize::Large, BLACK);

    draw_centered(list, tile, SET_LABEL_Y, "set", TextSize::Small, MID);
    draw_centered(list, tile, SET_TIME_Y, sun.sunset, TextSize::Large, BLACK);
}

/// Widget-table entry point.
pub fn render_sun(
    list: &mut DisplayList,
    tile: Tile,
    record: &WidgetRecord<'_>,
) {
    draw_sun_tile(list, tile, &SunWidget::from_record(record));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sun_times_rendered() {
        let value = json!({"sunrise": "07:21", "sunset": "18:02"});
        let mut list = DisplayList::new();
        render_sun(&mut list, Tile::SUN, &WidgetRecord::new(&value));
        for text in ["SUN", "rise", "07:21", "set", "18:02"] {
            assert!(list.contains_text(text), "missing {text}");
        }
    }

    #[test]
    fn test_missing_sunset_defaults_alone() {
        let value = json!({"sunrise": "07:21"});
        let mut list = DisplayList::new();
        render_sun(&mut list, Tile::SUN, &WidgetRecord::new(&value));
        let times: Vec<_> = list.texts().filter(|r| r.size == TextSize::Large).map(|r| r.text.as_str()).collect();
        assert_eq!(times, ["07:21", "--:--"]);
    }
}
