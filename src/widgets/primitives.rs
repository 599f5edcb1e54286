//! Text placement helpers shared by every tile.
//!
//! All tile text is top-centre anchored on the tile's horizontal centre, so a
//! tile renderer only chooses a vertical offset, a size and a shade. The data
//! renderers and their fallback twins go through the same helpers, which keeps
//! a fallback tile visually aligned with the tile it replaces.

use crate::colors::{BLACK, DARK, MID, Shade};
use crate::config::{FALLBACK_SUB_Y, FALLBACK_VALUE_Y, LABEL_Y_LOW};
use crate::grid::Tile;
use crate::render::DisplayList;
use crate::styles::{Datum, TextSize};

/// Draw `text` centred on the tile, `dy` pixels below its top.
#[inline]
pub fn draw_centered(
    list: &mut DisplayList,
    tile: Tile,
    dy: i32,
    text: &str,
    size: TextSize,
    shade: Shade,
) {
    list.text(text, tile.anchor(dy), size, shade, Datum::TopCenter);
}

/// Tile heading (size 3, mid gray).
#[inline]
pub fn draw_label(
    list: &mut DisplayList,
    tile: Tile,
    dy: i32,
    label: &str,
) {
    draw_centered(list, tile, dy, label, TextSize::Small, MID);
}

/// Headline value (size 7, black).
#[inline]
pub fn draw_big_value(
    list: &mut DisplayList,
    tile: Tile,
    dy: i32,
    value: &str,
) {
    draw_centered(list, tile, dy, value, TextSize::XXLarge, BLACK);
}

/// Secondary line (size 3, dark gray).
#[inline]
pub fn draw_sub(
    list: &mut DisplayList,
    tile: Tile,
    dy: i32,
    sub: &str,
) {
    draw_centered(list, tile, dy, sub, TextSize::Small, DARK);
}

/// Label, big value and optional sub line at the generic offsets.
///
/// An empty `sub` is skipped.
pub fn draw_simple_tile(
    list: &mut DisplayList,
    tile: Tile,
    label: &str,
    value: &str,
    sub: &str,
) {
    draw_label(list, tile, LABEL_Y_LOW, label);
    draw_big_value(list, tile, FALLBACK_VALUE_Y, value);
    if !sub.is_empty() {
        draw_sub(list, tile, FALLBACK_SUB_Y, sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tile_layout() {
        let mut list = DisplayList::new();
        draw_simple_tile(&mut list, Tile::SUN, "SUN", "--:--", "no data");

        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].anchor.y, 18, "label sits 18px below the tile top");
        assert_eq!(runs[0].size, TextSize::Small);
        assert_eq!(runs[0].shade, MID);
        assert_eq!(runs[1].anchor.y, 80);
        assert_eq!(runs[1].size, TextSize::XXLarge);
        assert_eq!(runs[2].anchor.y, 155);
        assert_eq!(runs[2].shade, DARK);
        assert!(runs.iter().all(|r| r.anchor.x == 480), "text is centred on the tile");
    }

    #[test]
    fn test_simple_tile_skips_empty_sub() {
        let mut list = DisplayList::new();
        draw_simple_tile(&mut list, Tile::ISS, "ISS PASS", "?", "");
        assert_eq!(list.texts().count(), 2);
    }

    #[test]
    fn test_anchor_is_tile_relative() {
        let mut list = DisplayList::new();
        draw_label(&mut list, Tile::PLANETS, 10, "PLANETS");
        let run = list.texts().next().expect("label recorded");
        assert_eq!(run.anchor.x, 160);
        assert_eq!(run.anchor.y, 280);
    }
}
