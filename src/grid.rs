//! Tile grid geometry and separator rendering.
//!
//! The surface is a fixed 3x2 grid of 320x270 tiles. Separator bars are 10px
//! wide and centred on the tile boundaries, so each bar eats 5px into the two
//! tiles it separates. Tile content keeps clear of those margins.
//!
//! All separator rectangles are `const`; drawing the grid never computes a
//! coordinate.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::LIGHT;
use crate::config::{GRID_COLS, GRID_GAP, GRID_ROWS, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_HEIGHT, TILE_WIDTH};
use crate::render::DisplayList;

// =============================================================================
// Separator Constants (computed at compile time)
// =============================================================================

const HALF_GAP: i32 = (GRID_GAP / 2) as i32;

/// Bar between columns 0 and 1 (x = 315).
const SEPARATOR_V1: Rectangle = Rectangle::new(
    Point::new(TILE_WIDTH as i32 - HALF_GAP, 0),
    Size::new(GRID_GAP, SCREEN_HEIGHT),
);

/// Bar between columns 1 and 2 (x = 635).
const SEPARATOR_V2: Rectangle = Rectangle::new(
    Point::new(2 * TILE_WIDTH as i32 - HALF_GAP, 0),
    Size::new(GRID_GAP, SCREEN_HEIGHT),
);

/// Bar between rows 0 and 1 (y = 265).
const SEPARATOR_H: Rectangle = Rectangle::new(
    Point::new(0, TILE_HEIGHT as i32 - HALF_GAP),
    Size::new(SCREEN_WIDTH, GRID_GAP),
);

/// All separator bars, in draw order.
pub const SEPARATORS: [Rectangle; 3] = [SEPARATOR_V1, SEPARATOR_V2, SEPARATOR_H];

/// Draw the two vertical and one horizontal separator bars.
pub fn draw_grid_lines(list: &mut DisplayList) {
    for bar in SEPARATORS {
        list.fill_rect(bar, LIGHT);
    }
}

// =============================================================================
// Tiles
// =============================================================================

/// One cell of the 3x2 grid.
///
/// Construction is a caller contract: `col < 3` and `row < 2`. The named
/// constants are the only tiles the dashboard uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub col: u32,
    pub row: u32,
}

impl Tile {
    pub const DATE: Self = Self::new(0, 0);
    pub const SUN: Self = Self::new(1, 0);
    pub const MOON: Self = Self::new(2, 0);
    pub const PLANETS: Self = Self::new(0, 1);
    pub const AURORA: Self = Self::new(1, 1);
    pub const ISS: Self = Self::new(2, 1);

    /// Every tile, row-major.
    pub const ALL: [Self; 6] = [
        Self::DATE,
        Self::SUN,
        Self::MOON,
        Self::PLANETS,
        Self::AURORA,
        Self::ISS,
    ];

    #[inline]
    pub const fn new(
        col: u32,
        row: u32,
    ) -> Self {
        Self { col, row }
    }

    /// Top-left pixel of the tile.
    #[inline]
    pub const fn origin(self) -> Point {
        Point::new((self.col * TILE_WIDTH) as i32, (self.row * TILE_HEIGHT) as i32)
    }

    /// Full pixel region of the tile.
    #[inline]
    pub const fn bounds(self) -> Rectangle { Rectangle::new(self.origin(), Size::new(TILE_WIDTH, TILE_HEIGHT)) }

    /// Horizontal centre, the anchor column for all tile text.
    #[inline]
    pub const fn center_x(self) -> i32 { self.origin().x + (TILE_WIDTH / 2) as i32 }

    /// Top edge.
    #[inline]
    pub const fn top(self) -> i32 { self.origin().y }

    /// Anchor for top-centred text `dy` pixels below the tile top.
    #[inline]
    pub const fn anchor(
        self,
        dy: i32,
    ) -> Point {
        Point::new(self.center_x(), self.top() + dy)
    }
}

const _: () = assert!(Tile::ALL.len() == (GRID_COLS * GRID_ROWS) as usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    #[test]
    fn test_tile_origins() {
        assert_eq!(Tile::new(0, 0).origin(), Point::new(0, 0));
        assert_eq!(Tile::new(1, 0).origin(), Point::new(320, 0));
        assert_eq!(Tile::new(2, 0).origin(), Point::new(640, 0));
        assert_eq!(Tile::new(0, 1).origin(), Point::new(0, 270));
        assert_eq!(Tile::new(2, 1).origin(), Point::new(640, 270));
    }

    #[test]
    fn test_tiles_exactly_cover_screen() {
        let screen = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let area: u32 = Tile::ALL.iter().map(|t| t.bounds().size.width * t.bounds().size.height).sum();
        assert_eq!(area, SCREEN_WIDTH * SCREEN_HEIGHT, "tile areas should sum to the screen area");

        for (i, a) in Tile::ALL.iter().enumerate() {
            assert_eq!(a.bounds().intersection(&screen), a.bounds(), "tile {a:?} must lie on screen");
            for b in &Tile::ALL[i + 1..] {
                let overlap = a.bounds().intersection(&b.bounds());
                assert_eq!(overlap.size, Size::zero(), "tiles {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn test_center_and_anchor() {
        assert_eq!(Tile::SUN.center_x(), 480);
        assert_eq!(Tile::ISS.anchor(50), Point::new(800, 320));
    }

    #[test]
    fn test_separators_centred_on_boundaries() {
        assert_eq!(SEPARATOR_V1.top_left.x, 315);
        assert_eq!(SEPARATOR_V2.top_left.x, 635);
        assert_eq!(SEPARATOR_H.top_left.y, 265);
        assert_eq!(SEPARATOR_H.size, Size::new(960, 10));
    }

    #[test]
    fn test_draw_grid_lines_is_idempotent() {
        let mut once = DisplayList::new();
        draw_grid_lines(&mut once);
        let mut twice = DisplayList::new();
        draw_grid_lines(&mut twice);
        draw_grid_lines(&mut twice);

        assert_eq!(once.len(), 3);
        assert_eq!(twice.commands()[..3], twice.commands()[3..], "repeat draws should be identical");
        assert!(once.commands().iter().all(|c| matches!(c, DrawCommand::FillRect { shade, .. } if *shade == LIGHT)));
    }
}
