//! Shade constants for the 16-level e-paper panel.
//!
//! # Inverted Level Numbering
//!
//! The panel numbers its gray levels the opposite way to `embedded_graphics`:
//! level 0 is white and level 15 is black. This crate keeps the panel numbering
//! as the output contract. [`Shade`] holds a panel level and converts to
//! [`Gray4`] (luma, 15 = white) only at the `embedded_graphics` boundary.
//!
//! | Shade | Panel level | `Gray4` luma |
//! |-------|-------------|--------------|
//! | [`WHITE`] | 0 | 15 |
//! | [`LIGHT`] | 3 | 12 |
//! | [`MID`] | 8 | 7 |
//! | [`DARK`] | 12 | 3 |
//! | [`BLACK`] | 15 | 0 |

use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// A panel gray level, 0 = white through 15 = black.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Shade(u8);

impl Shade {
    /// Darkest panel level.
    pub const MAX_LEVEL: u8 = 15;

    /// Create a shade from a panel level. Levels above 15 saturate to black.
    #[inline]
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX_LEVEL {
            Self(Self::MAX_LEVEL)
        } else {
            Self(level)
        }
    }

    /// Panel level (0 = white, 15 = black).
    #[inline]
    pub const fn level(self) -> u8 { self.0 }

    /// Convert to `embedded_graphics` luma.
    #[inline]
    pub fn to_gray4(self) -> Gray4 { Gray4::new(Self::MAX_LEVEL - self.0) }

    /// Convert from `embedded_graphics` luma.
    #[inline]
    pub fn from_gray4(color: Gray4) -> Self { Self(Self::MAX_LEVEL - color.luma()) }
}

impl From<Shade> for Gray4 {
    fn from(shade: Shade) -> Self { shade.to_gray4() }
}

impl From<Gray4> for Shade {
    fn from(color: Gray4) -> Self { Self::from_gray4(color) }
}

/// Background. Panel level 0.
pub const WHITE: Shade = Shade::new(0);

/// Grid separators. Panel level 3.
pub const LIGHT: Shade = Shade::new(3);

/// Tile labels and inlays. Panel level 8.
pub const MID: Shade = Shade::new(8);

/// Secondary lines (dates, sub values). Panel level 12.
pub const DARK: Shade = Shade::new(12);

/// Primary values, moon disc, severity bar. Panel level 15.
pub const BLACK: Shade = Shade::new(15);
