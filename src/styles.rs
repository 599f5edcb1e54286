//! Pre-computed text styles and font faces.
//!
//! # Text Sizes
//!
//! Tiles use six text sizes. The two smallest map to native `ProFont` faces,
//! which stay crisp at their design size. The larger ones scale the 6x10 ASCII
//! font by an integer factor, so a size `n` glyph is `6n` pixels wide.
//!
//! | Size | Face | Glyph cell |
//! |------|------|-----------|
//! | [`TextSize::Tiny`] | `ProFont` 18pt | 12x22 |
//! | [`TextSize::Small`] | `ProFont` 24pt | 16x29 |
//! | [`TextSize::Medium`] | 6x10 ×4 | 24x40 |
//! | [`TextSize::Large`] | 6x10 ×5 | 30x50 |
//! | [`TextSize::XLarge`] | 6x10 ×6 | 36x60 |
//! | [`TextSize::XXLarge`] | 6x10 ×7 | 42x70 |
//!
//! # Anchors
//!
//! [`Datum`] pairs a horizontal alignment with a vertical baseline, in the
//! same way the panel firmware anchors strings (top-centre for tile text,
//! bottom corners for inlays, middle-centre for status screens). The
//! matching `TextStyle` values are `const` so no style is built per draw.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Anchor Styles (const - zero runtime cost)
// =============================================================================

/// Top-centre anchor. Used for all tile text.
pub const TOP_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Middle-centre anchor. Used for status screens.
pub const MIDDLE_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Bottom-left anchor. Used for the "last update" inlay.
pub const BOTTOM_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

/// Bottom-right anchor. Used for the battery inlay.
pub const BOTTOM_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Bottom)
    .build();

/// Where a text run's anchor point sits relative to the rendered string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Datum {
    TopCenter,
    MiddleCenter,
    BottomLeft,
    BottomRight,
}

impl Datum {
    /// The `embedded_graphics` text style for this anchor.
    #[inline]
    pub const fn text_style(self) -> TextStyle {
        match self {
            Self::TopCenter => TOP_CENTER,
            Self::MiddleCenter => MIDDLE_CENTER,
            Self::BottomLeft => BOTTOM_LEFT,
            Self::BottomRight => BOTTOM_RIGHT,
        }
    }
}

// =============================================================================
// Text Sizes
// =============================================================================

/// Text size tiers, numbered after the panel firmware's text sizes 2 through 7.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum TextSize {
    /// Size 2: inlays, moon info line, ISS duration.
    Tiny,
    /// Size 3: tile labels and secondary lines.
    Small,
    /// Size 4: date lines, large planet tier.
    Medium,
    /// Size 5: sun times, aurora level.
    Large,
    /// Size 6: aurora reading, ISS time.
    XLarge,
    /// Size 7: fallback big value.
    XXLarge,
}

/// Native face for [`TextSize::Tiny`].
const TINY_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

/// Native face for [`TextSize::Small`].
const SMALL_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Base face scaled up for [`TextSize::Medium`] and larger.
const SCALED_FONT: &MonoFont<'static> = &FONT_6X10;

/// A font plus the integer factor it is drawn at.
#[derive(Clone, Copy)]
pub struct TextFace {
    pub font: &'static MonoFont<'static>,
    pub scale: u32,
}

impl TextSize {
    /// Font face used to draw this size.
    pub const fn face(self) -> TextFace {
        match self {
            Self::Tiny => TextFace { font: TINY_FONT, scale: 1 },
            Self::Small => TextFace { font: SMALL_FONT, scale: 1 },
            Self::Medium => TextFace { font: SCALED_FONT, scale: 4 },
            Self::Large => TextFace { font: SCALED_FONT, scale: 5 },
            Self::XLarge => TextFace { font: SCALED_FONT, scale: 6 },
            Self::XXLarge => TextFace { font: SCALED_FONT, scale: 7 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_faces_grow_monotonically() {
        let sizes = [
            TextSize::Medium,
            TextSize::Large,
            TextSize::XLarge,
            TextSize::XXLarge,
        ];
        for pair in sizes.windows(2) {
            let a = pair[0].face();
            let b = pair[1].face();
            let wa = a.font.character_size.width * a.scale;
            let wb = b.font.character_size.width * b.scale;
            assert!(wa < wb, "{:?} should be narrower than {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_native_faces_are_unscaled() {
        assert_eq!(TextSize::Tiny.face().scale, 1);
        assert_eq!(TextSize::Small.face().scale, 1);
    }

    #[test]
    fn test_datum_styles() {
        assert_eq!(Datum::TopCenter.text_style().alignment, Alignment::Center);
        assert_eq!(Datum::TopCenter.text_style().baseline, Baseline::Top);
        assert_eq!(Datum::BottomRight.text_style().alignment, Alignment::Right);
        assert_eq!(Datum::BottomLeft.text_style().baseline, Baseline::Bottom);
        assert_eq!(Datum::MiddleCenter.text_style().baseline, Baseline::Middle);
    }
}
