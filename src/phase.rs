//! Lunar phase disc rasterization.
//!
//! The terminator of a sphere lit from the side projects onto the disc as half
//! an ellipse. On a scanline at offset `dy` from the centre the disc spans
//! `[-w, w]` with `w = sqrt(r² - dy²)`, and the terminator sits at `w·k` where
//! `k = cos(2π·phase)`. Waxing phases (`phase <= 0.5`) are dark from the left
//! limb to the terminator; waning phases are dark from the terminator to the
//! right limb.
//!
//! ```text
//!  phase 0.0     0.25      0.5      0.75
//!    ████      ██░░       ░░░░      ░░██
//!   ██████    ███░░░     ░░░░░░    ░░░███
//!    ████      ██░░       ░░░░      ░░██
//!    new      first q.    full     last q.
//! ```
//!
//! Both span ends are rounded relative to the centre column. A waxing run
//! covers columns `[-limb, terminator)` and a waning run `(-terminator, limb]`,
//! so `phase` and `1 - phase` rasterize as exact left/right mirror images.

use core::f32::consts::PI;

use embedded_graphics::prelude::Point;

use crate::colors::BLACK;
use crate::render::DisplayList;

/// Dark run on one scanline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DarkSpan {
    pub start: Point,
    pub len: u32,
}

/// A moon disc at a fixed position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoonDisc {
    pub center: Point,
    pub radius: u32,
}

impl MoonDisc {
    pub const fn new(
        center: Point,
        radius: u32,
    ) -> Self {
        Self { center, radius }
    }

    /// Half-chord of the disc `dy` rows from the centre.
    #[inline]
    fn half_chord(
        &self,
        dy: i32,
    ) -> f32 {
        let r = self.radius as i32;
        ((r * r - dy * dy) as f32).sqrt()
    }

    /// Dark runs for `phase` (in `[0, 1)`), top to bottom.
    ///
    /// Rows whose half-chord is under one pixel and rows with no dark run are
    /// skipped.
    pub fn dark_spans(
        &self,
        phase: f32,
    ) -> impl Iterator<Item = DarkSpan> + '_ {
        let waxing = phase <= 0.5;
        // cos is symmetric about the full moon; folding keeps mirrored phases bit-identical
        let folded = if waxing { phase } else { 1.0 - phase };
        let k = (2.0 * PI * folded).cos();
        let r = self.radius as i32;

        (-r..=r).filter_map(move |dy| {
            let w = self.half_chord(dy);
            if w < 1.0 {
                return None;
            }
            let limb = w.round() as i32;
            let terminator = (w * k).round() as i32;
            let len = limb + terminator;
            if len <= 0 {
                return None;
            }
            let left = if waxing { -limb } else { 1 - terminator };
            Some(DarkSpan {
                start: Point::new(self.center.x + left, self.center.y + dy),
                len: len as u32,
            })
        })
    }

    /// Record the dark spans followed by the disc outline.
    pub fn draw(
        &self,
        phase: f32,
        list: &mut DisplayList,
    ) {
        for span in self.dark_spans(phase) {
            list.span(span.start, span.len, BLACK);
        }
        list.circle(self.center, self.radius, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    const DISC: MoonDisc = MoonDisc::new(Point::new(800, 115), 55);

    /// Total disc width across all rendered rows.
    fn disc_area(disc: &MoonDisc) -> u32 {
        let r = disc.radius as i32;
        (-r..=r)
            .map(|dy| disc.half_chord(dy))
            .filter(|w| *w >= 1.0)
            .map(|w| 2 * w.round() as u32)
            .sum()
    }

    fn dark_area(phase: f32) -> u32 { DISC.dark_spans(phase).map(|s| s.len).sum() }

    fn lit_fraction(phase: f32) -> f32 { 1.0 - dark_area(phase) as f32 / disc_area(&DISC) as f32 }

    /// Dark pixels strictly left and strictly right of the centre column.
    fn dark_sides(phase: f32) -> (u32, u32) {
        let cx = DISC.center.x;
        DISC.dark_spans(phase).fold((0, 0), |(l, r), s| {
            let end = s.start.x + s.len as i32;
            let left = (cx.min(end) - s.start.x).max(0) as u32;
            let right = (end - s.start.x.max(cx + 1)).max(0) as u32;
            (l + left, r + right)
        })
    }

    fn rasterize(phase: f32) -> Frame {
        let mut list = DisplayList::new();
        DISC.draw(phase, &mut list);
        let mut frame = Frame::new();
        list.draw(&mut frame);
        frame
    }

    /// Pixels of `phase` that differ from the horizontally flipped `1 - phase`.
    fn mirror_mismatches(phase: f32) -> usize {
        let a = rasterize(phase);
        let b = rasterize(1.0 - phase);
        let (cx, cy) = (DISC.center.x, DISC.center.y);
        let r = DISC.radius as i32 + 1;
        (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| a.level_at(Point::new(cx + dx, cy + dy)) != b.level_at(Point::new(cx - dx, cy + dy)))
            .count()
    }

    #[test]
    fn test_new_moon_is_fully_dark() {
        assert!(lit_fraction(0.0) < 0.01, "new moon lit fraction {}", lit_fraction(0.0));
    }

    #[test]
    fn test_full_moon_is_fully_lit() {
        assert_eq!(dark_area(0.5), 0, "full moon should have no dark spans");
    }

    #[test]
    fn test_quarters_are_half_lit_on_opposite_sides() {
        let first = lit_fraction(0.25);
        let last = lit_fraction(0.75);
        assert!((first - 0.5).abs() < 0.03, "first quarter lit fraction {first}");
        assert!((last - 0.5).abs() < 0.03, "last quarter lit fraction {last}");

        let (l, r) = dark_sides(0.25);
        assert!(l > 0 && r == 0, "first quarter should be dark on the left only, got ({l}, {r})");
        let (l, r) = dark_sides(0.75);
        assert!(l == 0 && r > 0, "last quarter should be dark on the right only, got ({l}, {r})");
    }

    #[test]
    fn test_mirror_phases_have_equal_dark_runs() {
        // dyadic steps keep 1 - f exact
        for step in 1..32 {
            let f = step as f32 / 64.0;
            let a: Vec<u32> = DISC.dark_spans(f).map(|s| s.len).collect();
            let b: Vec<u32> = DISC.dark_spans(1.0 - f).map(|s| s.len).collect();
            assert_eq!(a, b, "dark runs differ between {f} and {}", 1.0 - f);

            let (al, ar) = dark_sides(f);
            let (bl, br) = dark_sides(1.0 - f);
            assert_eq!((al, ar), (br, bl), "phase {f} should be dark on the opposite side of 1-{f}");
        }
    }

    #[test]
    fn test_mirror_phases_rasterize_as_mirror_images() {
        for f in [0.0, 0.125, 0.25, 0.3, 0.375, 0.45, 0.7] {
            assert_eq!(mirror_mismatches(f), 0, "phase {f} is not the mirror image of 1-{f}");
        }
    }

    #[test]
    fn test_lit_fraction_grows_while_waxing() {
        let mut previous = -1.0;
        for step in 0..=10 {
            let lit = lit_fraction(step as f32 * 0.05);
            assert!(lit + 1e-3 >= previous, "lit fraction should not shrink while waxing");
            previous = lit;
        }
    }

    #[test]
    fn test_spans_stay_inside_disc() {
        for phase in [0.0, 0.1, 0.3, 0.6, 0.9] {
            for span in DISC.dark_spans(phase) {
                let dy = span.start.y - DISC.center.y;
                let w = DISC.half_chord(dy).round() as i32;
                assert!(span.start.x >= DISC.center.x - w, "span starts outside the left limb");
                let last = span.start.x + span.len as i32 - 1;
                assert!(last <= DISC.center.x + w, "span ends outside the right limb");
            }
        }
    }

    #[test]
    fn test_draw_ends_with_outline() {
        let mut list = DisplayList::new();
        DISC.draw(0.0, &mut list);
        assert!(list.len() > 100, "new moon should record one span per row");
        assert!(matches!(
            list.commands().last(),
            Some(crate::render::DrawCommand::Circle { radius: 55, .. })
        ));
    }
}
