//! Size, spacing and vertical centring for a variable-length text list.
//!
//! Short lists (up to three lines) use the large tier; longer lists switch to
//! the small tier. The block of all `count` lines is centred vertically in a
//! 210px band starting 45px below the tile top, and only the first five lines
//! are drawn. Lists longer than five therefore start above the band.

use crate::config::{
    LIST_AREA_HEIGHT,
    LIST_AREA_TOP,
    LIST_LARGE_SPACING,
    LIST_LARGE_TIER_MAX,
    LIST_RENDER_CAP,
    LIST_SMALL_SPACING,
};
use crate::styles::TextSize;

/// Computed placement for a list of `count` items.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListLayout {
    /// Number of lines actually drawn, `min(count, 5)`.
    pub rendered: usize,
    pub size: TextSize,
    /// Distance between consecutive line tops.
    pub spacing: i32,
    /// Offset of the first line below the tile top.
    pub start: i32,
}

impl ListLayout {
    /// Lay out `count` items. Tier and centring both follow `count`; only the
    /// number of drawn lines is capped.
    pub const fn new(count: usize) -> Self {
        let rendered = if count < LIST_RENDER_CAP { count } else { LIST_RENDER_CAP };
        let (size, spacing) = if count <= LIST_LARGE_TIER_MAX {
            (TextSize::Medium, LIST_LARGE_SPACING)
        } else {
            (TextSize::Small, LIST_SMALL_SPACING)
        };
        let block = (count as i32).saturating_mul(spacing);
        Self {
            rendered,
            size,
            spacing,
            start: LIST_AREA_TOP + (LIST_AREA_HEIGHT - block) / 2,
        }
    }

    /// Offset below the tile top of line `index`.
    #[inline]
    pub const fn line_y(
        &self,
        index: usize,
    ) -> i32 {
        self.start + index as i32 * self.spacing
    }
}
