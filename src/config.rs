//! Display and layout configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Tile geometry, separator positions and inlay anchors are computed at compile
//! time as `const`. Renderers add tile-relative offsets to a tile origin and never
//! recompute the grid.
//!
//! ```text
//! ┌──────────┬──────────┬──────────┐
//! │   DATE   │   SUN    │   MOON   │  270px
//! ├──────────┼──────────┼──────────┤
//! │ PLANETS  │  AURORA  │ ISS PASS │  270px
//! └──────────┴──────────┴──────────┘
//!    320px      320px      320px
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Panel width in pixels (960x540 e-paper, landscape).
pub const SCREEN_WIDTH: u32 = 960;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 540;

/// Screen center X coordinate. Used for status screens.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for status screens.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Minutes between dashboard refreshes. Shown on the Wi-Fi failure screen.
pub const REFRESH_MINS: u32 = 30;

// =============================================================================
// Tile Grid
// =============================================================================

/// Number of tile columns.
pub const GRID_COLS: u32 = 3;

/// Number of tile rows.
pub const GRID_ROWS: u32 = 2;

/// Width of one tile.
pub const TILE_WIDTH: u32 = SCREEN_WIDTH / GRID_COLS;

/// Height of one tile.
pub const TILE_HEIGHT: u32 = SCREEN_HEIGHT / GRID_ROWS;

/// Width of the grid separator bars, centred on tile boundaries.
pub const GRID_GAP: u32 = 10;

const _: () = assert!(TILE_WIDTH * GRID_COLS == SCREEN_WIDTH);
const _: () = assert!(TILE_HEIGHT * GRID_ROWS == SCREEN_HEIGHT);

// =============================================================================
// Tile-relative Offsets
// =============================================================================

/// Label y offset for data tiles.
pub const LABEL_Y: i32 = 10;

/// Label y offset for the date tile and generic fallback tiles.
pub const LABEL_Y_LOW: i32 = 18;

/// Big value y offset for generic fallback tiles.
pub const FALLBACK_VALUE_Y: i32 = 80;

/// Sub line y offset for generic fallback tiles.
pub const FALLBACK_SUB_Y: i32 = 155;

// =============================================================================
// Moon Disc
// =============================================================================

/// Mean synodic month length in days, used to normalize the moon age.
pub const SYNODIC_MONTH_DAYS: f32 = 29.53;

/// Disc centre y offset inside the moon tile.
pub const MOON_DISC_Y: i32 = 115;

/// Disc radius in pixels.
pub const MOON_DISC_RADIUS: u32 = 55;

// =============================================================================
// Planet List
// =============================================================================

/// Maximum number of list lines rendered.
pub const LIST_RENDER_CAP: usize = 5;

/// Lists with at most this many items use the large tier.
pub const LIST_LARGE_TIER_MAX: usize = 3;

/// Line spacing of the large tier.
pub const LIST_LARGE_SPACING: i32 = 55;

/// Line spacing of the small tier.
pub const LIST_SMALL_SPACING: i32 = 42;

/// Top of the list sub-area, relative to the tile.
pub const LIST_AREA_TOP: i32 = 45;

/// Height of the list sub-area the block is centred in.
pub const LIST_AREA_HEIGHT: i32 = 210;

const _: () = assert!(LIST_LARGE_SPACING * LIST_LARGE_TIER_MAX as i32 <= LIST_AREA_HEIGHT);
const _: () = assert!(LIST_SMALL_SPACING * LIST_RENDER_CAP as i32 <= LIST_AREA_HEIGHT);

// =============================================================================
// Aurora Severity Bar
// =============================================================================

/// Horizontal inset of the severity bar from the tile edges.
pub const SEVERITY_BAR_INSET: u32 = 40;

/// Severity bar y offset.
pub const SEVERITY_BAR_Y: i32 = 230;

/// Severity bar thickness.
pub const SEVERITY_BAR_HEIGHT: u32 = 8;

// =============================================================================
// Inlays
// =============================================================================

/// Bottom-left anchor of the "last update" inlay.
pub const INLAY_UPDATED_X: i32 = 8;

/// Bottom-right anchor of the battery inlay.
pub const INLAY_BATTERY_X: i32 = SCREEN_WIDTH as i32 - 8;

/// Baseline (bottom) of both inlays.
pub const INLAY_BOTTOM_Y: i32 = SCREEN_HEIGHT as i32 - 6;

// =============================================================================
// Battery Gauge
// =============================================================================

/// Battery voltage reported as 0%.
pub const BATTERY_EMPTY_MV: u32 = 3300;

/// Battery voltage reported as 100%.
pub const BATTERY_FULL_MV: u32 = 4200;

const _: () = assert!(BATTERY_EMPTY_MV < BATTERY_FULL_MV);

// =============================================================================
// Text
// =============================================================================

/// Maximum characters in one formatted text line.
pub const LINE_CAPACITY: usize = 32;
