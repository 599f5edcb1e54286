//! Per-widget presence test and the declarative widget table.
//!
//! Each data widget resolves to one of three states:
//!
//! | State | Condition | Tile content |
//! |-------|-----------|--------------|
//! | [`WidgetState::Missing`] | key absent, or value not an object | generic "no data" tile |
//! | [`WidgetState::Errored`] | object with an error indicator | widget's unavailable message |
//! | [`WidgetState::Ready`] | object without an error indicator | widget renderer |
//!
//! Widgets without a dedicated unavailable message fall back to the generic
//! tile when errored too, so no tile is ever left blank.

use crate::colors::BLACK;
use crate::config::LABEL_Y;
use crate::data::{DashboardData, WidgetKind, WidgetRecord};
use crate::grid::Tile;
use crate::render::DisplayList;
use crate::styles::TextSize;
use crate::widgets::{
    draw_centered,
    draw_label,
    draw_simple_tile,
    render_aurora,
    render_iss,
    render_moon,
    render_planets,
    render_sun,
};

/// Sub line of the generic fallback tile.
pub const NO_DATA: &str = "no data";

/// Renderer signature shared by all data tiles.
pub type RenderFn = fn(&mut DisplayList, Tile, &WidgetRecord<'_>);

/// Outcome of the presence test for one widget.
#[derive(Clone, Copy, Debug)]
pub enum WidgetState<'a> {
    Missing,
    Errored(WidgetRecord<'a>),
    Ready(WidgetRecord<'a>),
}

impl WidgetState<'_> {
    /// Short name for log output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Errored(_) => "errored",
            Self::Ready(_) => "ready",
        }
    }
}

/// Apply the presence test to `kind` in `data`.
pub fn resolve(
    data: &DashboardData,
    kind: WidgetKind,
) -> WidgetState<'_> {
    let Some(value) = data.get(kind.key()) else {
        return WidgetState::Missing;
    };
    let record = WidgetRecord::new(value);
    if !record.is_object() {
        WidgetState::Missing
    } else if record.is_error_flagged() {
        WidgetState::Errored(record)
    } else {
        WidgetState::Ready(record)
    }
}

/// One line of a widget's unavailable message.
#[derive(Clone, Copy, Debug)]
pub struct UnavailableLine {
    pub text: &'static str,
    /// Offset below the tile top.
    pub dy: i32,
}

/// Everything the composer needs to draw one data widget in any state.
#[derive(Clone, Copy, Debug)]
pub struct WidgetSlot {
    pub kind: WidgetKind,
    pub tile: Tile,
    pub label: &'static str,
    /// Big value of the generic fallback tile.
    pub fallback_value: &'static str,
    pub render: RenderFn,
    /// Unavailable message. Empty means the generic tile is used when errored.
    pub unavailable: &'static [UnavailableLine],
}

/// The five data widgets, in dispatch order.
pub const WIDGET_SLOTS: [WidgetSlot; 5] = [
    WidgetSlot {
        kind: WidgetKind::Sun,
        tile: Tile::SUN,
        label: "SUN",
        fallback_value: "--:--",
        render: render_sun,
        unavailable: &[],
    },
    WidgetSlot {
        kind: WidgetKind::Moon,
        tile: Tile::MOON,
        label: "MOON",
        fallback_value: "?",
        render: render_moon,
        unavailable: &[],
    },
    WidgetSlot {
        kind: WidgetKind::Planets,
        tile: Tile::PLANETS,
        label: "PLANETS",
        fallback_value: "?",
        render: render_planets,
        unavailable: &[],
    },
    WidgetSlot {
        kind: WidgetKind::Aurora,
        tile: Tile::AURORA,
        label: "AURORA",
        fallback_value: "?",
        render: render_aurora,
        unavailable: &[UnavailableLine {
            text: "Unavailable",
            dy: 110,
        }],
    },
    WidgetSlot {
        kind: WidgetKind::Iss,
        tile: Tile::ISS,
        label: "ISS PASS",
        fallback_value: "?",
        render: render_iss,
        unavailable: &[
            UnavailableLine {
                text: "No visible",
                dy: 90,
            },
            UnavailableLine {
                text: "pass soon",
                dy: 135,
            },
        ],
    },
];

impl WidgetSlot {
    /// Draw this widget's tile for `state`.
    pub fn draw(
        &self,
        list: &mut DisplayList,
        state: &WidgetState<'_>,
    ) {
        match state {
            WidgetState::Ready(record) => (self.render)(list, self.tile, record),
            WidgetState::Errored(_) if !self.unavailable.is_empty() => self.draw_unavailable(list),
            WidgetState::Errored(_) | WidgetState::Missing => self.draw_generic(list),
        }
    }

    /// Generic fallback tile: label, placeholder value and "no data".
    pub fn draw_generic(
        &self,
        list: &mut DisplayList,
    ) {
        draw_simple_tile(list, self.tile, self.label, self.fallback_value, NO_DATA);
    }

    /// Label plus the widget's unavailable lines.
    pub fn draw_unavailable(
        &self,
        list: &mut DisplayList,
    ) {
        draw_label(list, self.tile, LABEL_Y, self.label);
        for line in self.unavailable {
            draw_centered(list, self.tile, line.dy, line.text, TextSize::Small, BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn slot(kind: WidgetKind) -> WidgetSlot {
        *WIDGET_SLOTS.iter().find(|s| s.kind == kind).expect("every kind has a slot")
    }

    fn draw(
        data: &DashboardData,
        kind: WidgetKind,
    ) -> DisplayList {
        let mut list = DisplayList::new();
        slot(kind).draw(&mut list, &resolve(data, kind));
        list
    }

    #[test]
    fn test_table_covers_every_kind_once() {
        for kind in WidgetKind::ALL {
            assert_eq!(WIDGET_SLOTS.iter().filter(|s| s.kind == kind).count(), 1, "{kind:?}");
        }
        let order: Vec<_> = WIDGET_SLOTS.iter().map(|s| s.kind).collect();
        assert_eq!(order, WidgetKind::ALL);
    }

    #[test]
    fn test_resolve_states() {
        let data = DashboardData::from(json!({
            "sun": {"sunrise": "07:00"},
            "moon": {"error": "timeout"},
            "planets": "garbage"
        }));
        assert!(matches!(resolve(&data, WidgetKind::Sun), WidgetState::Ready(_)));
        assert!(matches!(resolve(&data, WidgetKind::Moon), WidgetState::Errored(_)));
        assert!(matches!(resolve(&data, WidgetKind::Planets), WidgetState::Missing));
        assert!(matches!(resolve(&data, WidgetKind::Iss), WidgetState::Missing));
    }

    #[test]
    fn test_missing_aurora_is_generic() {
        let list = draw(&DashboardData::default(), WidgetKind::Aurora);
        assert!(list.contains_text("AURORA"));
        assert!(list.contains_text("?"));
        assert!(list.contains_text(NO_DATA));
        assert!(!list.contains_text("Unavailable"));
    }

    #[test]
    fn test_errored_aurora_is_unavailable() {
        let data = DashboardData::from(json!({"aurora": {"error": true}}));
        let list = draw(&data, WidgetKind::Aurora);
        assert!(list.contains_text("Unavailable"));
        assert!(!list.contains_text(NO_DATA));
    }

    #[test]
    fn test_errored_iss_two_lines() {
        let data = DashboardData::from(json!({"iss": {"error": "no passes"}}));
        let list = draw(&data, WidgetKind::Iss);
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text.as_str(), "No visible");
        assert_eq!(runs[1].anchor.y, 270 + 90);
        assert_eq!(runs[2].text.as_str(), "pass soon");
        assert_eq!(runs[2].anchor.y, 270 + 135);
    }

    #[test]
    fn test_errored_sun_is_generic() {
        let data = DashboardData::from(json!({"sun": {"error": true, "sunrise": "07:00"}}));
        let list = draw(&data, WidgetKind::Sun);
        assert!(list.contains_text("--:--"));
        assert!(list.contains_text(NO_DATA));
        assert!(!list.contains_text("07:00"));
    }

    #[test]
    fn test_missing_is_deterministic() {
        let data = DashboardData::default();
        for kind in WidgetKind::ALL {
            assert_eq!(draw(&data, kind), draw(&data, kind), "{kind:?} fallback should be stable");
        }
    }

    #[test]
    fn test_every_state_draws_text() {
        let errored = DashboardData::from(json!({
            "sun": {"error": true}, "moon": {"error": true}, "planets": {"error": true},
            "aurora": {"error": true}, "iss": {"error": true}
        }));
        let ready = DashboardData::from(json!({
            "sun": {}, "moon": {}, "planets": {}, "aurora": {}, "iss": {}
        }));
        for data in [DashboardData::default(), errored, ready] {
            for kind in WidgetKind::ALL {
                assert!(draw(&data, kind).texts().count() >= 2, "{kind:?} tile is blank");
            }
        }
    }
}
