//! Boot and progress screens.

use embedded_graphics::prelude::Point;

use crate::colors::{BLACK, MID, WHITE};
use crate::config::{CENTER_X, CENTER_Y};
use crate::render::DisplayList;
use crate::styles::{Datum, TextSize};

/// Message row when a sub line follows it.
const MESSAGE_WITH_SUB_Y: i32 = 240;

/// Sub line row.
const SUB_Y: i32 = 300;

/// First screen after power-on.
pub fn boot_screen() -> DisplayList {
    let mut list = DisplayList::new();
    list.clear(WHITE);
    list.text("BOOTING...", Point::new(CENTER_X, CENTER_Y), TextSize::Medium, BLACK, Datum::MiddleCenter);
    list
}

/// A large message with an optional small sub line underneath.
///
/// Without a sub line the message sits on the screen centre; with one, the
/// message moves up to make room.
pub fn status_screen(
    message: &str,
    sub: Option<&str>,
) -> DisplayList {
    let mut list = DisplayList::new();
    list.clear(WHITE);

    let message_y = if sub.is_some() { MESSAGE_WITH_SUB_Y } else { CENTER_Y };
    list.text(message, Point::new(CENTER_X, message_y), TextSize::Large, BLACK, Datum::MiddleCenter);

    if let Some(sub) = sub {
        list.text(sub, Point::new(CENTER_X, SUB_Y), TextSize::Tiny, MID, Datum::MiddleCenter);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    #[test]
    fn test_boot_screen() {
        let list = boot_screen();
        assert_eq!(list.commands()[0], DrawCommand::Clear(WHITE));
        let run = list.texts().next().expect("boot text");
        assert_eq!(run.text.as_str(), "BOOTING...");
        assert_eq!(run.anchor, Point::new(480, 270));
        assert_eq!(run.datum, Datum::MiddleCenter);
    }

    #[test]
    fn test_status_without_sub_is_centred() {
        let list = status_screen("Connecting", None);
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].anchor.y, 270);
        assert_eq!(runs[0].size, TextSize::Large);
    }

    #[test]
    fn test_status_with_sub_moves_up() {
        let list = status_screen("Fetching", Some("astro.local"));
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].anchor.y, 240);
        assert_eq!(runs[1].anchor.y, 300);
        assert_eq!(runs[1].shade, MID);
        assert_eq!(runs[1].size, TextSize::Tiny);
    }
}
