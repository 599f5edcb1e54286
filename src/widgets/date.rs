//! Date tile: weekday, day and month, year.
//!
//! The clock registers are used as read. Lookups are range-checked here, and
//! an index outside the table renders `???` rather than a wrong name.

use crate::clock::ClockReading;
use crate::colors::{BLACK, DARK};
use crate::config::LABEL_Y_LOW;
use crate::grid::Tile;
use crate::render::{DisplayList, line};
use crate::styles::TextSize;
use crate::widgets::primitives::{draw_centered, draw_label};

/// Shown for a weekday or month index outside its table.
pub const INVALID_INDEX: &str = "???";

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_Y: i32 = 65;
const DAY_MONTH_Y: i32 = 115;
const YEAR_Y: i32 = 165;

/// Short weekday name for `index` (0 = Sunday).
pub fn weekday_name(index: u8) -> &'static str { WEEKDAYS.get(usize::from(index)).copied().unwrap_or(INVALID_INDEX) }

/// Short month name for `month` (1 = January).
pub fn month_name(month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or(INVALID_INDEX)
}

/// Draw the date tile from a clock reading.
pub fn draw_date_tile(
    list: &mut DisplayList,
    tile: Tile,
    now: &ClockReading,
) {
    draw_label(list, tile, LABEL_Y_LOW, "DATE");

    draw_centered(list, tile, WEEKDAY_Y, weekday_name(now.weekday), TextSize::Medium, BLACK);

    let day_month = line(format_args!("{} {}", now.day, month_name(now.month)));
    draw_centered(list, tile, DAY_MONTH_Y, &day_month, TextSize::Medium, BLACK);

    let year = line(format_args!("{:04}", now.year));
    draw_centered(list, tile, YEAR_Y, &year, TextSize::Small, DARK);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(
        weekday: u8,
        month: u8,
    ) -> ClockReading {
        ClockReading {
            year: 2026,
            month,
            day: 19,
            weekday,
            hour: 21,
            minute: 5,
            second: 0,
        }
    }

    #[test]
    fn test_valid_date_lines() {
        let mut list = DisplayList::new();
        draw_date_tile(&mut list, Tile::DATE, &reading(1, 10));
        assert!(list.contains_text("DATE"));
        assert!(list.contains_text("Mon"));
        assert!(list.contains_text("19 Oct"));
        assert!(list.contains_text("2026"));
    }

    #[test]
    fn test_invalid_weekday_and_month() {
        let mut list = DisplayList::new();
        draw_date_tile(&mut list, Tile::DATE, &reading(9, 13));
        let invalid: Vec<_> = list.texts().filter(|r| r.text.contains(INVALID_INDEX)).collect();
        assert_eq!(invalid.len(), 2, "both weekday and month lines should show the placeholder");
        assert!(list.contains_text("???"));
        assert!(list.contains_text("19 ???"));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_name(0), INVALID_INDEX);
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(13), INVALID_INDEX);
        assert_eq!(weekday_name(0), "Sun");
        assert_eq!(weekday_name(6), "Sat");
        assert_eq!(weekday_name(7), INVALID_INDEX);
    }

    #[test]
    fn test_year_is_zero_padded() {
        let mut list = DisplayList::new();
        let mut now = reading(0, 1);
        now.year = 987;
        draw_date_tile(&mut list, Tile::DATE, &now);
        assert!(list.contains_text("0987"));
    }
}
