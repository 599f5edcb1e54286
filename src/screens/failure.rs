//! Error and Wi-Fi failure screens.

use embedded_graphics::prelude::Point;

use crate::colors::{BLACK, WHITE};
use crate::config::CENTER_X;
use crate::render::{DisplayList, line};
use crate::styles::{Datum, TextSize};

const ERROR_TITLE_Y: i32 = 240;
const ERROR_MESSAGE_Y: i32 = 290;

const WIFI_TITLE_Y: i32 = 220;
const WIFI_HINT_Y: i32 = 280;
const WIFI_RETRY_Y: i32 = 320;

fn centered(
    list: &mut DisplayList,
    y: i32,
    text: &str,
    size: TextSize,
) {
    list.text(text, Point::new(CENTER_X, y), size, BLACK, Datum::MiddleCenter);
}

/// Generic failure with a one-line reason. Long reasons are truncated.
pub fn error_screen(message: &str) -> DisplayList {
    let mut list = DisplayList::new();
    list.clear(WHITE);
    centered(&mut list, ERROR_TITLE_Y, "Error", TextSize::Small);
    centered(&mut list, ERROR_MESSAGE_Y, message, TextSize::Tiny);
    list
}

/// Wi-Fi association failed; the device retries after `refresh_mins`.
pub fn no_wifi_screen(refresh_mins: u32) -> DisplayList {
    let mut list = DisplayList::new();
    list.clear(WHITE);
    centered(&mut list, WIFI_TITLE_Y, "WiFi Failed", TextSize::Small);
    centered(&mut list, WIFI_HINT_Y, "Check SSID/password", TextSize::Tiny);
    let retry = line(format_args!("Retrying in {refresh_mins} min..."));
    centered(&mut list, WIFI_RETRY_Y, &retry, TextSize::Tiny);
    list
}
