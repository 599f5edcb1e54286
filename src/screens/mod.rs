//! Full-screen messages shown instead of the dashboard.
//!
//! # Screen Flow
//!
//! 1. **Boot** ([`boot_screen`]): shown once after power-on
//! 2. **Status** ([`status_screen`]): progress while connecting and fetching
//! 3. Dashboard (see [`composer`](crate::composer))
//!
//! On failure the network layer shows [`no_wifi_screen`] or [`error_screen`]
//! and goes back to sleep until the next refresh.
//!
//! Every screen is a white surface with middle-centre text on the vertical
//! axis of the panel. Like the dashboard, screens are display lists that the
//! caller hands to [`present`](crate::composer::present) for a full refresh.

mod failure;
mod status;

pub use failure::{error_screen, no_wifi_screen};
pub use status::{boot_screen, status_screen};
