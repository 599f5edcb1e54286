//! Host simulator for the astronomy dashboard.
//!
//! Loads a dashboard JSON document, renders it exactly as the panel would, and
//! exports the frame as a grayscale PNG. With the `window` feature the frame is
//! also shown in an SDL window.
//!
//! ```text
//! simulator --input dashboard.json --battery-mv 3950 --output dashboard.png --scale 2
//! simulator --input dashboard.json --at 2026-10-19T21:05 -v
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` to filter, or pass
//! `--verbose` for debug output including per-widget fallback decisions.

use std::path::PathBuf;
use std::process::ExitCode;

use astro_dashboard::clock::{Clock, ClockReading, FixedClock, SystemClock};
use astro_dashboard::colors::Shade;
use astro_dashboard::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use astro_dashboard::widgets::battery_percent;
use astro_dashboard::{DashboardComposer, DashboardData, Error, Frame, Panel, Result, UpdateMode};
use chrono::NaiveDateTime;
use clap::Parser;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Render the astronomy dashboard to a PNG", long_about = None)]
struct Cli {
    /// Dashboard JSON document
    #[arg(short, long, default_value = "dashboard.json")]
    input: PathBuf,

    /// Battery level in percent
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,

    /// Battery voltage in millivolts, mapped onto 0-100% (overrides --battery)
    #[arg(long)]
    battery_mv: Option<u32>,

    /// Output PNG path
    #[arg(short, long, default_value = "dashboard.png")]
    output: PathBuf,

    /// Pixel scale of the exported image
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Render at a fixed local time (YYYY-MM-DDTHH:MM) instead of the system clock
    #[arg(long, value_parser = parse_at)]
    at: Option<ClockReading>,

    /// Show the frame in a window after exporting it (needs the `window` feature)
    #[arg(long)]
    window: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_at(value: &str) -> Result<ClockReading> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map(ClockReading::from)
        .map_err(|e| Error::InvalidClock(format!("{value}: {e}")))
}

/// Panel stand-in that writes every flushed frame to a PNG file.
struct PngPanel {
    path: PathBuf,
    settings: OutputSettings,
    display: SimulatorDisplay<Gray4>,
}

impl PngPanel {
    fn new(
        path: PathBuf,
        scale: u32,
    ) -> Self {
        Self {
            path,
            settings: OutputSettingsBuilder::new().scale(scale.max(1)).build(),
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        }
    }
}

impl Panel for PngPanel {
    type Error = Error;

    fn flush(
        &mut self,
        frame: &Frame,
        mode: UpdateMode,
    ) -> Result<()> {
        let pixels = frame.pixels().map(|(point, level)| Pixel(point, Shade::new(level).to_gray4()));
        self.display.draw_iter(pixels).ok();

        self.display
            .to_grayscale_output_image(&self.settings)
            .save_png(&self.path)
            .map_err(|e| Error::Export(format!("{}: {e}", self.path.display())))?;

        info!(path = %self.path.display(), ?mode, "frame exported");
        Ok(())
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = DashboardData::load(&cli.input)?;
    let battery = cli.battery_mv.map_or(cli.battery, battery_percent);

    let clock: Box<dyn Clock> = match cli.at {
        Some(reading) => Box::new(FixedClock(reading)),
        None => Box::new(SystemClock),
    };

    let mut panel = PngPanel::new(cli.output.clone(), cli.scale);
    DashboardComposer::new(clock).render(&data, battery, &mut panel)?;

    if cli.window {
        show_window(&panel);
    }

    Ok(())
}

#[cfg(feature = "window")]
fn show_window(panel: &PngPanel) {
    embedded_graphics_simulator::Window::new("Astro Dashboard", &panel.settings).show_static(&panel.display);
}

#[cfg(not(feature = "window"))]
fn show_window(_panel: &PngPanel) {
    warn!("built without the `window` feature, ignoring --window");
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!(input = %cli.input.display(), "rendering dashboard");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
