//! Display list: the draw commands produced by one render pass.
//!
//! Renderers never touch a pixel surface directly. They append commands to a
//! [`DisplayList`], which is later replayed onto any
//! `DrawTarget<Color = Gray4>` (the [`Frame`](crate::frame::Frame) on the
//! panel, a `SimulatorDisplay` on the host). This keeps every renderer a pure
//! function of its input and lets tests inspect exactly what was drawn.
//!
//! # Commands
//!
//! | Command | Firmware equivalent |
//! |---------|---------------------|
//! | [`DrawCommand::Clear`] | `fillCanvas` |
//! | [`DrawCommand::FillRect`] | `fillRect` |
//! | [`DrawCommand::Span`] | `drawFastHLine` |
//! | [`DrawCommand::Circle`] | `drawCircle` |
//! | [`DrawCommand::Text`] | `drawString` with a datum |
//!
//! # Scaled Text
//!
//! Text sizes of 4 and above draw the 6x10 font through [`Scaled`], a
//! draw-target adapter that turns every glyph pixel into an `n`x`n` block.

use core::fmt::{self, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::Shade;
use crate::config::LINE_CAPACITY;
use crate::styles::{Datum, TextSize};

/// One formatted, fixed-capacity text line.
pub type Line = String<LINE_CAPACITY>;

/// Build a [`Line`] from format arguments, silently truncating overlong output.
pub fn line(args: fmt::Arguments<'_>) -> Line {
    let mut out = Truncating(Line::new());
    let _ = out.write_fmt(args);
    out.0
}

/// Build a [`Line`] from a plain string, truncating at capacity.
pub fn line_from(text: &str) -> Line {
    let mut out = Line::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// `fmt::Write` sink that drops characters once the line is full.
struct Truncating(Line);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Draw Commands
// =============================================================================

/// A single anchored string.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: Line,
    pub anchor: Point,
    pub size: TextSize,
    pub shade: Shade,
    pub datum: Datum,
}

impl TextRun {
    /// Pixel area covered by this run once rasterized.
    pub fn bounding_box(&self) -> Rectangle {
        let face = self.size.face();
        let style = MonoTextStyle::new(face.font, Gray4::BLACK);
        let local = Text::with_text_style(&self.text, Point::zero(), style, self.datum.text_style()).bounding_box();
        let scale = face.scale as i32;
        Rectangle::new(self.anchor + local.top_left * scale, local.size * face.scale)
    }
}

/// A drawing operation recorded by a renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Shade),
    /// Filled axis-aligned rectangle.
    FillRect { area: Rectangle, shade: Shade },
    /// One-pixel-high horizontal run starting at `start`, `len` pixels long.
    Span { start: Point, len: u32, shade: Shade },
    /// One-pixel circle outline.
    Circle { center: Point, radius: u32, shade: Shade },
    /// Anchored text.
    Text(TextRun),
}

/// Ordered draw commands for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub const fn new() -> Self { Self { commands: Vec::new() } }

    /// Record a full-surface clear.
    pub fn clear(
        &mut self,
        shade: Shade,
    ) {
        self.commands.push(DrawCommand::Clear(shade));
    }

    /// Record a filled rectangle.
    pub fn fill_rect(
        &mut self,
        area: Rectangle,
        shade: Shade,
    ) {
        self.commands.push(DrawCommand::FillRect { area, shade });
    }

    /// Record a horizontal run. Zero-length runs are dropped.
    pub fn span(
        &mut self,
        start: Point,
        len: u32,
        shade: Shade,
    ) {
        if len > 0 {
            self.commands.push(DrawCommand::Span { start, len, shade });
        }
    }

    /// Record a circle outline.
    pub fn circle(
        &mut self,
        center: Point,
        radius: u32,
        shade: Shade,
    ) {
        self.commands.push(DrawCommand::Circle { center, radius, shade });
    }

    /// Record an anchored string.
    pub fn text(
        &mut self,
        text: &str,
        anchor: Point,
        size: TextSize,
        shade: Shade,
        datum: Datum,
    ) {
        self.commands.push(DrawCommand::Text(TextRun {
            text: line_from(text),
            anchor,
            size,
            shade,
            datum,
        }));
    }

    /// All recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Whether any text run reads exactly `text`.
    pub fn contains_text(
        &self,
        text: &str,
    ) -> bool {
        self.texts().any(|run| run.text.as_str() == text)
    }

    /// Number of recorded commands.
    #[inline]
    pub fn len(&self) -> usize { self.commands.len() }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Replay every command onto a draw target.
    pub fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Gray4>,
    {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Clear(shade) => {
                    target.clear(shade.to_gray4()).ok();
                }
                DrawCommand::FillRect { area, shade } => {
                    area.into_styled(PrimitiveStyle::with_fill(shade.to_gray4()))
                        .draw(target)
                        .ok();
                }
                DrawCommand::Span { start, len, shade } => {
                    Rectangle::new(*start, Size::new(*len, 1))
                        .into_styled(PrimitiveStyle::with_fill(shade.to_gray4()))
                        .draw(target)
                        .ok();
                }
                DrawCommand::Circle { center, radius, shade } => {
                    Circle::with_center(*center, radius * 2 + 1)
                        .into_styled(PrimitiveStyle::with_stroke(shade.to_gray4(), 1))
                        .draw(target)
                        .ok();
                }
                DrawCommand::Text(run) => draw_text_run(target, run),
            }
        }
    }
}

fn draw_text_run<D>(
    target: &mut D,
    run: &TextRun,
) where
    D: DrawTarget<Color = Gray4>,
{
    let face = run.size.face();
    let style = MonoTextStyle::new(face.font, run.shade.to_gray4());
    let text_style = run.datum.text_style();

    if face.scale == 1 {
        Text::with_text_style(&run.text, run.anchor, style, text_style)
            .draw(target)
            .ok();
    } else {
        let mut scaled = Scaled::new(target, run.anchor, face.scale);
        Text::with_text_style(&run.text, Point::zero(), style, text_style)
            .draw(&mut scaled)
            .ok();
    }
}

// =============================================================================
// Scaling Adapter
// =============================================================================

/// Draw-target adapter that magnifies drawing by an integer factor.
///
/// A pixel at local `p` becomes the `scale`x`scale` block whose top-left corner
/// is `origin + p * scale` on the wrapped target.
pub struct Scaled<'a, D> {
    inner: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D> Scaled<'a, D> {
    /// Wrap `inner`, mapping local (0, 0) to `origin`. A zero scale is treated as 1.
    pub fn new(
        inner: &'a mut D,
        origin: Point,
        scale: u32,
    ) -> Self {
        Self {
            inner,
            origin,
            scale: scale.max(1),
        }
    }
}

impl<D> Dimensions for Scaled<'_, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        let outer = self.inner.bounding_box();
        let scale = self.scale as i32;
        let top_left = Point::new(
            (outer.top_left.x - self.origin.x).div_euclid(scale),
            (outer.top_left.y - self.origin.y).div_euclid(scale),
        );
        Rectangle::new(top_left, outer.size / self.scale + Size::new(2, 2))
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new(self.scale, self.scale);
        let scale = self.scale as i32;
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * scale;
            self.inner.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}
