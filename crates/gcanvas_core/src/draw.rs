//! Draw Context - Unified Rendering API
//!
//! The `DrawContext` trait is the single seam between the object model and
//! whatever puts pixels on screen. Shapes paint themselves through it; a
//! backend decides whether the calls are recorded, rasterized on the CPU, or
//! forwarded to a platform canvas.
//!
//! # Example
//!
//! ```
//! use gcanvas_core::{Color, DrawContext, FillRule, Path, Rect, RecordingContext, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! ctx.push_transform(Transform::translate(10.0, 20.0));
//! ctx.fill_path(&Path::rect(Rect::new(0.0, 0.0, 50.0, 25.0)), FillRule::NonZero, Color::BLUE);
//! ctx.pop_transform();
//!
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use crate::color::Color;
use crate::geometry::{Point, Rect, Size, Transform};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f32,
    /// Dash pattern (empty for solid line)
    pub dash: Vec<f32>,
    /// Dash offset
    pub dash_offset: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
            dash: Vec::new(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set dash pattern
    pub fn with_dash(mut self, pattern: Vec<f32>, offset: f32) -> Self {
        self.dash = pattern;
        self.dash_offset = offset;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

/// Font slant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Font slant
    pub style: FontStyle,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12.0,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Parse an ACM-style font description such as `"Serif-BOLD-24"` or
    /// `"Monospace-18"`. Missing parts keep their defaults, unknown style
    /// words are ignored.
    pub fn from_description(description: &str) -> Self {
        let mut style = Self::default();
        for (index, part) in description.split('-').enumerate() {
            let part = part.trim();
            if part.is_empty() || part == "*" {
                continue;
            }
            if let Ok(size) = part.parse::<f32>() {
                style.size = size;
                continue;
            }
            match part.to_ascii_uppercase().as_str() {
                "PLAIN" => {
                    style.weight = FontWeight::Regular;
                    style.style = FontStyle::Normal;
                }
                "BOLD" => style.weight = FontWeight::Bold,
                "ITALIC" => style.style = FontStyle::Italic,
                "BOLDITALIC" => {
                    style.weight = FontWeight::Bold;
                    style.style = FontStyle::Italic;
                }
                _ if index == 0 => style.family = part.to_string(),
                _ => {}
            }
        }
        style
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font family
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn is_monospace(&self) -> bool {
        let family = self.family.to_ascii_lowercase();
        family.contains("mono") || family.contains("courier")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// How the interior of a self-intersecting path is decided
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Magic number for cubic Bézier circle approximation
const KAPPA: f32 = 0.552_284_75;

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic Bézier curve
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.right(), rect.y())
            .line_to(rect.right(), rect.bottom())
            .line_to(rect.x(), rect.bottom())
            .close()
    }

    /// Create an ellipse path inscribed in `rect`
    pub fn ellipse(rect: Rect) -> Self {
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let Point { x: cx, y: cy } = rect.center();
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        Self::new()
            .move_to(cx + rx, cy)
            .cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry)
            .cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy)
            .cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry)
            .cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy)
            .close()
    }

    /// Create a circle path
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::ellipse(Rect::from_center(center, Size::new(radius * 2.0, radius * 2.0)))
    }

    /// Create a line path
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    /// Create a polyline through `points`, closing it when asked
    pub fn polygon(points: &[Point], closed: bool) -> Self {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return Self::new();
        };
        let mut path = Self::new().move_to(first.x, first.y);
        for p in iter {
            path = path.line_to(p.x, p.y);
        }
        if closed {
            path = path.close();
        }
        path
    }

    /// Create a rounded rectangle path with elliptical corners of radii
    /// `rx` by `ry`. Radii are clamped to half the rect size.
    pub fn rounded_rect(rect: Rect, rx: f32, ry: f32) -> Self {
        let x = rect.x();
        let y = rect.y();
        let w = rect.width();
        let h = rect.height();
        let rx = rx.clamp(0.0, (w / 2.0).max(0.0));
        let ry = ry.clamp(0.0, (h / 2.0).max(0.0));
        if rx == 0.0 || ry == 0.0 {
            return Self::rect(rect);
        }
        let (kx, ky) = (rx * (1.0 - KAPPA), ry * (1.0 - KAPPA));

        Self::new()
            .move_to(x + rx, y)
            .line_to(x + w - rx, y)
            .cubic_to(x + w - kx, y, x + w, y + ky, x + w, y + ry)
            .line_to(x + w, y + h - ry)
            .cubic_to(x + w, y + h - ky, x + w - kx, y + h, x + w - rx, y + h)
            .line_to(x + rx, y + h)
            .cubic_to(x + kx, y + h, x, y + h - ky, x, y + h - ry)
            .line_to(x, y + ry)
            .cubic_to(x, y + ky, x + kx, y, x + rx, y)
            .close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Calculate the bounding rectangle of this path, control points
    /// included
    pub fn bounds(&self) -> Rect {
        let points = self.commands.iter().flat_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![*p],
            PathCommand::QuadTo { control, end } => vec![*control, *end],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => vec![*control1, *control2, *end],
            PathCommand::Close => Vec::new(),
        });
        Rect::bounding(points).unwrap_or(Rect::ZERO)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Types
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to a loaded image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// Image rendering options
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOptions {
    /// Source rectangle within the image (None = entire image)
    pub source_rect: Option<Rect>,
    /// Opacity (1.0 = fully opaque)
    pub opacity: f32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            source_rect: None,
            opacity: 1.0,
        }
    }
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_source_rect(mut self, rect: Rect) -> Self {
        self.source_rect = Some(rect);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The drawing surface every shape paints onto.
///
/// Transforms and opacities form stacks. A pushed transform is applied
/// after the current one (it works in the coordinate space the current
/// transform establishes); a pushed opacity multiplies the current one.
pub trait DrawContext {
    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    /// Push a transform onto the stack
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Transform;

    /// Push an opacity value (multiplied with current)
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the top opacity from the stack
    fn pop_opacity(&mut self);

    /// Get the current combined opacity
    fn current_opacity(&self) -> f32;

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill the whole surface, ignoring the transform stack
    fn clear(&mut self, color: Color);

    /// Fill a path
    fn fill_path(&mut self, path: &Path, rule: FillRule, color: Color);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color);

    /// Draw text with its baseline starting at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Draw an image scaled into `rect`
    fn draw_image(&mut self, image: ImageId, rect: Rect, options: &ImageOptions);

    /// Get the viewport size
    fn viewport_size(&self) -> Size;
}

/// Extension helpers available on every [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Fill an ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.fill_path(&Path::ellipse(rect), FillRule::NonZero, color);
    }

    /// Stroke an ellipse inscribed in `rect`
    fn stroke_ellipse(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        self.stroke_path(&Path::ellipse(rect), stroke, color);
    }

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke, color: Color) {
        self.stroke_path(&Path::line(from, to), stroke, color);
    }

    /// Run `f` with `transform` pushed, popping it afterwards
    fn with_transform<F: FnOnce(&mut Self)>(&mut self, transform: Transform, f: F)
    where
        Self: Sized,
    {
        self.push_transform(transform);
        f(self);
        self.pop_transform();
    }
}

impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    PushTransform(Transform),
    PopTransform,
    PushOpacity(f32),
    PopOpacity,

    // 2D Drawing
    Clear(Color),
    FillPath {
        path: Path,
        rule: FillRule,
        color: Color,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
        color: Color,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    DrawImage {
        image: ImageId,
        rect: Rect,
        options: ImageOptions,
    },
}

impl DrawCommand {
    /// Whether the command puts pixels on the surface
    pub fn is_drawing(&self) -> bool {
        !matches!(
            self,
            DrawCommand::PushTransform(_)
                | DrawCommand::PopTransform
                | DrawCommand::PushOpacity(_)
                | DrawCommand::PopOpacity
        )
    }
}

/// Replay recorded commands onto another context
pub fn replay(commands: &[DrawCommand], ctx: &mut dyn DrawContext) {
    for command in commands {
        match command {
            DrawCommand::PushTransform(t) => ctx.push_transform(*t),
            DrawCommand::PopTransform => ctx.pop_transform(),
            DrawCommand::PushOpacity(o) => ctx.push_opacity(*o),
            DrawCommand::PopOpacity => ctx.pop_opacity(),
            DrawCommand::Clear(color) => ctx.clear(*color),
            DrawCommand::FillPath { path, rule, color } => ctx.fill_path(path, *rule, *color),
            DrawCommand::StrokePath {
                path,
                stroke,
                color,
            } => ctx.stroke_path(path, stroke, *color),
            DrawCommand::FillRect { rect, color } => ctx.fill_rect(*rect, *color),
            DrawCommand::StrokeRect {
                rect,
                stroke,
                color,
            } => ctx.stroke_rect(*rect, stroke, *color),
            DrawCommand::DrawText {
                text,
                origin,
                style,
            } => ctx.draw_text(text, *origin, style),
            DrawCommand::DrawImage {
                image,
                rect,
                options,
            } => ctx.draw_image(*image, *rect, options),
        }
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform>,
    opacity_stack: Vec<f32>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Transform::identity()],
            opacity_stack: vec![1.0],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and reset the state stacks
    pub fn reset(&mut self) {
        self.commands.clear();
        self.transform_stack = vec![Transform::identity()];
        self.opacity_stack = vec![1.0];
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::PushOpacity(opacity));
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
        if self.opacity_stack.len() > 1 {
            self.opacity_stack.pop();
        }
    }

    fn current_opacity(&self) -> f32 {
        *self.opacity_stack.last().unwrap_or(&1.0)
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            rule,
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: stroke.clone(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, options: &ImageOptions) {
        self.commands.push(DrawCommand::DrawImage {
            image,
            rect,
            options: options.clone(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms_compose() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_transform(Transform::translate(10.0, 0.0));
        ctx.push_transform(Transform::translate(0.0, 5.0));
        assert_eq!(ctx.current_transform().translation(), Point::new(10.0, 5.0));
        ctx.pop_transform();
        assert_eq!(ctx.current_transform().translation(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_pop_never_drops_base_state() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.pop_transform();
        ctx.pop_opacity();
        assert!(ctx.current_transform().is_identity());
        assert_eq!(ctx.current_opacity(), 1.0);
        assert_eq!(ctx.commands().len(), 2);
    }

    #[test]
    fn test_opacity_multiplies() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.push_opacity(0.5);
        ctx.push_opacity(0.5);
        assert_eq!(ctx.current_opacity(), 0.25);
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut source = RecordingContext::new(Size::new(50.0, 50.0));
        source.clear(Color::WHITE);
        source.push_transform(Transform::scale(2.0, 2.0));
        source.fill_ellipse(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        source.draw_text("hi", Point::new(1.0, 9.0), &TextStyle::default());
        source.pop_transform();

        let mut target = RecordingContext::new(Size::new(50.0, 50.0));
        replay(source.commands(), &mut target);
        assert_eq!(source.commands(), target.commands());
    }

    #[test]
    fn test_path_bounds_and_polygon() {
        let path = Path::polygon(
            &[
                Point::new(5.0, 5.0),
                Point::new(25.0, 0.0),
                Point::new(10.0, 30.0),
            ],
            true,
        );
        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.bounds(), Rect::new(5.0, 0.0, 20.0, 30.0));
        assert!(Path::polygon(&[], true).is_empty());
    }

    #[test]
    fn test_rounded_rect_with_zero_radius_is_plain_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Path::rounded_rect(rect, 0.0, 4.0), Path::rect(rect));
        assert_eq!(Path::rounded_rect(rect, 20.0, 20.0).bounds(), rect);
    }

    #[test]
    fn test_font_description() {
        let style = TextStyle::from_description("Serif-BOLD-24");
        assert_eq!(style.family, "Serif");
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.size, 24.0);

        let mono = TextStyle::from_description("Monospace-italic-10");
        assert!(mono.is_monospace());
        assert_eq!(mono.style, FontStyle::Italic);

        let sized = TextStyle::from_description("*-*-30");
        assert_eq!(sized.family, "sans-serif");
        assert_eq!(sized.size, 30.0);
    }
}
