//! CPU rasterization using tiny-skia
//!
//! [`Rasterizer`] implements [`DrawContext`] directly on top of a tiny-skia
//! pixmap, producing anti-aliased RGBA output that can be inspected pixel by
//! pixel or encoded as PNG.

use std::path::Path as FsPath;

use gcanvas_core::{
    Color, DrawCommand, DrawContext, FillRule, ImageId, ImageOptions, LineCap, LineJoin, Path,
    PathCommand, Point, Rect, Size, Stroke, TextStyle, Transform,
};
use gcanvas_image::{ImageData, ImageStore};
use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use tiny_skia::{IntRect, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint};

use crate::error::{PaintError, Result};

/// A drawing surface backed by an RGBA pixmap
pub struct Rasterizer<'a> {
    pixmap: Pixmap,
    images: Option<&'a ImageStore>,
    image_cache: FxHashMap<ImageId, Pixmap>,
    transform_stack: SmallVec<[Transform; 8]>,
    opacity_stack: SmallVec<[f32; 8]>,
    skipped_text: usize,
}

impl<'a> Rasterizer<'a> {
    /// Create a transparent surface of the given pixel size
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(PaintError::InvalidSize {
            width: width as f32,
            height: height as f32,
        })?;
        Ok(Self {
            pixmap,
            images: None,
            image_cache: FxHashMap::default(),
            transform_stack: smallvec![Transform::identity()],
            opacity_stack: smallvec![1.0],
            skipped_text: 0,
        })
    }

    /// Create a surface for a viewport, rounding its size up to whole pixels
    pub fn for_viewport(size: Size) -> Result<Self> {
        if !(size.width.is_finite() && size.height.is_finite()) || size.is_empty() {
            return Err(PaintError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Self::new(size.width.ceil() as u32, size.height.ceil() as u32)
    }

    /// Resolve `draw_image` calls against `store`
    pub fn with_images(mut self, store: &'a ImageStore) -> Self {
        self.images = Some(store);
        self.image_cache.clear();
        self
    }

    /// Paint previously recorded commands
    pub fn replay(&mut self, commands: &[DrawCommand]) {
        gcanvas_core::replay(commands, self);
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of text commands that were skipped for lack of a glyph backend
    pub fn skipped_text(&self) -> usize {
        self.skipped_text
    }

    /// Straight-alpha RGBA value of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Straight-alpha RGBA pixel data, row-major
    pub fn pixels(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            result.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        result
    }

    /// Copy the surface out as an [`ImageData`]
    pub fn to_image(&self) -> Option<ImageData> {
        ImageData::from_rgba(self.pixels(), self.width(), self.height()).ok()
    }

    /// Encode the surface as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| PaintError::Encode(e.to_string()))
    }

    /// Encode the surface as PNG and write it to `path`
    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::debug!(
            "Wrote {}x{} PNG to {}",
            self.width(),
            self.height(),
            path.as_ref().display()
        );
        Ok(())
    }

    fn sk_transform(&self) -> tiny_skia::Transform {
        to_sk_transform(&self.current_transform())
    }

    fn sk_paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        let alpha = (color.a * self.current_opacity()).clamp(0.0, 1.0);
        let sk_color = tiny_skia::Color::from_rgba(
            color.r.clamp(0.0, 1.0),
            color.g.clamp(0.0, 1.0),
            color.b.clamp(0.0, 1.0),
            alpha,
        )
        .unwrap_or(tiny_skia::Color::BLACK);
        paint.set_color(sk_color);
        paint.anti_alias = true;
        paint
    }

    fn cache_image(&mut self, id: ImageId) -> bool {
        if self.image_cache.contains_key(&id) {
            return true;
        }
        let Some(data) = self.images.and_then(|store| store.get(id)) else {
            return false;
        };
        match premultiplied_pixmap(data) {
            Some(pixmap) => {
                self.image_cache.insert(id, pixmap);
                true
            }
            None => false,
        }
    }
}

impl DrawContext for Rasterizer<'_> {
    fn push_transform(&mut self, transform: Transform) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_opacity(&mut self, opacity: f32) {
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        if self.opacity_stack.len() > 1 {
            self.opacity_stack.pop();
        }
    }

    fn current_opacity(&self) -> f32 {
        *self.opacity_stack.last().unwrap_or(&1.0)
    }

    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule, color: Color) {
        let Some(sk_path) = to_sk_path(path) else {
            return;
        };
        let rule = match rule {
            FillRule::NonZero => tiny_skia::FillRule::Winding,
            FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
        };
        let paint = self.sk_paint(color);
        let transform = self.sk_transform();
        self.pixmap
            .fill_path(&sk_path, &paint, rule, transform, None);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        let Some(sk_path) = to_sk_path(path) else {
            return;
        };
        let paint = self.sk_paint(color);
        let transform = self.sk_transform();
        self.pixmap
            .stroke_path(&sk_path, &paint, &to_sk_stroke(stroke), transform, None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(sk_rect) = tiny_skia::Rect::from_xywh(rect.x(), rect.y(), rect.width(), rect.height())
        else {
            return;
        };
        let paint = self.sk_paint(color);
        let transform = self.sk_transform();
        self.pixmap.fill_rect(sk_rect, &paint, transform, None);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        self.stroke_path(&Path::rect(rect), stroke, color);
    }

    fn draw_text(&mut self, text: &str, origin: Point, _style: &TextStyle) {
        self.skipped_text += 1;
        tracing::debug!(
            "Skipping text {:?} at ({}, {}): no glyph backend",
            text,
            origin.x,
            origin.y
        );
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, options: &ImageOptions) {
        if !self.cache_image(image) {
            tracing::warn!("Skipping draw of unknown image {:?}", image);
            return;
        }
        let Some(full) = self.image_cache.get(&image) else {
            return;
        };

        let cropped = match options.source_rect {
            Some(src) => IntRect::from_xywh(
                src.x().round() as i32,
                src.y().round() as i32,
                src.width().round().max(1.0) as u32,
                src.height().round().max(1.0) as u32,
            )
            .and_then(|r| full.clone_rect(r)),
            None => None,
        };
        let source = cropped.as_ref().unwrap_or(full);
        if source.width() == 0 || source.height() == 0 {
            return;
        }

        let placement = Transform::translate(rect.x(), rect.y()).then(&Transform::scale(
            rect.width() / source.width() as f32,
            rect.height() / source.height() as f32,
        ));
        let transform = to_sk_transform(&self.current_transform().then(&placement));
        let paint = PixmapPaint {
            opacity: (options.opacity * self.current_opacity()).clamp(0.0, 1.0),
            quality: tiny_skia::FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }

    fn viewport_size(&self) -> Size {
        Size::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }
}

fn to_sk_transform(t: &Transform) -> tiny_skia::Transform {
    let [a, b, c, d, tx, ty] = t.elements;
    tiny_skia::Transform::from_row(a, b, c, d, tx, ty)
}

fn to_sk_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
            PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            PathCommand::QuadTo { control, end } => {
                builder.quad_to(control.x, control.y, end.x, end.y)
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => builder.cubic_to(
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ),
            PathCommand::Close => builder.close(),
        }
    }
    builder.finish()
}

fn to_sk_stroke(stroke: &Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width: stroke.width,
        miter_limit: stroke.miter_limit,
        line_cap: match stroke.cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        line_join: match stroke.join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        dash: if stroke.dash.is_empty() {
            None
        } else {
            tiny_skia::StrokeDash::new(stroke.dash.clone(), stroke.dash_offset)
        },
    }
}

/// tiny-skia works on premultiplied alpha, image data is straight
fn premultiplied_pixmap(data: &ImageData) -> Option<Pixmap> {
    let mut pixels = data.pixels().to_vec();
    for chunk in pixels.chunks_exact_mut(4) {
        let a = chunk[3] as u16;
        for channel in &mut chunk[..3] {
            *channel = ((*channel as u16 * a + 127) / 255) as u8;
        }
    }
    let size = IntSize::from_wh(data.width(), data.height())?;
    Pixmap::from_vec(pixels, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcanvas_core::DrawContextExt;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(Rasterizer::new(0, 10).is_err());
        assert!(Rasterizer::for_viewport(Size::new(10.0, 0.0)).is_err());
        assert!(Rasterizer::for_viewport(Size::new(f32::NAN, 4.0)).is_err());
    }

    #[test]
    fn test_clear_and_fill_rect() {
        let mut raster = Rasterizer::new(20, 20).unwrap();
        raster.clear(Color::WHITE);
        raster.fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::RED);
        assert_eq!(raster.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(20, 0), None);
    }

    #[test]
    fn test_transform_moves_drawing() {
        let mut raster = Rasterizer::new(40, 40).unwrap();
        raster.push_transform(Transform::translate(20.0, 20.0));
        raster.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLUE);
        raster.pop_transform();
        assert_eq!(raster.pixel(5, 5), Some([0, 0, 0, 0]));
        assert_eq!(raster.pixel(25, 25), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_even_odd_leaves_hole() {
        let mut raster = Rasterizer::new(30, 30).unwrap();
        let path = Path::rect(Rect::new(0.0, 0.0, 30.0, 30.0))
            .move_to(10.0, 10.0)
            .line_to(20.0, 10.0)
            .line_to(20.0, 20.0)
            .line_to(10.0, 20.0)
            .close();
        raster.fill_path(&path, FillRule::EvenOdd, Color::GREEN);
        assert_eq!(raster.pixel(15, 15).map(|p| p[3]), Some(0));
        assert_eq!(raster.pixel(5, 5), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_opacity_scales_alpha() {
        let mut raster = Rasterizer::new(10, 10).unwrap();
        raster.push_opacity(0.5);
        raster.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        let alpha = raster.pixel(5, 5).unwrap()[3];
        assert!((126..=129).contains(&alpha), "alpha was {}", alpha);
    }

    #[test]
    fn test_draw_image_scales_into_rect() {
        let mut store = ImageStore::new();
        let id = store.insert(ImageData::solid(2, 2, Color::MAGENTA));

        let mut raster = Rasterizer::new(20, 20).unwrap().with_images(&store);
        raster.draw_image(id, Rect::new(0.0, 0.0, 10.0, 10.0), &ImageOptions::default());
        assert_eq!(raster.pixel(5, 5), Some([255, 0, 255, 255]));
        assert_eq!(raster.pixel(15, 15), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_unknown_image_and_text_are_skipped() {
        let mut raster = Rasterizer::new(10, 10).unwrap();
        raster.draw_image(ImageId(42), Rect::new(0.0, 0.0, 10.0, 10.0), &ImageOptions::default());
        raster.draw_text("hello", Point::new(0.0, 8.0), &TextStyle::default());
        assert_eq!(raster.skipped_text(), 1);
        assert!(raster.pixels().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_stroke_line_and_png() {
        let mut raster = Rasterizer::new(16, 16).unwrap();
        raster.stroke_line(
            Point::new(0.0, 8.0),
            Point::new(16.0, 8.0),
            &Stroke::new(4.0),
            Color::BLACK,
        );
        assert_eq!(raster.pixel(8, 8).map(|p| p[3]), Some(255));

        let png = raster.encode_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = ImageData::from_bytes(&png).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
    }
}
