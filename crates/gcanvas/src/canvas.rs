//! The canvas that owns and paints a scene
//!
//! [`GCanvas`] wraps a [`Scene`] with the view-level concerns: a size and
//! background, repaint notification after every mutation, touch dispatch and
//! sprite animation. Painting goes through any [`DrawContext`]; [`render`]
//! is a shortcut to rasterize with tiny-skia.
//!
//! [`render`]: GCanvas::render

use std::fmt;

use gcanvas_core::{Color, DrawContext, Point, Rect, Size};
use gcanvas_image::ImageStore;
use gcanvas_paint::Rasterizer;

use crate::config::CanvasConfig;
use crate::error::{GraphicsError, Result};
use crate::object::GObject;
use crate::scene::{Handle, ObjectId, Scene};
use crate::sprite::GSprite;

/// Phase of a touch gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Down,
    Move,
    Up,
}

/// A touch at a point in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchKind,
    pub position: Point,
}

impl TouchEvent {
    pub fn new(kind: TouchKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }
}

type RepaintListener = Box<dyn FnMut()>;
type TouchListener = Box<dyn FnMut(&TouchEvent, Option<ObjectId>)>;

/// A drawing surface holding an ordered scene of objects
pub struct GCanvas {
    scene: Scene,
    config: CanvasConfig,
    size: Size,
    background: Color,
    dirty: bool,
    repaint_listeners: Vec<RepaintListener>,
    touch_listeners: Vec<TouchListener>,
}

impl fmt::Debug for GCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GCanvas")
            .field("size", &self.size)
            .field("background", &self.background)
            .field("objects", &self.scene.len())
            .field("dirty", &self.dirty)
            .field("repaint_listeners", &self.repaint_listeners.len())
            .field("touch_listeners", &self.touch_listeners.len())
            .finish()
    }
}

impl Default for GCanvas {
    fn default() -> Self {
        Self::with_config_unchecked(CanvasConfig::default(), Color::WHITE)
    }
}

impl GCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config_unchecked(CanvasConfig::new(width, height), Color::WHITE)
    }

    /// Build a canvas from a validated configuration
    pub fn from_config(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        let background = config.background_color()?;
        Ok(Self::with_config_unchecked(config, background))
    }

    fn with_config_unchecked(config: CanvasConfig, background: Color) -> Self {
        Self {
            scene: Scene::new(),
            size: config.size(),
            config,
            background,
            dirty: true,
            repaint_listeners: Vec::new(),
            touch_listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Read-only view of the scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        self.size = self.config.size();
        tracing::debug!(width, height, "canvas resized");
        self.invalidate();
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.invalidate();
    }

    // =========================================================================
    // REPAINT
    // =========================================================================

    pub fn is_auto_repaint(&self) -> bool {
        self.config.auto_repaint
    }

    pub fn set_auto_repaint(&mut self, enabled: bool) {
        self.config.auto_repaint = enabled;
    }

    /// Register a callback run whenever the canvas needs repainting
    pub fn on_repaint(&mut self, listener: impl FnMut() + 'static) {
        self.repaint_listeners.push(Box::new(listener));
    }

    /// Mark the canvas dirty and, with auto-repaint on, notify listeners
    fn invalidate(&mut self) {
        self.dirty = true;
        if self.config.auto_repaint {
            self.notify_repaint();
        }
    }

    /// Notify repaint listeners regardless of the auto-repaint setting
    pub fn repaint(&mut self) {
        self.dirty = true;
        self.notify_repaint();
    }

    fn notify_repaint(&mut self) {
        for listener in &mut self.repaint_listeners {
            listener();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Report whether anything changed since the last call, clearing the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // =========================================================================
    // OBJECTS
    // =========================================================================

    /// Add an object on top of everything else
    pub fn add<T: GObject>(&mut self, object: T) -> Handle<T> {
        let handle = self.scene.add(object);
        self.invalidate();
        handle
    }

    /// Add an object after moving it to `(x, y)`
    pub fn add_at<T: GObject>(&mut self, mut object: T, x: f32, y: f32) -> Handle<T> {
        object.set_location(x, y);
        self.add(object)
    }

    pub fn add_boxed(&mut self, object: Box<dyn GObject>) -> ObjectId {
        let id = self.scene.add_boxed(object);
        self.invalidate();
        id
    }

    pub fn add_to<T: GObject>(&mut self, compound: impl Into<ObjectId>, object: T) -> Result<Handle<T>> {
        let handle = self.scene.add_to(compound, object)?;
        self.invalidate();
        Ok(handle)
    }

    /// Add an object to a compound at `(x, y)` in the compound's coordinates
    pub fn add_to_at<T: GObject>(
        &mut self,
        compound: impl Into<ObjectId>,
        mut object: T,
        x: f32,
        y: f32,
    ) -> Result<Handle<T>> {
        object.set_location(x, y);
        self.add_to(compound, object)
    }

    pub fn add_boxed_to(&mut self, compound: impl Into<ObjectId>, object: Box<dyn GObject>) -> Result<ObjectId> {
        let id = self.scene.add_boxed_to(compound, object)?;
        self.invalidate();
        Ok(id)
    }

    /// Remove an object and everything nested in it
    pub fn remove(&mut self, id: impl Into<ObjectId>) -> Result<Box<dyn GObject>> {
        let object = self.scene.remove(id)?;
        self.invalidate();
        Ok(object)
    }

    pub fn remove_all(&mut self) {
        self.scene.remove_all();
        self.invalidate();
    }

    pub fn remove_all_from(&mut self, compound: impl Into<ObjectId>) -> Result<()> {
        self.scene.remove_all_from(compound)?;
        self.invalidate();
        Ok(())
    }

    /// Move an object into a compound, or back to the root with `None`
    pub fn reparent(&mut self, id: impl Into<ObjectId>, parent: Option<ObjectId>) -> Result<()> {
        self.scene.reparent(id, parent)?;
        self.invalidate();
        Ok(())
    }

    pub fn contains(&self, id: impl Into<ObjectId>) -> bool {
        self.scene.contains(id)
    }

    /// Number of root objects
    pub fn element_count(&self) -> usize {
        self.scene.element_count()
    }

    /// The root object at `index`, 0 being the backmost
    pub fn element(&self, index: usize) -> Result<ObjectId> {
        self.scene.element(index)
    }

    /// Topmost visible object at a canvas point
    pub fn element_at(&self, x: f32, y: f32) -> Option<ObjectId> {
        self.scene.element_at(Point::new(x, y))
    }

    pub fn element_count_in(&self, compound: impl Into<ObjectId>) -> Result<usize> {
        self.scene.element_count_in(compound)
    }

    pub fn element_in(&self, compound: impl Into<ObjectId>, index: usize) -> Result<ObjectId> {
        self.scene.element_in(compound, index)
    }

    /// Topmost visible child of a compound at a point in its coordinates
    pub fn element_at_in(&self, compound: impl Into<ObjectId>, x: f32, y: f32) -> Result<Option<ObjectId>> {
        self.scene.element_at_in(compound, Point::new(x, y))
    }

    pub fn get<T: GObject>(&self, handle: Handle<T>) -> Result<&T> {
        self.scene.get(handle)
    }

    /// Mutable typed access. The canvas is marked for repaint.
    pub fn get_mut<T: GObject>(&mut self, handle: Handle<T>) -> Result<&mut T> {
        self.scene.downcast::<T>(handle.id())?;
        self.invalidate();
        self.scene.get_mut(handle)
    }

    pub fn object(&self, id: impl Into<ObjectId>) -> Option<&dyn GObject> {
        self.scene.object(id)
    }

    /// Mutable untyped access. The canvas is marked for repaint.
    pub fn object_mut(&mut self, id: impl Into<ObjectId>) -> Option<&mut dyn GObject> {
        let id = id.into();
        if !self.scene.contains(id) {
            return None;
        }
        self.invalidate();
        self.scene.object_mut(id)
    }

    /// Apply `f` to an object, then repaint once
    pub fn modify<T: GObject, R>(&mut self, handle: Handle<T>, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let out = f(self.scene.get_mut(handle)?);
        self.invalidate();
        Ok(out)
    }

    pub fn bounds(&self, id: impl Into<ObjectId>) -> Result<Rect> {
        self.scene.bounds(id)
    }

    pub fn canvas_bounds(&self, id: impl Into<ObjectId>) -> Result<Rect> {
        self.scene.canvas_bounds(id)
    }

    pub fn local_to_canvas(&self, id: impl Into<ObjectId>, point: Point) -> Result<Point> {
        self.scene.local_to_canvas(id, point)
    }

    pub fn canvas_to_local(&self, id: impl Into<ObjectId>, point: Point) -> Result<Point> {
        self.scene.canvas_to_local(id, point)
    }

    pub fn scale_compound(&mut self, compound: impl Into<ObjectId>, sx: f32, sy: f32) -> Result<()> {
        self.scene.scale_compound(compound, sx, sy)?;
        self.invalidate();
        Ok(())
    }

    // =========================================================================
    // Z-ORDER
    // =========================================================================

    pub fn send_to_front(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.scene.send_to_front(id)?;
        self.invalidate();
        Ok(())
    }

    pub fn send_to_back(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.scene.send_to_back(id)?;
        self.invalidate();
        Ok(())
    }

    pub fn send_forward(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.scene.send_forward(id)?;
        self.invalidate();
        Ok(())
    }

    pub fn send_backward(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.scene.send_backward(id)?;
        self.invalidate();
        Ok(())
    }

    // =========================================================================
    // SPRITES
    // =========================================================================

    /// Advance every sprite one tick; returns how many were updated
    pub fn update_sprites(&mut self) -> usize {
        let mut count = 0;
        self.scene.for_each_mut::<GSprite>(|_, sprite| {
            sprite.update();
            count += 1;
        });
        if count > 0 {
            tracing::trace!(count, "updated sprites");
            self.invalidate();
        }
        count
    }

    fn sprite_rect(&self, id: ObjectId) -> Result<Option<Rect>> {
        let sprite = self.scene.downcast::<GSprite>(id)?;
        if !self.scene.is_shown(id) {
            return Ok(None);
        }
        let origin = self.scene.local_to_canvas(id, Point::ZERO)?;
        Ok(Some(sprite.collision_rect().offset(origin.x, origin.y)))
    }

    /// Visible sprites whose collision rects overlap the given sprite's,
    /// compared in canvas coordinates. Sprites inside a hidden compound
    /// never collide.
    pub fn collisions(&self, id: impl Into<ObjectId>) -> Result<Vec<ObjectId>> {
        let id = id.into();
        let Some(target) = self.sprite_rect(id)? else {
            return Ok(Vec::new());
        };
        let mut hits = Vec::new();
        for other in self.scene.ids().filter(|&o| o != id) {
            if !self.scene.object(other).is_some_and(|o| o.as_any().is::<GSprite>()) {
                continue;
            }
            if let Some(rect) = self.sprite_rect(other)? {
                if rect.intersects(&target) {
                    hits.push(other);
                }
            }
        }
        Ok(hits)
    }

    // =========================================================================
    // TOUCH
    // =========================================================================

    /// Register a callback for touch events. It receives the event and the
    /// topmost object under it, if any.
    pub fn on_touch(&mut self, listener: impl FnMut(&TouchEvent, Option<ObjectId>) + 'static) {
        self.touch_listeners.push(Box::new(listener));
    }

    /// Hit-test a touch and forward it to the touch listeners
    pub fn dispatch_touch(&mut self, event: TouchEvent) -> Option<ObjectId> {
        let hit = self.scene.element_at(event.position);
        tracing::trace!(?event, ?hit, "touch");
        for listener in &mut self.touch_listeners {
            listener(&event, hit);
        }
        hit
    }

    // =========================================================================
    // PAINT
    // =========================================================================

    /// Clear to the background and paint the scene back to front
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        ctx.clear(self.background);
        self.scene.paint(ctx);
    }

    /// Rasterize the canvas, resolving images against `images`
    pub fn render<'a>(&self, images: &'a ImageStore) -> Result<Rasterizer<'a>> {
        let mut raster = Rasterizer::new(self.config.width, self.config.height)?.with_images(images);
        self.paint(&mut raster);
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::GCompound;
    use crate::object::GFillable;
    use crate::shapes::{GOval, GRect};
    use gcanvas_core::{DrawCommand, RecordingContext};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_mutations_notify_repaint() {
        let mut canvas = GCanvas::new(100, 100);
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        canvas.on_repaint(move || seen.set(seen.get() + 1));

        let r = canvas.add(GRect::new(10.0, 10.0));
        canvas.get_mut(r).unwrap().move_by(1.0, 1.0);
        canvas.send_to_back(r).unwrap();
        assert_eq!(count.get(), 3);

        canvas.set_auto_repaint(false);
        canvas.remove(r).unwrap();
        assert_eq!(count.get(), 3);
        assert!(canvas.take_dirty());
        assert!(!canvas.take_dirty());

        canvas.repaint();
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_add_at_and_element_at() {
        let mut canvas = GCanvas::new(100, 100);
        let back = canvas.add_at(GRect::new(50.0, 50.0), 0.0, 0.0);
        let front = canvas.add_at(GOval::new(20.0, 20.0), 10.0, 10.0);
        assert_eq!(canvas.element_count(), 2);
        assert_eq!(canvas.element(0).unwrap(), back.id());
        assert_eq!(canvas.element_at(20.0, 20.0), Some(front.id()));
        assert_eq!(canvas.element_at(45.0, 45.0), Some(back.id()));
        assert_eq!(canvas.element_at(90.0, 90.0), None);
    }

    #[test]
    fn test_paint_clears_then_draws() {
        let mut canvas = GCanvas::new(50, 50);
        canvas.set_background(Color::BLACK);
        let r = canvas.add(GRect::new(10.0, 10.0));
        canvas.get_mut(r).unwrap().set_filled(true);

        let mut ctx = RecordingContext::new(canvas.size());
        canvas.paint(&mut ctx);
        let cmds = ctx.commands();
        assert_eq!(cmds[0], DrawCommand::Clear(Color::BLACK));
        assert!(matches!(cmds[1], DrawCommand::FillPath { .. }));
    }

    #[test]
    fn test_touch_dispatch_reports_hit() {
        let mut canvas = GCanvas::new(100, 100);
        let r = canvas.add_at(GRect::new(10.0, 10.0), 5.0, 5.0);
        let hits = Rc::new(Cell::new(None));
        let sink = hits.clone();
        canvas.on_touch(move |event, hit| {
            assert_eq!(event.kind, TouchKind::Down);
            sink.set(hit);
        });

        assert_eq!(canvas.dispatch_touch(TouchEvent::new(TouchKind::Down, 6.0, 6.0)), Some(r.id()));
        assert_eq!(hits.get(), Some(r.id()));
        canvas.dispatch_touch(TouchEvent::new(TouchKind::Down, 60.0, 60.0));
        assert_eq!(hits.get(), None);
    }

    #[test]
    fn test_sprites_tick_and_collide_in_canvas_space() {
        let mut canvas = GCanvas::new(200, 200);
        let group = canvas.add(GCompound::at(100.0, 0.0));
        let a = canvas.add(GSprite::from_shape(GRect::with_bounds(90.0, 0.0, 10.0, 10.0)));
        // Local (0, 0) in the group is canvas (100, 0)
        let b = canvas
            .add_to(group, GSprite::from_shape(GRect::with_bounds(0.0, 0.0, 10.0, 10.0)))
            .unwrap();
        assert!(canvas.collisions(a).unwrap().is_empty());

        canvas.get_mut(a).unwrap().set_velocity(5.0, 0.0);
        assert_eq!(canvas.update_sprites(), 2);
        assert_eq!(canvas.collisions(a).unwrap(), vec![b.id()]);

        canvas.get_mut(b).unwrap().set_visible(false);
        assert!(canvas.collisions(a).unwrap().is_empty());
        assert!(matches!(
            canvas.collisions(group),
            Err(GraphicsError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_hidden_compound_hides_its_sprites_from_collisions() {
        let mut canvas = GCanvas::new(100, 100);
        let a = canvas.add(GSprite::from_shape(GRect::with_bounds(0.0, 0.0, 20.0, 20.0)));
        let group = canvas.add(GCompound::new());
        let b = canvas
            .add_to(group, GSprite::from_shape(GRect::with_bounds(10.0, 10.0, 20.0, 20.0)))
            .unwrap();
        assert_eq!(canvas.collisions(a).unwrap(), vec![b.id()]);

        canvas.get_mut(group).unwrap().set_visible(false);
        assert!(canvas.collisions(a).unwrap().is_empty());
        assert!(canvas.collisions(b).unwrap().is_empty());
        assert!(!canvas.scene().is_shown(b));
    }

    #[test]
    fn test_failed_get_mut_does_not_repaint() {
        let mut canvas = GCanvas::new(100, 100);
        let rect = canvas.add(GRect::new(10.0, 10.0));
        let group = canvas.add(GCompound::new());
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        canvas.on_repaint(move || seen.set(seen.get() + 1));
        canvas.take_dirty();

        let mistyped = Handle::<GOval>::new(group.id());
        assert!(matches!(canvas.get_mut(mistyped), Err(GraphicsError::TypeMismatch(_))));
        assert_eq!(count.get(), 0);
        assert!(!canvas.is_dirty());

        canvas.remove(rect).unwrap();
        canvas.take_dirty();
        assert!(matches!(canvas.get_mut(rect), Err(GraphicsError::NotFound(_))));
        assert_eq!(count.get(), 1);
        assert!(!canvas.is_dirty());

        assert!(canvas.get_mut(group).is_ok());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_from_config_rejects_bad_background() {
        let mut config = CanvasConfig::new(10, 10);
        config.background = "plaid".into();
        assert!(matches!(GCanvas::from_config(config), Err(GraphicsError::Config(_))));
    }

    #[test]
    fn test_render_fills_background() {
        let mut canvas = GCanvas::new(20, 20);
        let r = canvas.add_at(GRect::new(10.0, 10.0), 0.0, 0.0);
        canvas
            .modify(r, |rect| {
                rect.set_filled(true);
                rect.set_color(Color::RED);
            })
            .unwrap();
        let store = ImageStore::new();
        let raster = canvas.render(&store).unwrap();
        assert_eq!(raster.pixel(5, 5), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(15, 15), Some([255, 255, 255, 255]));
    }
}
