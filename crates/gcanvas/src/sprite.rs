//! Animated, moving objects for simple games
//!
//! A [`GSprite`] shows either a cycle of image frames or a single wrapped
//! shape. Each call to [`GSprite::update`] advances one tick of motion and
//! animation. Collision tests use a rectangle that can be shrunk inside the
//! sprite bounds with [`CollisionMargins`], so transparent edges of a frame
//! do not count as contact.

use gcanvas_core::{
    Color, DrawContext, ImageId, ImageOptions, Point, Rect, Size, Stroke, Transform, Vec2,
};
use gcanvas_image::{ImageData, ImageStore};

use crate::error::{GraphicsError, Result};
use crate::object::{object_plumbing, GObject, GScalable, ObjectKind, ObjectState};

/// One animation frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteFrame {
    pub image: ImageId,
    pub size: Size,
}

impl SpriteFrame {
    pub fn new(image: ImageId, size: Size) -> Self {
        Self { image, size }
    }
}

/// What a sprite draws
#[derive(Debug)]
pub enum SpriteContent {
    Frames(Vec<SpriteFrame>),
    /// A shape painted relative to the sprite location
    Shape(Box<dyn GObject>),
}

/// Insets of the collision rectangle from each side of the bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CollisionMargins {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

#[derive(Debug)]
pub struct GSprite {
    state: ObjectState,
    content: SpriteContent,
    frames_per_image: u32,
    frame_index: usize,
    ticks: u32,
    velocity: Vec2,
    acceleration: Vec2,
    margins: CollisionMargins,
    debug: bool,
}

impl GSprite {
    fn with_content(content: SpriteContent, location: Point) -> Self {
        Self {
            state: ObjectState {
                location,
                ..Default::default()
            },
            content,
            frames_per_image: 1,
            frame_index: 0,
            ticks: 0,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            margins: CollisionMargins::default(),
            debug: false,
        }
    }

    /// A sprite cycling through `frames`
    pub fn from_frames(frames: Vec<SpriteFrame>) -> Self {
        Self::with_content(SpriteContent::Frames(frames), Point::ZERO)
    }

    /// Register each image in `store` and animate through them in order
    pub fn from_images(store: &mut ImageStore, images: impl IntoIterator<Item = ImageData>) -> Self {
        let frames = images
            .into_iter()
            .map(|data| {
                let size = data.size();
                SpriteFrame::new(store.insert(data), size)
            })
            .collect();
        Self::from_frames(frames)
    }

    /// Wrap a shape. The sprite takes over the shape's location and the
    /// shape is moved to the sprite's origin.
    pub fn from_shape(shape: impl GObject) -> Self {
        Self::from_boxed_shape(Box::new(shape))
    }

    pub fn from_boxed_shape(mut shape: Box<dyn GObject>) -> Self {
        let location = shape.location();
        shape.set_location(0.0, 0.0);
        Self::with_content(SpriteContent::Shape(shape), location)
    }

    pub fn content(&self) -> &SpriteContent {
        &self.content
    }

    pub fn shape(&self) -> Option<&dyn GObject> {
        match &self.content {
            SpriteContent::Shape(shape) => Some(shape.as_ref()),
            SpriteContent::Frames(_) => None,
        }
    }

    pub fn shape_mut(&mut self) -> Option<&mut dyn GObject> {
        match &mut self.content {
            SpriteContent::Shape(shape) => Some(shape.as_mut()),
            SpriteContent::Frames(_) => None,
        }
    }

    // =========================================================================
    // ANIMATION
    // =========================================================================

    pub fn frame_count(&self) -> usize {
        match &self.content {
            SpriteContent::Frames(frames) => frames.len(),
            SpriteContent::Shape(_) => 1,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.frame_index
    }

    /// Jump to a frame and restart its tick count
    pub fn set_frame(&mut self, index: usize) -> Result<()> {
        let len = self.frame_count();
        if index >= len {
            return Err(GraphicsError::IndexOutOfRange { index, len });
        }
        self.frame_index = index;
        self.ticks = 0;
        Ok(())
    }

    pub fn frames_per_image(&self) -> u32 {
        self.frames_per_image
    }

    /// Number of ticks each frame stays on screen; at least 1
    pub fn set_frames_per_image(&mut self, ticks: u32) {
        self.frames_per_image = ticks.max(1);
    }

    fn frame(&self) -> Option<&SpriteFrame> {
        match &self.content {
            SpriteContent::Frames(frames) => frames.get(self.frame_index),
            SpriteContent::Shape(_) => None,
        }
    }

    fn advance_animation(&mut self) {
        let count = self.frame_count();
        if count <= 1 {
            return;
        }
        self.ticks += 1;
        if self.ticks >= self.frames_per_image {
            self.ticks = 0;
            self.frame_index = (self.frame_index + 1) % count;
        }
    }

    // =========================================================================
    // MOTION
    // =========================================================================

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, dx: f32, dy: f32) {
        self.velocity = Vec2::new(dx, dy);
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, ax: f32, ay: f32) {
        self.acceleration = Vec2::new(ax, ay);
    }

    /// Advance one tick: move, accelerate, then animate
    pub fn update(&mut self) {
        self.state.location = self.state.location + self.velocity;
        self.velocity = self.velocity + self.acceleration;
        self.advance_animation();
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }

    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    // =========================================================================
    // COLLISION
    // =========================================================================

    pub fn collision_margins(&self) -> CollisionMargins {
        self.margins
    }

    pub fn set_collision_margins(&mut self, margins: CollisionMargins) {
        self.margins = margins;
    }

    pub fn set_collision_margin(&mut self, margin: f32) {
        self.margins = CollisionMargins::uniform(margin);
    }

    /// Bounds shrunk by the margins, in parent coordinates
    pub fn collision_rect(&self) -> Rect {
        let b = self.bounds();
        let m = self.margins;
        Rect::new(
            b.x() + m.left,
            b.y() + m.top,
            (b.width() - m.left - m.right).max(0.0),
            (b.height() - m.top - m.bottom).max(0.0),
        )
    }

    /// Whether the collision rects overlap. Both sprites must share a
    /// parent for the comparison to be meaningful.
    pub fn collides_with(&self, other: &GSprite) -> bool {
        self.is_visible()
            && other.is_visible()
            && self.collision_rect().intersects(&other.collision_rect())
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Also paint the collision rect outline
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }
}

impl GObject for GSprite {
    object_plumbing!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Sprite
    }

    fn size(&self) -> Size {
        self.bounds().size
    }

    fn bounds(&self) -> Rect {
        let loc = self.state.location;
        match &self.content {
            SpriteContent::Shape(shape) => shape.bounds().offset(loc.x, loc.y),
            SpriteContent::Frames(_) => {
                let size = self.frame().map(|f| f.size).unwrap_or(Size::ZERO);
                Rect::from_origin_size(loc, size)
            }
        }
    }

    fn contains(&self, point: Point) -> bool {
        let loc = self.state.location;
        match &self.content {
            SpriteContent::Shape(shape) => shape.contains(Point::new(point.x - loc.x, point.y - loc.y)),
            SpriteContent::Frames(_) => self.bounds().contains(point),
        }
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let loc = self.state.location;
        match &self.content {
            SpriteContent::Shape(shape) => {
                if shape.is_visible() {
                    ctx.push_transform(Transform::translate(loc.x, loc.y));
                    shape.paint(ctx);
                    ctx.pop_transform();
                }
            }
            SpriteContent::Frames(_) => {
                if let Some(frame) = self.frame() {
                    let rect = Rect::from_origin_size(loc, frame.size);
                    ctx.draw_image(frame.image, rect, &ImageOptions::default());
                }
            }
        }
        if self.debug {
            ctx.stroke_rect(self.collision_rect(), &Stroke::new(1.0), Color::RED);
        }
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl GScalable for GSprite {
    /// Scale the wrapped shape, or every frame's display size
    fn scale(&mut self, sx: f32, sy: f32) {
        match &mut self.content {
            SpriteContent::Shape(shape) => {
                if let Some(scalable) = shape.as_scalable_mut() {
                    scalable.scale(sx, sy);
                }
            }
            SpriteContent::Frames(frames) => {
                for frame in frames {
                    frame.size = Size::new(frame.size.width * sx, frame.size.height * sy);
                }
            }
        }
    }
}
