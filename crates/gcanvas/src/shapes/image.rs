//! Bitmap images placed on the canvas

use gcanvas_core::{DrawContext, ImageId, ImageOptions, Rect, Size};
use gcanvas_image::{ImageData, ImageStore};

use crate::object::{object_plumbing, GObject, GResizable, GScalable, ObjectKind, ObjectState};

/// An image drawn into its bounds.
///
/// The pixels live in an [`ImageStore`]; the shape only keeps the id and the
/// natural size so it can be stretched and reset.
#[derive(Clone, Debug, PartialEq)]
pub struct GImage {
    state: ObjectState,
    image: ImageId,
    natural: Size,
    size: Size,
    opacity: f32,
}

impl GImage {
    pub fn new(image: ImageId, natural: Size) -> Self {
        Self::at(image, natural, 0.0, 0.0)
    }

    pub fn at(image: ImageId, natural: Size, x: f32, y: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            image,
            natural,
            size: natural,
            opacity: 1.0,
        }
    }

    /// Register `data` in `store` and wrap it at its natural size
    pub fn with_data(store: &mut ImageStore, data: ImageData) -> Self {
        let natural = data.size();
        Self::new(store.insert(data), natural)
    }

    pub fn image(&self) -> ImageId {
        self.image
    }

    /// Swap the displayed image, resetting to its natural size
    pub fn set_image(&mut self, image: ImageId, natural: Size) {
        self.image = image;
        self.natural = natural;
        self.size = natural;
    }

    pub fn natural_size(&self) -> Size {
        self.natural
    }

    pub fn reset_size(&mut self) {
        self.size = self.natural;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl GObject for GImage {
    object_plumbing!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Image
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let rect = Rect::from_origin_size(self.state.location, self.size);
        ctx.draw_image(self.image, rect, &ImageOptions::new().with_opacity(self.opacity));
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        Some(self)
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl GResizable for GImage {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
}

impl GScalable for GImage {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.size = Size::new(self.size.width * sx, self.size.height * sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcanvas_core::{Color, DrawCommand, RecordingContext};

    #[test]
    fn test_natural_size_from_store() {
        let mut store = ImageStore::new();
        let img = GImage::with_data(&mut store, ImageData::solid(16, 8, Color::RED));
        assert_eq!(img.size(), Size::new(16.0, 8.0));
        assert!(store.contains(img.image()));
    }

    #[test]
    fn test_stretch_and_reset() {
        let mut img = GImage::at(ImageId(1), Size::new(10.0, 10.0), 5.0, 5.0);
        img.set_size(40.0, 20.0);
        assert_eq!(img.bounds(), Rect::new(5.0, 5.0, 40.0, 20.0));
        img.scale_uniform(0.5);
        assert_eq!(img.size(), Size::new(20.0, 10.0));
        img.reset_size();
        assert_eq!(img.size(), img.natural_size());
    }

    #[test]
    fn test_paints_into_bounds() {
        let mut img = GImage::at(ImageId(7), Size::new(10.0, 10.0), 1.0, 2.0);
        img.set_opacity(0.5);
        let mut ctx = RecordingContext::new(Size::new(20.0, 20.0));
        img.paint(&mut ctx);
        assert_eq!(
            ctx.commands(),
            &[DrawCommand::DrawImage {
                image: ImageId(7),
                rect: Rect::new(1.0, 2.0, 10.0, 10.0),
                options: ImageOptions::new().with_opacity(0.5),
            }]
        );
    }
}
