//! Text labels

use std::sync::Arc;

use gcanvas_core::{DrawContext, Point, Rect, Size, TextStyle};

use crate::object::{object_plumbing, GObject, ObjectKind, ObjectState};
use crate::text::{ApproximateMetrics, FontMetrics, TextMetrics};

/// A string drawn with its baseline starting at the label location
#[derive(Clone, Debug)]
pub struct GLabel {
    state: ObjectState,
    text: String,
    style: TextStyle,
    metrics: Arc<dyn TextMetrics>,
}

impl GLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, 0.0, 0.0)
    }

    pub fn at(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            text: text.into(),
            style: TextStyle::default(),
            metrics: Arc::new(ApproximateMetrics),
        }
    }

    /// Measure with `metrics` instead of the built-in approximation
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn label(&self) -> &str {
        &self.text
    }

    pub fn set_label(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_font(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Set the font from a description such as `"Serif-BOLD-24"`
    pub fn set_font_description(&mut self, description: &str) {
        self.style = TextStyle::from_description(description);
    }

    fn font_metrics(&self) -> FontMetrics {
        self.metrics.font_metrics(&self.style)
    }

    pub fn ascent(&self) -> f32 {
        self.font_metrics().ascent
    }

    pub fn descent(&self) -> f32 {
        self.font_metrics().descent
    }
}

impl GObject for GLabel {
    object_plumbing!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Label
    }

    fn size(&self) -> Size {
        Size::new(
            self.metrics.measure(&self.text, &self.style),
            self.font_metrics().height(),
        )
    }

    /// The box spans from the ascent line to the descent line
    fn bounds(&self) -> Rect {
        let loc = self.state.location;
        Rect::from_origin_size(Point::new(loc.x, loc.y - self.ascent()), self.size())
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let style = self.style.clone().with_color(self.state.color);
        ctx.draw_text(&self.text, self.state.location, &style);
    }
}
