//! Scene file handling
//!
//! A scene file is TOML with a `[canvas]` table (a [`CanvasConfig`]) and a
//! list of `[[object]]` tables, painted in file order:
//!
//! ```toml
//! [canvas]
//! width = 200
//! height = 100
//!
//! [[object]]
//! type = "oval"
//! x = 10
//! y = 10
//! width = 30
//! height = 30
//! color = "red"
//! filled = true
//! velocity = [2, 0]
//! ```
//!
//! An object with `velocity` or `acceleration` is wrapped in a sprite so the
//! `--frames` option can animate it.

use anyhow::{bail, Context, Result};
use gcanvas::{
    CanvasConfig, CollisionMargins, Color, GArc, GCanvas, GImage, GLabel, GLine, GObject, GOval,
    GPolygon, GRect, GResizable, GRoundRect, GSprite, ImageData, ImageStore, TextStyle,
    DEFAULT_ARC,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed scene file
#[derive(Debug, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Rect,
    RoundRect,
    Oval,
    Line,
    Arc,
    Polygon,
    Label,
    Image,
}

/// One `[[object]]` entry. Fields that do not apply to the type are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectSpec {
    #[serde(rename = "type")]
    pub kind: Option<ObjectType>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    #[serde(default)]
    pub filled: bool,
    pub line_width: Option<f32>,
    pub visible: Option<bool>,

    // round_rect
    pub arc_width: Option<f32>,
    pub arc_height: Option<f32>,
    // line
    pub x2: Option<f32>,
    pub y2: Option<f32>,
    // arc
    pub start: Option<f32>,
    pub sweep: Option<f32>,
    // polygon, relative to (x, y)
    #[serde(default)]
    pub vertices: Vec<[f32; 2]>,
    // label
    pub text: Option<String>,
    pub font: Option<String>,
    // image, relative to the scene file
    pub path: Option<PathBuf>,

    // sprite motion
    pub velocity: Option<[f32; 2]>,
    pub acceleration: Option<[f32; 2]>,
    pub collision_margin: Option<f32>,
}

impl SceneFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scene: SceneFile = toml::from_str(content).context("Failed to parse scene file")?;
        scene.canvas.validate()?;
        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid scene {}", path.display()))
    }

    /// Build the canvas, loading images relative to `base_dir` into `store`
    pub fn build(&self, base_dir: &Path, store: &mut ImageStore) -> Result<GCanvas> {
        let mut canvas = GCanvas::from_config(self.canvas.clone())?;
        canvas.set_auto_repaint(false);
        for (index, spec) in self.objects.iter().enumerate() {
            let object = build_object(spec, base_dir, store)
                .with_context(|| format!("object #{}", index + 1))?;
            tracing::debug!(index, kind = %object.kind(), "built object");
            canvas.add_boxed(object);
        }
        Ok(canvas)
    }
}

fn parse_color(value: &str) -> Result<Color> {
    Color::parse(value).with_context(|| format!("Unknown color '{}'", value))
}

fn require(value: Option<f32>, field: &str, kind: ObjectType) -> Result<f32> {
    value.with_context(|| format!("{:?} needs `{}`", kind, field))
}

fn build_object(spec: &ObjectSpec, base_dir: &Path, store: &mut ImageStore) -> Result<Box<dyn GObject>> {
    let Some(kind) = spec.kind else {
        bail!("missing `type`");
    };
    let (x, y) = (spec.x, spec.y);
    let mut object: Box<dyn GObject> = match kind {
        ObjectType::Rect => Box::new(GRect::with_bounds(
            x,
            y,
            require(spec.width, "width", kind)?,
            require(spec.height, "height", kind)?,
        )),
        ObjectType::RoundRect => Box::new(GRoundRect::with_arcs(
            x,
            y,
            require(spec.width, "width", kind)?,
            require(spec.height, "height", kind)?,
            spec.arc_width.unwrap_or(DEFAULT_ARC),
            spec.arc_height.unwrap_or(DEFAULT_ARC),
        )),
        ObjectType::Oval => Box::new(GOval::with_bounds(
            x,
            y,
            require(spec.width, "width", kind)?,
            require(spec.height, "height", kind)?,
        )),
        ObjectType::Line => Box::new(GLine::new(
            x,
            y,
            require(spec.x2, "x2", kind)?,
            require(spec.y2, "y2", kind)?,
        )),
        ObjectType::Arc => Box::new(GArc::with_bounds(
            x,
            y,
            require(spec.width, "width", kind)?,
            require(spec.height, "height", kind)?,
            spec.start.unwrap_or(0.0),
            require(spec.sweep, "sweep", kind)?,
        )),
        ObjectType::Polygon => {
            if spec.vertices.len() < 3 {
                bail!("polygon needs at least 3 vertices, got {}", spec.vertices.len());
            }
            let mut polygon = GPolygon::at(x, y);
            for [vx, vy] in &spec.vertices {
                polygon.add_vertex(*vx, *vy)?;
            }
            polygon.mark_as_complete();
            Box::new(polygon)
        }
        ObjectType::Label => {
            let text = spec.text.as_deref().context("Label needs `text`")?;
            let mut label = GLabel::at(text, x, y);
            if let Some(font) = &spec.font {
                label.set_font(TextStyle::from_description(font));
            }
            Box::new(label)
        }
        ObjectType::Image => {
            let rel = spec.path.as_ref().context("Image needs `path`")?;
            let path = base_dir.join(rel);
            let data = ImageData::load(&path)
                .with_context(|| format!("Failed to load image {}", path.display()))?;
            let mut image = GImage::with_data(store, data);
            image.set_location(x, y);
            if let (Some(w), Some(h)) = (spec.width, spec.height) {
                image.set_size(w, h);
            }
            Box::new(image)
        }
    };

    apply_style(spec, object.as_mut())?;

    if spec.velocity.is_none() && spec.acceleration.is_none() {
        return Ok(object);
    }
    let mut sprite = GSprite::from_boxed_shape(object);
    if let Some([dx, dy]) = spec.velocity {
        sprite.set_velocity(dx, dy);
    }
    if let Some([ax, ay]) = spec.acceleration {
        sprite.set_acceleration(ax, ay);
    }
    if let Some(margin) = spec.collision_margin {
        sprite.set_collision_margins(CollisionMargins::uniform(margin));
    }
    Ok(Box::new(sprite))
}

fn apply_style(spec: &ObjectSpec, object: &mut dyn GObject) -> Result<()> {
    if let Some(color) = &spec.color {
        object.set_color(parse_color(color)?);
    }
    if let Some(width) = spec.line_width {
        object.set_line_width(width);
    }
    if let Some(visible) = spec.visible {
        object.set_visible(visible);
    }
    if let Some(fillable) = object.as_fillable_mut() {
        fillable.set_filled(spec.filled);
        if let Some(color) = &spec.fill_color {
            fillable.set_fill_color(parse_color(color)?);
        }
    }
    Ok(())
}
