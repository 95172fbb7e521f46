//! Rendering tests
//!
//! Build scenes through the public API, rasterize them and inspect pixels.

use gcanvas::{
    Color, GArc, GCanvas, GCompound, GFillable, GImage, GLabel, GObject, GOval, GPolygon, GRect,
    GScalable, ImageData, ImageStore,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn filled<T: GFillable>(mut shape: T, color: Color) -> T {
    shape.set_filled(true);
    shape.set_color(color);
    shape
}

#[test]
fn test_later_objects_paint_on_top() {
    let mut canvas = GCanvas::new(40, 40);
    let red = canvas.add(filled(GRect::with_bounds(0.0, 0.0, 30.0, 30.0), Color::RED));
    canvas.add(filled(GRect::with_bounds(10.0, 10.0, 30.0, 30.0), Color::BLUE));

    let store = ImageStore::new();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(5, 5), Some(RED));
    assert_eq!(raster.pixel(20, 20), Some(BLUE));
    assert_eq!(raster.pixel(35, 2), Some(WHITE));

    canvas.send_to_front(red).unwrap();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(20, 20), Some(RED));
}

#[test]
fn test_compound_children_follow_compound_location() {
    let mut canvas = GCanvas::new(60, 60);
    let group = canvas.add(GCompound::at(30.0, 30.0));
    canvas
        .add_to(group, filled(GRect::with_bounds(0.0, 0.0, 10.0, 10.0), Color::RED))
        .unwrap();

    let store = ImageStore::new();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(35, 35), Some(RED));
    assert_eq!(raster.pixel(5, 5), Some(WHITE));

    canvas.get_mut(group).unwrap().move_by(-30.0, -30.0);
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(5, 5), Some(RED));
    assert_eq!(raster.pixel(35, 35), Some(WHITE));

    canvas.get_mut(group).unwrap().set_visible(false);
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(5, 5), Some(WHITE));
}

#[test]
fn test_oval_and_wedge_interiors() {
    let mut canvas = GCanvas::new(100, 50);
    canvas.add(filled(GOval::with_bounds(0.0, 0.0, 40.0, 40.0), Color::BLUE));
    canvas.add(filled(GArc::with_bounds(50.0, 0.0, 40.0, 40.0, 0.0, 90.0), Color::RED));

    let store = ImageStore::new();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(20, 20), Some(BLUE));
    // Frame corner lies outside the ellipse
    assert_eq!(raster.pixel(2, 2), Some(WHITE));
    // Upper-right quadrant of the wedge is filled, lower-left is not
    assert_eq!(raster.pixel(76, 14), Some(RED));
    assert_eq!(raster.pixel(64, 26), Some(WHITE));
}

#[test]
fn test_polygon_even_odd_fill() {
    // An outer square with an inner square traced in the same direction
    let mut poly = GPolygon::at(0.0, 0.0);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 40.0), (0.0, 0.0)] {
        poly.add_vertex(x, y).unwrap();
    }
    for (x, y) in [(10.0, 10.0), (30.0, 10.0), (30.0, 30.0), (10.0, 30.0), (10.0, 10.0)] {
        poly.add_vertex(x, y).unwrap();
    }
    let mut canvas = GCanvas::new(50, 50);
    canvas.add(filled(poly, Color::RED));

    let store = ImageStore::new();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(5, 20), Some(RED));
    assert_eq!(raster.pixel(20, 20), Some(WHITE));
}

#[test]
fn test_images_stretch_into_bounds() {
    let mut store = ImageStore::new();
    let mut image = GImage::with_data(&mut store, ImageData::solid(2, 2, Color::BLUE));
    image.set_location(10.0, 10.0);
    image.scale_uniform(10.0);

    let mut canvas = GCanvas::new(40, 40);
    canvas.add(image);
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.pixel(20, 20), Some(BLUE));
    assert_eq!(raster.pixel(35, 35), Some(WHITE));
}

#[test]
fn test_labels_do_not_rasterize_glyphs() {
    let mut canvas = GCanvas::new(40, 40);
    canvas.add(GLabel::at("score: 10", 5.0, 20.0));

    let store = ImageStore::new();
    let raster = canvas.render(&store).unwrap();
    assert_eq!(raster.skipped_text(), 1);
    assert_eq!(raster.pixel(10, 15), Some(WHITE));
}
