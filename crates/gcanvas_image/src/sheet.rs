//! Sprite sheet slicing

use crate::error::{ImageError, Result};
use crate::loader::ImageData;

/// Cut a sprite sheet into equally sized frames, row-major.
///
/// The sheet must be a whole multiple of the frame size in both directions.
pub fn slice_sheet(sheet: &ImageData, frame_width: u32, frame_height: u32) -> Result<Vec<ImageData>> {
    if frame_width == 0 || frame_height == 0 {
        return Err(ImageError::OutOfBounds(
            "frame size must be non-zero".to_string(),
        ));
    }
    let (width, height) = sheet.dimensions();
    if width % frame_width != 0 || height % frame_height != 0 {
        return Err(ImageError::OutOfBounds(format!(
            "{}x{} sheet is not a multiple of {}x{} frames",
            width, height, frame_width, frame_height
        )));
    }

    let columns = width / frame_width;
    let rows = height / frame_height;
    let mut frames = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            frames.push(sheet.sub_image(
                column * frame_width,
                row * frame_height,
                frame_width,
                frame_height,
            )?);
        }
    }
    Ok(frames)
}
