//! gcanvas image support
//!
//! Decodes bitmaps into RGBA pixel buffers, keeps them in an [`ImageStore`]
//! keyed by [`ImageId`](gcanvas_core::ImageId), and cuts sprite sheets into
//! animation frames.
//!
//! # Example
//!
//! ```
//! use gcanvas_core::Color;
//! use gcanvas_image::{slice_sheet, ImageData, ImageStore};
//!
//! let sheet = ImageData::solid(64, 16, Color::RED);
//! let frames = slice_sheet(&sheet, 16, 16).unwrap();
//! assert_eq!(frames.len(), 4);
//!
//! let mut store = ImageStore::new();
//! let ids: Vec<_> = frames.into_iter().map(|f| store.insert(f)).collect();
//! assert_eq!(store.len(), ids.len());
//! ```

pub mod error;
pub mod loader;
pub mod sheet;
pub mod store;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use sheet::slice_sheet;
pub use store::ImageStore;
