//! Registry mapping image ids to decoded pixel data

use gcanvas_core::ImageId;
use rustc_hash::FxHashMap;

use crate::loader::ImageData;

/// Owns decoded images and hands out stable [`ImageId`]s.
///
/// Ids start at 1 and are never reused, even after removal.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: FxHashMap<ImageId, ImageData>,
    next_id: u64,
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            images: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Register an image and return its id
    pub fn insert(&mut self, image: ImageData) -> ImageId {
        let id = ImageId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        tracing::trace!(
            "Registered image {:?} ({}x{})",
            id,
            image.width(),
            image.height()
        );
        self.images.insert(id, image);
        id
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageData> {
        self.images.get(&id)
    }

    pub fn remove(&mut self, id: ImageId) -> Option<ImageData> {
        self.images.remove(&id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcanvas_core::Color;

    #[test]
    fn test_ids_are_monotonic_and_not_reused() {
        let mut store = ImageStore::default();
        let a = store.insert(ImageData::solid(1, 1, Color::RED));
        let b = store.insert(ImageData::solid(2, 2, Color::BLUE));
        assert_eq!(a, ImageId(1));
        assert_eq!(b, ImageId(2));

        assert!(store.remove(a).is_some());
        let c = store.insert(ImageData::solid(1, 1, Color::GREEN));
        assert_eq!(c, ImageId(3));
        assert!(!store.contains(a));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).map(|img| img.width()), Some(2));
    }
}
