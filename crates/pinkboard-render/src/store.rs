//! Owner of every image a frame can reference

use image::RgbaImage;
use pinkboard_core::ImageId;
use std::collections::HashMap;

/// Maps `ImageId` handles to decoded RGBA pixels
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<ImageId, RgbaImage>,
    next_id: u32,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `image` and hand back its handle
    pub fn insert(&mut self, image: RgbaImage) -> ImageId {
        self.next_id += 1;
        let id = ImageId::from_raw(self.next_id);
        log::debug!("Registered {} ({}x{})", id, image.width(), image.height());
        self.images.insert(id, image);
        id
    }

    pub fn get(&self, id: ImageId) -> Option<&RgbaImage> {
        self.images.get(&id)
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

    #[test]
    fn ids_are_unique_and_resolve() {
        let mut store = ImageStore::new();
        let a = store.insert(RgbaImage::new(2, 2));
        let b = store.insert(RgbaImage::new(3, 1));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).map(|i| i.width()), Some(3));
        assert!(store.get(ImageId::from_raw(b.raw() + 1)).is_none());
        assert!(!store.is_empty());
    }
}
