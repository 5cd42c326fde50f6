use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use std::collections::HashMap;
use thiserror::Error;

use crate::id_generator::ElementId;

/// Errors that can occur while uploading an element texture
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Invalid texture dimensions {0}x{1}")]
    InvalidDimensions(usize, usize),
}

/// Owns the GPU textures of image elements on the canvas, one per element
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<ElementId, TextureHandle>,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("textures", &self.textures.len())
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the texture for an element, uploading it on first use
    pub fn get_or_create(
        &mut self,
        element_id: ElementId,
        image: &ColorImage,
        ctx: &Context,
    ) -> Result<TextureId, TextureError> {
        if let Some(handle) = self.textures.get(&element_id) {
            return Ok(handle.id());
        }

        let [width, height] = image.size;
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions(width, height));
        }

        let name = format!("element_{}", element_id);
        let handle = ctx.load_texture(name, image.clone(), TextureOptions::LINEAR);
        let id = handle.id();
        self.textures.insert(element_id, handle);
        Ok(id)
    }

    /// Drops the element's texture; returns false if it had none
    pub fn release(&mut self, element_id: ElementId) -> bool {
        self.textures.remove(&element_id).is_some()
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    fn test_image() -> ColorImage {
        ColorImage::new([10, 10], egui::Color32::WHITE)
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let id = generate_id();

        let first = manager.get_or_create(id, &test_image(), &ctx).unwrap();
        let second = manager.get_or_create(id, &test_image(), &ctx).unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_release() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let id = generate_id();

        manager.get_or_create(id, &test_image(), &ctx).unwrap();
        assert!(manager.release(id));
        assert!(manager.is_empty());
        // releasing twice is harmless
        assert!(!manager.release(id));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let empty = ColorImage::new([0, 4], egui::Color32::WHITE);

        let result = manager.get_or_create(generate_id(), &empty, &ctx);
        assert!(matches!(result, Err(TextureError::InvalidDimensions(0, 4))));
        assert!(manager.is_empty());
    }
}
