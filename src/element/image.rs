use egui::{Color32, ColorImage, Painter, Pos2, Rect, TextureId, Vec2};
use std::sync::Arc;

use super::Element;
use super::common::ElementKind;
use super::listener::Listeners;
use crate::id_generator::ElementId;

/// Decoded pixels of an image source, shared between the element and the texture upload
#[derive(Clone)]
pub struct DecodedImage {
    pixels: Arc<ColorImage>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("size", &self.pixels.size)
            .finish()
    }
}

impl DecodedImage {
    pub fn new(pixels: ColorImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> [usize; 2] {
        self.pixels.size
    }

    pub fn pixels(&self) -> &ColorImage {
        &self.pixels
    }
}

/// Bitmap image placed on the canvas
#[derive(Clone, Debug)]
pub struct ImageElement {
    id: ElementId,
    position: Pos2,
    source_url: String,
    decoded: DecodedImage,
    listeners: Listeners,
}

impl ImageElement {
    pub fn new(id: ElementId, source_url: impl Into<String>, decoded: DecodedImage, position: Pos2) -> Self {
        Self {
            id,
            position,
            source_url: source_url.into(),
            decoded,
            listeners: Listeners::default(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn decoded(&self) -> &DecodedImage {
        &self.decoded
    }

    pub fn natural_size(&self) -> Vec2 {
        let [w, h] = self.decoded.dimensions();
        Vec2::new(w as f32, h as f32)
    }
}

impl Element for ImageElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Image
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.natural_size()
    }

    fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    fn draw(&self, painter: &Painter, rect: Rect, texture: Option<TextureId>) {
        if let Some(texture) = texture {
            painter.image(
                texture,
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        } else {
            // Placeholder until the texture is uploaded
            painter.rect_filled(rect, 0.0, Color32::from_gray(200));
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::from_gray(100)));
        }
    }
}
