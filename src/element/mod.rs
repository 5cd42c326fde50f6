use egui::{Painter, Pos2, Rect, TextureId, Vec2};

mod common;
pub(crate) mod image;
pub mod listener;
pub(crate) mod text;

pub use common::{
    DEFAULT_FONT_SIZE, DEFAULT_IMAGE_POSITION, DEFAULT_TEXT_POSITION, ElementKind, FontFamily,
};
pub use image::{DecodedImage, ImageElement};
pub use listener::{Interaction, Listener, Listeners};
pub use text::TextElement;

use crate::event::EditorEvent;
use crate::id_generator::ElementId;

/// Common trait that all scene elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    fn kind(&self) -> ElementKind;

    /// Position in canvas coordinates, as placed by the tool that created it
    fn position(&self) -> Pos2;

    /// Every element in the scene can be dragged
    fn draggable(&self) -> bool {
        true
    }

    /// Extent of the element's visual
    fn size(&self) -> Vec2;

    fn listeners(&self) -> &Listeners;

    fn listeners_mut(&mut self) -> &mut Listeners;

    /// Draw the element into `rect` (screen space)
    fn draw(&self, painter: &Painter, rect: Rect, texture: Option<TextureId>);

    /// Bounding rectangle when the element's top-left corner sits at `origin`
    fn rect_at(&self, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, self.size())
    }

    fn on(&mut self, interaction: Interaction, listener: Listener) {
        self.listeners_mut().subscribe(interaction, listener);
    }

    /// Run the element's subscriptions for `interaction`
    fn emit(&self, interaction: Interaction, pos: Pos2) -> Vec<EditorEvent> {
        self.listeners().dispatch(interaction, self.id(), pos)
    }
}

/// Enumeration of all element types in the scene
#[derive(Clone, Debug)]
pub enum ElementType {
    Text(TextElement),
    Image(ImageElement),
}

impl ElementType {
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            ElementType::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            ElementType::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            ElementType::Image(i) => Some(i),
            _ => None,
        }
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Text(t) => t.id(),
            ElementType::Image(i) => i.id(),
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            ElementType::Text(_) => ElementKind::Text,
            ElementType::Image(_) => ElementKind::Image,
        }
    }

    fn position(&self) -> Pos2 {
        match self {
            ElementType::Text(t) => t.position(),
            ElementType::Image(i) => i.position(),
        }
    }

    fn size(&self) -> Vec2 {
        match self {
            ElementType::Text(t) => t.size(),
            ElementType::Image(i) => i.size(),
        }
    }

    fn listeners(&self) -> &Listeners {
        match self {
            ElementType::Text(t) => t.listeners(),
            ElementType::Image(i) => i.listeners(),
        }
    }

    fn listeners_mut(&mut self) -> &mut Listeners {
        match self {
            ElementType::Text(t) => t.listeners_mut(),
            ElementType::Image(i) => i.listeners_mut(),
        }
    }

    fn draw(&self, painter: &Painter, rect: Rect, texture: Option<TextureId>) {
        match self {
            ElementType::Text(t) => t.draw(painter, rect, texture),
            ElementType::Image(i) => i.draw(painter, rect, texture),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;

    /// Create a new text element with a fresh id
    pub fn create_text(
        content: impl Into<String>,
        font_size: u32,
        font_family: FontFamily,
        position: Pos2,
    ) -> ElementType {
        ElementType::Text(TextElement::new(
            generate_id(),
            content,
            font_size,
            font_family,
            position,
        ))
    }

    /// Create a new image element with a fresh id
    pub fn create_image(
        source_url: impl Into<String>,
        decoded: DecodedImage,
        position: Pos2,
    ) -> ElementType {
        ElementType::Image(ImageElement::new(generate_id(), source_url, decoded, position))
    }
}
