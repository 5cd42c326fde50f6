use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, TextureId, Vec2};

use super::Element;
use super::common::{ElementKind, FontFamily, GLYPH_WIDTH_RATIO};
use super::listener::Listeners;
use crate::id_generator::ElementId;

/// A single line of text placed on the canvas
#[derive(Clone, Debug)]
pub struct TextElement {
    id: ElementId,
    position: Pos2,
    content: String,
    font_size: u32,
    font_family: FontFamily,
    listeners: Listeners,
}

impl TextElement {
    pub fn new(
        id: ElementId,
        content: impl Into<String>,
        font_size: u32,
        font_family: FontFamily,
        position: Pos2,
    ) -> Self {
        Self {
            id,
            position,
            content: content.into(),
            font_size,
            font_family,
            listeners: Listeners::default(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
    }

    pub fn font_id(&self) -> FontId {
        FontId::new(self.font_size as f32, self.font_family.egui_family())
    }
}

impl Element for TextElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Text
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        let size = self.font_size as f32;
        let glyphs = self.content.chars().count() as f32;
        Vec2::new(glyphs * size * GLYPH_WIDTH_RATIO, size)
    }

    fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    fn draw(&self, painter: &Painter, rect: Rect, _texture: Option<TextureId>) {
        painter.text(
            rect.min,
            Align2::LEFT_TOP,
            &self.content,
            self.font_id(),
            Color32::BLACK,
        );
    }
}
