use log::info;

use super::{Tool, subscribe_interactions};
use crate::element::{DEFAULT_FONT_SIZE, DEFAULT_TEXT_POSITION, FontFamily, factory};
use crate::id_generator::ElementId;
use crate::state::SceneContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextToolState {
    /// No text on the canvas
    Empty,
    /// Exactly one text element is on the canvas
    Placed(ElementId),
}

/// Owns at most one text element. Toggling while one exists removes it.
#[derive(Debug, Clone)]
pub struct TextTool {
    state: TextToolState,
    /// What the user is typing; only copied into an element when one is created
    pending_text: String,
    font_size: u32,
    font_family: FontFamily,
}

impl Default for TextTool {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, FontFamily::default())
    }
}

impl TextTool {
    pub fn new(font_size: u32, font_family: FontFamily) -> Self {
        Self {
            state: TextToolState::Empty,
            pending_text: String::new(),
            font_size,
            font_family,
        }
    }

    pub fn state(&self) -> TextToolState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, TextToolState::Placed(_))
    }

    pub fn element_id(&self) -> Option<ElementId> {
        match self.state {
            TextToolState::Placed(id) => Some(id),
            TextToolState::Empty => None,
        }
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    /// Toggle using the tool's own pending text and font settings
    pub fn toggle(&mut self, ctx: &mut SceneContext<'_>) -> TextToolState {
        let content = std::mem::take(&mut self.pending_text);
        let state = self.toggle_text(ctx, &content, self.font_size, self.font_family);
        if state == TextToolState::Empty {
            // nothing was created, so the typed text stays in the input
            self.pending_text = content;
        }
        state
    }

    /// Creates the text element if there is none, otherwise removes the existing one.
    /// When removing, `content`, `font_size` and `font_family` are ignored.
    pub fn toggle_text(
        &mut self,
        ctx: &mut SceneContext<'_>,
        content: &str,
        font_size: u32,
        font_family: FontFamily,
    ) -> TextToolState {
        match self.state {
            TextToolState::Placed(id) => {
                ctx.destroy(id);
                ctx.surface.commit();
                info!("Removed text {}", id);
                self.state = TextToolState::Empty;
            }
            TextToolState::Empty => {
                let mut element =
                    factory::create_text(content, font_size, font_family, DEFAULT_TEXT_POSITION);
                subscribe_interactions(&mut element);
                let id = ctx.place(element);
                ctx.surface.commit();
                info!("Added text {} ({:?}, {}px {})", id, content, font_size, font_family);
                self.pending_text.clear();
                self.state = TextToolState::Placed(id);
            }
        }
        self.state
    }

    /// Forgets the placed element without touching the surface.
    /// Used when the whole surface is released at once.
    pub fn reset(&mut self) {
        self.state = TextToolState::Empty;
        self.pending_text.clear();
    }

    /// Sets the family for the next text and restyles the placed one, if any
    pub fn set_font_family(&mut self, ctx: &mut SceneContext<'_>, family: FontFamily) {
        self.font_family = family;

        let Some(id) = self.element_id() else {
            return;
        };
        if let Some(text) = ctx.surface.element_mut(id).and_then(|e| e.as_text_mut()) {
            text.set_font_family(family);
            ctx.surface.commit();
        }
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn owned_elements(&self) -> Vec<ElementId> {
        self.element_id().into_iter().collect()
    }
}
