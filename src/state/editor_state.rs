use std::collections::HashSet;

use super::SceneContext;
use crate::element::Element;
use crate::event::EventBus;
use crate::id_generator::ElementId;
use crate::selection::Selection;
use crate::surface::CanvasSurface;
use crate::tools::{ImageTool, TextTool, Tool};
use crate::video::VideoOverlay;

/// Everything the editor knows about the scene.
///
/// Created when the editor starts and torn down when it shuts down. Every element on the
/// surface belongs to exactly one tool collection, and every id a tool holds is on the surface.
#[derive(Debug)]
pub struct EditorState {
    pub surface: CanvasSurface,
    pub selection: Selection,
    pub text_tool: TextTool,
    pub image_tool: ImageTool,
    pub video: VideoOverlay,
}

impl EditorState {
    pub fn new(surface: CanvasSurface, text_tool: TextTool, image_tool: ImageTool, video: VideoOverlay) -> Self {
        Self {
            surface,
            selection: Selection::new(),
            text_tool,
            image_tool,
            video,
        }
    }

    /// Splits the state into the tool that handles an action and the scene it works on
    pub fn text_scene<'a>(&'a mut self, events: &'a EventBus) -> (&'a mut TextTool, SceneContext<'a>) {
        (
            &mut self.text_tool,
            SceneContext::new(&mut self.surface, &mut self.selection, events),
        )
    }

    pub fn image_scene<'a>(&'a mut self, events: &'a EventBus) -> (&'a mut ImageTool, SceneContext<'a>) {
        (
            &mut self.image_tool,
            SceneContext::new(&mut self.surface, &mut self.selection, events),
        )
    }

    /// Does the selection point at a live element (or nowhere)?
    pub fn selection_is_live(&self) -> bool {
        self.selection
            .active()
            .is_none_or(|id| self.surface.element(id).is_some())
    }

    /// Checks that the surface and the tool collections agree on which elements exist
    pub fn is_consistent(&self) -> bool {
        let owned: Vec<ElementId> = self
            .text_tool
            .owned_elements()
            .into_iter()
            .chain(self.image_tool.owned_elements())
            .collect();
        let owned_set: HashSet<ElementId> = owned.iter().copied().collect();
        let on_surface: HashSet<ElementId> = self.surface.elements().map(|e| e.id()).collect();

        owned.len() == owned_set.len() && owned_set == on_surface && self.selection_is_live()
    }
}
