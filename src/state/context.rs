use crate::element::{Element, ElementType};
use crate::event::{EditorEvent, EventBus};
use crate::id_generator::ElementId;
use crate::selection::Selection;
use crate::surface::CanvasSurface;

/// The shared scene state a tool may touch while handling one action
#[derive(Debug)]
pub struct SceneContext<'a> {
    pub surface: &'a mut CanvasSurface,
    pub selection: &'a mut Selection,
    pub events: &'a EventBus,
}

impl<'a> SceneContext<'a> {
    pub fn new(surface: &'a mut CanvasSurface, selection: &'a mut Selection, events: &'a EventBus) -> Self {
        Self {
            surface,
            selection,
            events,
        }
    }

    /// Puts an element on the surface. The caller commits.
    pub fn place(&mut self, element: ElementType) -> ElementId {
        let id = element.id();
        let kind = element.kind();
        self.surface.add_element(element);
        self.events.emit(EditorEvent::ElementAdded { id, kind });
        id
    }

    /// Takes an element off the surface and drops the selection if it pointed there.
    /// The caller commits and forgets the id in its own collection.
    pub fn destroy(&mut self, id: ElementId) -> Option<ElementType> {
        let element = self.surface.remove_element(id)?;
        if self.selection.clear_if(id) {
            self.events.emit(EditorEvent::SelectionCleared(id));
        }
        self.events.emit(EditorEvent::ElementRemoved {
            id,
            kind: element.kind(),
        });
        Some(element)
    }
}
