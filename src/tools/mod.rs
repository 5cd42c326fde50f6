use std::sync::Arc;

use crate::element::{Element, ElementType, Interaction};
use crate::event::EditorEvent;
use crate::id_generator::ElementId;

mod image_tool;
mod text_tool;

pub use image_tool::ImageTool;
pub use text_tool::{TextTool, TextToolState};

/// A component that creates, mutates and destroys one category of scene element
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Ids of the elements this tool currently owns, bottom to top
    fn owned_elements(&self) -> Vec<ElementId>;

    fn owns(&self, id: ElementId) -> bool {
        self.owned_elements().contains(&id)
    }
}

/// Wires the click and drag-end subscriptions every placed element gets:
/// a click asks for the element to be selected, a drag end reports where it was dropped.
pub(crate) fn subscribe_interactions(element: &mut ElementType) {
    let kind = element.kind();
    element.on(
        Interaction::Click,
        Arc::new(|id, _| EditorEvent::SelectionChanged(id)),
    );
    element.on(
        Interaction::DragEnd,
        Arc::new(move |id, position| EditorEvent::PositionReported { id, kind, position }),
    );
}
