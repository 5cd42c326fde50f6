use egui::Pos2;

use crate::element::ElementKind;
use crate::id_generator::ElementId;

/// Messages flowing through the editor's event queue
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// An element was clicked and should become the active one
    SelectionChanged(ElementId),
    /// The selected element was destroyed and the selection dropped
    SelectionCleared(ElementId),
    /// A drag gesture ended; reporting only, the element itself is not moved
    PositionReported {
        id: ElementId,
        kind: ElementKind,
        position: Pos2,
    },
    ElementAdded {
        id: ElementId,
        kind: ElementKind,
    },
    ElementRemoved {
        id: ElementId,
        kind: ElementKind,
    },
    /// An image source failed to fetch or decode; no element was created
    ResourceLoadFailed {
        url: String,
        reason: String,
    },
}
