use crate::id_generator::ElementId;

/// The single "active" element, set by clicking it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: ElementId) {
        self.active = Some(id);
    }

    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.active == Some(id)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Clears the selection only if it points at `id`. Returns true if it did.
    pub fn clear_if(&mut self, id: ElementId) -> bool {
        if self.is_selected(id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
