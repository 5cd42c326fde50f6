use egui::Pos2;
use std::sync::Arc;

use crate::event::EditorEvent;
use crate::id_generator::ElementId;

/// Pointer interactions an element can be subscribed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click,
    DragEnd,
}

/// Turns an interaction on an element into a message for the event queue.
/// Receives the element id and its on-screen position at the time of the interaction.
pub type Listener = Arc<dyn Fn(ElementId, Pos2) -> EditorEvent + Send + Sync>;

#[derive(Clone, Default)]
pub struct Listeners {
    click: Vec<Listener>,
    drag_end: Vec<Listener>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("click", &format!("<{} listeners>", self.click.len()))
            .field("drag_end", &format!("<{} listeners>", self.drag_end.len()))
            .finish()
    }
}

impl Listeners {
    pub fn subscribe(&mut self, interaction: Interaction, listener: Listener) {
        match interaction {
            Interaction::Click => self.click.push(listener),
            Interaction::DragEnd => self.drag_end.push(listener),
        }
    }

    pub fn count(&self, interaction: Interaction) -> usize {
        match interaction {
            Interaction::Click => self.click.len(),
            Interaction::DragEnd => self.drag_end.len(),
        }
    }

    pub fn dispatch(&self, interaction: Interaction, id: ElementId, pos: Pos2) -> Vec<EditorEvent> {
        let listeners = match interaction {
            Interaction::Click => &self.click,
            Interaction::DragEnd => &self.drag_end,
        };
        listeners.iter().map(|listener| listener(id, pos)).collect()
    }
}
