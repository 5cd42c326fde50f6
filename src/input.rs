use egui::{Pos2, Response, Vec2};

use crate::command::Command;
use crate::id_generator::ElementId;
use crate::surface::CanvasSurface;

/// Pointer gestures on the canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button went down and a drag started here
    Pressed(Pos2),
    Moved(Vec2),
    Released,
    /// Press and release without a drag in between
    Clicked(Pos2),
}

impl PointerEvent {
    /// Reads the gestures out of the canvas response. `origin` is the canvas' top-left corner.
    pub fn from_response(response: &Response, origin: Pos2) -> Vec<PointerEvent> {
        let to_canvas = |pos: Pos2| (pos - origin).to_pos2();
        let mut events = Vec::new();

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Pressed(to_canvas(pos)));
            }
        }
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                events.push(PointerEvent::Moved(delta));
            }
        }
        if response.drag_stopped() {
            events.push(PointerEvent::Released);
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Clicked(to_canvas(pos)));
            }
        }
        events
    }
}

/// Turns pointer gestures into editor commands, remembering which element is being dragged
#[derive(Debug, Default)]
pub struct PointerTracker {
    drag_target: Option<ElementId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_target(&self) -> Option<ElementId> {
        self.drag_target
    }

    pub fn handle(&mut self, event: PointerEvent, surface: &CanvasSurface) -> Option<Command> {
        match event {
            PointerEvent::Pressed(pos) => {
                self.drag_target = surface.hit_test(pos);
                None
            }
            PointerEvent::Moved(delta) => self.drag_target.map(|id| Command::Drag { id, delta }),
            PointerEvent::Released => self.drag_target.take().map(Command::EndDrag),
            PointerEvent::Clicked(pos) => Some(Command::Click(pos)),
        }
    }
}
