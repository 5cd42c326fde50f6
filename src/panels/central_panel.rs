use egui::{Align2, Color32, FontId, Rect, Sense, Stroke};

use crate::command::Command;
use crate::editor::Editor;
use crate::element::Element;
use crate::input::{PointerEvent, PointerTracker};

/// The canvas: video background, committed scene elements, selection outline.
/// Returns the commands produced by pointer input on the canvas.
pub fn central_panel(ctx: &egui::Context, editor: &mut Editor, tracker: &mut PointerTracker) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let viewport = editor.state().surface.viewport();
        let (response, painter) = ui.allocate_painter(viewport, Sense::click_and_drag());
        let canvas = response.rect;
        let origin = canvas.min;

        painter.rect_filled(canvas, 0.0, Color32::WHITE);
        paint_video_overlay(&painter, canvas, editor);

        editor.paint(ctx, &painter, origin);

        let state = editor.state();
        if let Some(id) = state.selection.active() {
            if let (Some(element), Some(pos)) = (state.surface.element(id), state.surface.screen_position(id)) {
                let rect = element.rect_at(origin + pos.to_vec2());
                painter.rect_stroke(rect.expand(2.0), 0.0, Stroke::new(1.0, Color32::from_rgb(33, 150, 243)));
            }
        }
        painter.rect_stroke(canvas, 0.0, Stroke::new(1.0, Color32::from_gray(160)));

        for event in PointerEvent::from_response(&response, origin) {
            if let Some(command) = tracker.handle(event, &editor.state().surface) {
                commands.push(command);
            }
        }
    });

    commands
}

/// Stand-in for the video frame, drawn beneath every element
fn paint_video_overlay(painter: &egui::Painter, canvas: Rect, editor: &Editor) {
    let video = &editor.state().video;
    if video.url().is_empty() {
        return;
    }

    painter.rect_filled(canvas, 0.0, Color32::from_gray(40));
    let icon = if video.is_playing() { "▶" } else { "⏸" };
    painter.text(
        canvas.left_bottom() + egui::vec2(8.0, -8.0),
        Align2::LEFT_BOTTOM,
        format!("{} {}  {:.1}s", icon, video.url(), video.current_time()),
        FontId::proportional(14.0),
        Color32::from_gray(220),
    );
}
