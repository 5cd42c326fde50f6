use crate::command::Command;
use crate::editor::Editor;
use crate::element::FontFamily;
use crate::video::PlaybackState;

/// Left side panel with the text, image and video controls.
/// Returns the commands triggered this frame.
pub fn tools_panel(ctx: &egui::Context, editor: &Editor) -> Vec<Command> {
    let mut commands = Vec::new();
    let state = editor.state();

    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Start Editing from here");
            ui.separator();

            ui.label("Insert text");
            ui.horizontal(|ui| {
                let mut text = state.text_tool.pending_text().to_owned();
                if ui.text_edit_singleline(&mut text).changed() {
                    commands.push(Command::SetPendingText(text));
                }
                let label = if state.text_tool.is_placed() {
                    "Remove Text"
                } else {
                    "Add Text"
                };
                if ui.button(label).clicked() {
                    commands.push(Command::ToggleText);
                }
            });

            let current = state.text_tool.font_family();
            let mut family = current;
            egui::ComboBox::from_label("Font style")
                .selected_text(family.name())
                .show_ui(ui, |ui| {
                    for option in FontFamily::ALL {
                        ui.selectable_value(&mut family, option, option.name());
                    }
                });
            if family != current {
                commands.push(Command::SetFontFamily(family));
            }

            ui.separator();
            ui.label("Add Image");
            ui.horizontal(|ui| {
                if ui.button("Add Image").clicked() {
                    commands.push(Command::AddImage(editor.config().image_url.clone()));
                }
                if ui.button("Remove Image").clicked() {
                    commands.push(Command::RemoveLastImage);
                }
            });
            let loading = state.image_tool.pending_decodes().len();
            if loading > 0 {
                ui.label(format!("Loading {} image(s)…", loading));
            }

            ui.separator();
            ui.label("Add Video");
            ui.horizontal(|ui| {
                let label = match state.video.state() {
                    PlaybackState::Absent => "Add Video",
                    PlaybackState::Playing => "Pause Video",
                    PlaybackState::Paused => "Play Video",
                };
                if ui.button(label).clicked() {
                    commands.push(Command::ToggleVideo);
                }
                if ui.button("Stop Video").clicked() {
                    commands.push(Command::StopVideo);
                }
            });

            ui.separator();
            ui.label(format!("Elements on canvas: {}", state.surface.len()));
            match state.selection.active() {
                Some(id) => ui.label(format!("Selected: {}", id)),
                None => ui.label("Nothing selected"),
            };
        });

    commands
}
