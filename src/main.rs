#![warn(clippy::all, rust_2018_idioms)]

use scene_editor::{EditorConfig, SceneEditorApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = EditorConfig::load_or_default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.viewport_width + 320.0, config.viewport_height + 40.0])
            .with_title("Scene Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Scene Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(SceneEditorApp::new(cc, config)?))),
    )
}
