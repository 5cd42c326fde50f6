use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::error::EditorResult;
use crate::event::LoggingEventHandler;
use crate::input::PointerTracker;
use crate::loader::ThreadedImageLoader;
use crate::panels::{central_panel, tools_panel};
use crate::surface::{DEFAULT_CONTAINER, MountPoint};
use crate::video::HeadlessPlayer;

/// Length the headless player loops over, matching the default clip
const DEFAULT_CLIP_SECONDS: f64 = 10.0;

pub struct SceneEditorApp {
    editor: Editor,
    tracker: PointerTracker,
}

impl SceneEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> EditorResult<Self> {
        // The central panel is the only container the canvas can mount into
        let mounts = [MountPoint::new(DEFAULT_CONTAINER)];
        let editor = Editor::new(
            config,
            &mounts,
            Box::new(ThreadedImageLoader::with_repaint(cc.egui_ctx.clone())),
            Box::new(HeadlessPlayer::with_duration(DEFAULT_CLIP_SECONDS)),
        )?;
        editor.subscribe(Box::new(LoggingEventHandler));

        Ok(Self {
            editor,
            tracker: PointerTracker::new(),
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }
}

impl eframe::App for SceneEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.editor.tick(dt);
        self.editor.poll_image_decodes();

        let mut commands = tools_panel(ctx, &self.editor);
        commands.extend(central_panel(ctx, &mut self.editor, &mut self.tracker));

        for command in commands {
            self.editor.execute(command);
        }

        if self.editor.state().video.is_playing() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.editor.shutdown();
    }
}
