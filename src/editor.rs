use egui::{Context, Painter, Pos2};
use log::{debug, info};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::id_generator::ElementId;
use crate::loader::ImageLoader;
use crate::state::EditorState;
use crate::surface::{CanvasSurface, MountPoint};
use crate::tools::{ImageTool, TextTool};
use crate::video::{VideoOverlay, VideoPlayer};

/// Owns the editor state and runs every user action to completion.
///
/// Each call to [`Editor::execute`] applies the command and then drains the event queue, so
/// selection changes triggered by element subscriptions are settled before control returns.
#[derive(Debug)]
pub struct Editor {
    state: EditorState,
    events: EventBus,
    config: EditorConfig,
    shut_down: bool,
}

impl Editor {
    pub fn new(
        config: EditorConfig,
        mounts: &[MountPoint],
        loader: Box<dyn ImageLoader>,
        player: Box<dyn VideoPlayer>,
    ) -> EditorResult<Self> {
        let surface = CanvasSurface::initialize(mounts, &config.container, config.viewport())?;
        let state = EditorState::new(
            surface,
            TextTool::new(config.font_size, config.font_family),
            ImageTool::new(loader),
            VideoOverlay::with_source(player, config.video_url.clone()),
        );
        info!("Editor started");

        Ok(Self {
            state,
            events: EventBus::new(),
            config,
            shut_down: false,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Observe every event after it has been applied
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn execute(&mut self, command: Command) {
        if self.shut_down {
            debug!("Ignoring {} after shutdown", command.name());
            return;
        }
        debug!("Executing {:?}", command);
        self.apply(command);
        self.process_events();
    }

    fn apply(&mut self, command: Command) {
        let state = &mut self.state;
        match command {
            Command::SetPendingText(text) => state.text_tool.set_pending_text(text),
            Command::ToggleText => {
                let (tool, mut ctx) = state.text_scene(&self.events);
                tool.toggle(&mut ctx);
            }
            Command::SetFontFamily(family) => {
                let (tool, mut ctx) = state.text_scene(&self.events);
                tool.set_font_family(&mut ctx, family);
            }
            Command::AddImage(url) => {
                state.image_tool.add_image(url);
            }
            Command::RemoveLastImage => {
                let (tool, mut ctx) = state.image_scene(&self.events);
                tool.remove_last_image(&mut ctx);
            }
            Command::ToggleVideo => {
                if let Err(err) = state.video.toggle() {
                    self.events.emit(EditorEvent::ResourceLoadFailed {
                        url: state.video.source_url().to_owned(),
                        reason: err.to_string(),
                    });
                }
            }
            Command::StopVideo => state.video.stop(),
            Command::Click(pos) => self.events.emit_all(state.surface.click(pos)),
            Command::Drag { id, delta } => {
                state.surface.drag_by(id, delta);
            }
            Command::EndDrag(id) => self.events.emit_all(state.surface.end_drag(id)),
        }
    }

    /// Places images whose decodes finished since the last call
    pub fn poll_image_decodes(&mut self) -> Vec<ElementId> {
        if self.shut_down {
            return Vec::new();
        }
        let (tool, mut ctx) = self.state.image_scene(&self.events);
        let placed = tool.poll_completions(&mut ctx);
        self.process_events();
        placed
    }

    /// Applies queued events in order. Returns how many were processed.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Some(event) = self.events.next_event() {
            self.apply_event(&event);
            self.events.notify(&event);
            processed += 1;
        }
        processed
    }

    fn apply_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::SelectionChanged(id) => {
                // the element may have been destroyed since it was clicked
                if self.state.surface.element(*id).is_some() {
                    self.state.selection.select(*id);
                    debug!("Selected {}", id);
                }
            }
            EditorEvent::PositionReported { kind, position, .. } => {
                info!("{} moved to: {}, {}", kind, position.x, position.y);
            }
            EditorEvent::SelectionCleared(_)
            | EditorEvent::ElementAdded { .. }
            | EditorEvent::ElementRemoved { .. }
            | EditorEvent::ResourceLoadFailed { .. } => {}
        }
    }

    /// Forward frame time to the video overlay
    pub fn tick(&mut self, dt: f64) {
        self.state.video.tick(dt);
    }

    pub fn paint(&mut self, ctx: &Context, painter: &Painter, origin: Pos2) {
        self.state.surface.paint(ctx, painter, origin);
    }

    /// Releases the surface and the video and empties the tool collections.
    /// Called once, when the editor closes.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.state.selection.clear();
        self.state.text_tool.reset();
        self.state.image_tool.clear();
        self.state.video.stop();
        self.state.surface.teardown();
        self.process_events();
        self.shut_down = true;
        info!("Editor shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
